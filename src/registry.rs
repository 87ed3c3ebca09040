//! Element ownership.
//!
//! [`context::GuiContext`] is the only entry point that mutates state; the other
//! modules are its building blocks and are public for read access and tests.

/// Canvases and their draw-order projection.
pub mod canvas;
/// The composition root owning every element.
pub mod context;
/// Per-category id allocation.
pub mod ids;
/// Bitmap and text sprites and the table that owns them.
pub mod sprite;
/// Toolkit-native widgets and the vertical column.
pub mod widgets;
