//! Canvas rendering.
//!
//! A canvas produces a [`plan::RenderPlan`] each frame; [`surface::execute_plan`]
//! replays it on any [`surface::Surface`]. The CPU surface is the built-in target.

pub(crate) mod composite;
/// Software surface with premultiplied RGBA8 storage.
pub mod cpu;
pub mod plan;
/// Drawing target trait and the plan executor.
pub mod surface;
