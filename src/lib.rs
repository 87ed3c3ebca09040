//! spritehost is the host-side element registry and sprite compositor behind a small
//! GUI runtime.
//!
//! The runtime creates widgets and sprites through boundary calls and receives
//! integer ids back. The host owns every element:
//!
//! - Build a [`GuiContext`] (optionally with [`HostSettings`] and an [`EventSink`])
//! - Create widgets and sprites, attach sprites to a [`Canvas`]
//! - Redraw canvases: sprites are composited back-to-front by `(z_index, id)`
//!
//! Button activations flow back to the runtime as [`RuntimeEvent`]s. A [`Ticker`]
//! paces runtime ticks, and [`Session`] replays recorded [`Script`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Packaged resource lookup.
pub mod assets;
/// Inbound calls, outbound events, runtime callbacks.
pub mod boundary;
pub mod cadence;
/// Host settings and their sources.
pub mod config;
/// Element ownership: ids, sprites, canvases, widgets.
pub mod registry;
/// Render plans and surfaces.
pub mod render;
pub mod script;

pub use crate::foundation::core::{Argb, ElementId, ElementKind, SurfaceSize};
pub use crate::foundation::error::{HostError, HostResult};

pub use crate::assets::AssetDir;
pub use crate::boundary::calls::{HostCall, HostReply, dispatch};
pub use crate::boundary::events::{ChannelSink, EventSink, NullSink, RecordingSink, RuntimeEvent};
pub use crate::boundary::handlers::{CallbackIndex, HandlerTable};
pub use crate::cadence::{TickCadence, TickRequest, Ticker};
pub use crate::config::HostSettings;
pub use crate::registry::canvas::Canvas;
pub use crate::registry::context::GuiContext;
pub use crate::registry::sprite::{Bitmap, Sprite, SpriteKind, SpriteStore, TextSprite};
pub use crate::registry::widgets::{Button, Column, TextView, Widget};
pub use crate::render::cpu::{CpuSurface, FrameRGBA, TextRun};
pub use crate::render::plan::{Draw, RenderOp, RenderPlan};
pub use crate::render::surface::{Surface, execute_plan};
pub use crate::script::{CallOutcome, Script, Session};
