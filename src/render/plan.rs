//! Draw sequence produced by rendering one canvas.
//!
//! A [`RenderPlan`] is a read-only projection of registry state: it borrows sprite
//! payloads instead of copying them, and it is rebuilt from scratch on every
//! redraw. Ops are already in painter's order.

use crate::{
    foundation::core::{Argb, ElementId, SurfaceSize},
    registry::sprite::{Bitmap, TextSprite},
};

#[derive(Clone, Copy, Debug)]
/// What a single op draws.
pub enum Draw<'a> {
    /// Blit a bitmap with its top-left corner at the op position.
    Blit(&'a Bitmap),
    /// Draw a string at the op position with the sprite's color and size.
    Text(&'a TextSprite),
}

#[derive(Clone, Copy, Debug)]
/// One draw instruction for one attached sprite reference.
pub struct RenderOp<'a> {
    /// Sprite that produced this op.
    pub sprite: ElementId,
    /// Sprite z-index at plan time.
    pub z_index: i32,
    /// Horizontal offset.
    pub left: i32,
    /// Vertical offset.
    pub top: i32,
    /// Payload to draw.
    pub draw: Draw<'a>,
}

#[derive(Clone, Debug)]
/// Complete frame description: clear, then ops in order.
pub struct RenderPlan<'a> {
    /// Target surface dimensions.
    pub size: SurfaceSize,
    /// Background painted before any op.
    pub clear: Argb,
    /// Draw ops in painter's order (first op is drawn first).
    pub ops: Vec<RenderOp<'a>>,
}

impl RenderPlan<'_> {
    /// Sprite ids in draw order; duplicated references appear once per reference.
    pub fn sprite_order(&self) -> Vec<ElementId> {
        self.ops.iter().map(|op| op.sprite).collect()
    }

    /// True when the frame is just the background.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
