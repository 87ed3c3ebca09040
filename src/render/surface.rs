use crate::{
    foundation::core::{Argb, SurfaceSize},
    foundation::error::HostResult,
    registry::sprite::{Bitmap, TextSprite},
    render::plan::{Draw, RenderPlan},
};

/// Drawing target a canvas is composited into.
///
/// This is the seam to the host toolkit. Calls happen on the thread that owns
/// the registry.
pub trait Surface {
    /// Pixel dimensions of the target.
    fn size(&self) -> SurfaceSize;

    /// Fill the whole surface with `color`, discarding the previous frame.
    fn clear(&mut self, color: Argb) -> HostResult<()>;

    /// Composite `bitmap` with its top-left corner at `(left, top)`, clipped to the surface.
    fn blit(&mut self, left: i32, top: i32, bitmap: &Bitmap) -> HostResult<()>;

    /// Draw `text` anchored at `(left, top)`.
    fn draw_text(&mut self, left: i32, top: i32, text: &TextSprite) -> HostResult<()>;

    /// Finish the frame and ask the host to repaint. Returns the new frame number.
    fn present(&mut self) -> HostResult<u64>;
}

/// Apply `plan` to `surface`: clear, every op in order, then present.
pub fn execute_plan<S: Surface + ?Sized>(
    surface: &mut S,
    plan: &RenderPlan<'_>,
) -> HostResult<u64> {
    surface.clear(plan.clear)?;

    for op in &plan.ops {
        match op.draw {
            Draw::Blit(bitmap) => surface.blit(op.left, op.top, bitmap)?,
            Draw::Text(text) => surface.draw_text(op.left, op.top, text)?,
        }
    }

    surface.present()
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
