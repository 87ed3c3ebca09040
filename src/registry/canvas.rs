use crate::{
    foundation::core::{Argb, ElementId, SurfaceSize},
    registry::sprite::{SpriteKind, SpriteStore},
    render::cpu::CpuSurface,
    render::plan::{Draw, RenderOp, RenderPlan},
};

/// Fixed-size drawing area holding non-owning sprite references.
///
/// References are sprite ids kept in attach order. They are never reordered;
/// draw order is computed per frame by [`Canvas::render`].
#[derive(Clone, Debug)]
pub struct Canvas {
    id: ElementId,
    size: SurfaceSize,
    refs: Vec<ElementId>,
    surface: CpuSurface,
}

impl Canvas {
    /// Empty canvas backed by a transparent surface of `size`.
    pub fn new(id: ElementId, size: SurfaceSize) -> Self {
        Self {
            id,
            size,
            refs: Vec::new(),
            surface: CpuSurface::new(size),
        }
    }

    /// Canvas id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Pixel dimensions fixed at creation.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Attached sprite ids in attach order (duplicates included).
    pub fn references(&self) -> &[ElementId] {
        &self.refs
    }

    /// Add a reference. Attaching the same sprite twice draws it twice.
    pub fn attach(&mut self, sprite: ElementId) {
        self.refs.push(sprite);
    }

    /// Remove the first reference to `sprite`. Returns whether one was removed.
    pub fn detach(&mut self, sprite: ElementId) -> bool {
        match self.refs.iter().position(|&r| r == sprite) {
            Some(i) => {
                self.refs.remove(i);
                true
            }
            None => false,
        }
    }

    /// Build this frame's draw sequence from the current store contents.
    ///
    /// References whose sprite is gone are skipped. Ops are sorted ascending by
    /// [`Sprite::sort_key`](crate::Sprite::sort_key): z-index first, then creation
    /// order.
    pub fn render<'a>(&self, store: &'a SpriteStore, clear: Argb) -> RenderPlan<'a> {
        let mut keyed: Vec<(i64, RenderOp<'a>)> = self
            .refs
            .iter()
            .filter_map(|&id| store.resolve(id))
            .map(|sprite| {
                let draw = match sprite.kind() {
                    SpriteKind::Bitmap(b) => Draw::Blit(b),
                    SpriteKind::Text(t) => Draw::Text(t),
                };
                let op = RenderOp {
                    sprite: sprite.id(),
                    z_index: sprite.z_index,
                    left: sprite.left,
                    top: sprite.top,
                    draw,
                };
                (sprite.sort_key(), op)
            })
            .collect();

        // Stable: duplicate references of one sprite keep their relative order.
        keyed.sort_by_key(|(key, _)| *key);

        RenderPlan {
            size: self.size,
            clear,
            ops: keyed.into_iter().map(|(_, op)| op).collect(),
        }
    }

    /// Backing surface (last presented frame).
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut CpuSurface {
        &mut self.surface
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/canvas.rs"]
mod tests;
