use std::collections::BTreeMap;

use crate::{
    foundation::core::{Argb, ElementId, ElementKind, SurfaceSize},
    foundation::error::{HostError, HostResult},
    registry::ids::IdAllocator,
};

/// Default upper bound for bitmap and canvas width/height.
pub const DEFAULT_MAX_SURFACE_DIM: u32 = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Addressable 2D ARGB pixel grid, zero-initialized (fully transparent).
pub struct Bitmap {
    size: SurfaceSize,
    pixels: Vec<Argb>,
}

impl Bitmap {
    /// Transparent bitmap of `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![Argb::TRANSPARENT; size.area()],
        }
    }

    /// Pixel dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Color at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Argb> {
        self.size.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Argb) -> bool {
        match self.size.index_of(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    fn fill_from(&mut self, raw: &[u32]) -> HostResult<()> {
        if raw.len() != self.pixels.len() {
            return Err(HostError::validation(format!(
                "bitmap upload expects {} pixels, got {}",
                self.pixels.len(),
                raw.len()
            )));
        }
        for (dst, &src) in self.pixels.iter_mut().zip(raw) {
            *dst = Argb(src);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Text sprite payload. Style is fixed at creation; only `content` changes.
pub struct TextSprite {
    /// Current string.
    pub content: String,
    /// Fill color.
    pub color: Argb,
    /// Font size in pixels.
    pub font_size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Kind-specific sprite payload.
pub enum SpriteKind {
    /// Pixel sprite blitted at its position.
    Bitmap(Bitmap),
    /// String drawn at its position.
    Text(TextSprite),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A drawable unit placed on canvases by reference.
pub struct Sprite {
    id: ElementId,
    /// Primary draw-order key; higher draws later.
    pub z_index: i32,
    /// Horizontal pixel offset on the canvas.
    pub left: i32,
    /// Vertical pixel offset on the canvas.
    pub top: i32,
    kind: SpriteKind,
}

impl Sprite {
    fn new(id: ElementId, kind: SpriteKind) -> Self {
        Self {
            id,
            z_index: 0,
            left: 0,
            top: 0,
            kind,
        }
    }

    /// Immutable sprite id (doubles as creation order).
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Kind-specific payload.
    pub fn kind(&self) -> &SpriteKind {
        &self.kind
    }

    /// Bitmap payload, if this is a bitmap sprite.
    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match &self.kind {
            SpriteKind::Bitmap(b) => Some(b),
            SpriteKind::Text(_) => None,
        }
    }

    /// Text payload, if this is a text sprite.
    pub fn as_text(&self) -> Option<&TextSprite> {
        match &self.kind {
            SpriteKind::Text(t) => Some(t),
            SpriteKind::Bitmap(_) => None,
        }
    }

    /// Composite draw-order key: z-index in the high 32 bits, id in the low 32.
    ///
    /// Ids are unique, so no two sprites share a key.
    pub fn sort_key(&self) -> i64 {
        (i64::from(self.z_index) << 32) | i64::from(self.id)
    }
}

/// Owning table of all sprites, keyed by id.
#[derive(Clone, Debug)]
pub struct SpriteStore {
    sprites: BTreeMap<ElementId, Sprite>,
    max_surface_dim: u32,
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SURFACE_DIM)
    }
}

impl SpriteStore {
    /// Empty store accepting bitmaps up to `max_surface_dim` on each side.
    pub fn with_limit(max_surface_dim: u32) -> Self {
        Self {
            sprites: BTreeMap::new(),
            max_surface_dim,
        }
    }

    /// Create a transparent bitmap sprite and return its id.
    pub fn create_bitmap(
        &mut self,
        ids: &mut IdAllocator,
        width: i32,
        height: i32,
    ) -> HostResult<ElementId> {
        let size = SurfaceSize::new(width, height, self.max_surface_dim)?;
        let id = ids.next(ElementKind::Sprite);
        self.sprites
            .insert(id, Sprite::new(id, SpriteKind::Bitmap(Bitmap::new(size))));
        Ok(id)
    }

    /// Create a text sprite and return its id.
    pub fn create_text(
        &mut self,
        ids: &mut IdAllocator,
        content: impl Into<String>,
        color: Argb,
        font_size: i32,
    ) -> HostResult<ElementId> {
        if font_size <= 0 {
            return Err(HostError::validation(format!(
                "font size must be > 0, got {font_size}"
            )));
        }
        let id = ids.next(ElementKind::Sprite);
        let text = TextSprite {
            content: content.into(),
            color,
            font_size: font_size as u32,
        };
        self.sprites
            .insert(id, Sprite::new(id, SpriteKind::Text(text)));
        Ok(id)
    }

    /// Replace the content of a text sprite.
    pub fn set_text(&mut self, id: ElementId, content: impl Into<String>) -> HostResult<()> {
        match &mut self.get_mut(id)?.kind {
            SpriteKind::Text(t) => {
                t.content = content.into();
                Ok(())
            }
            SpriteKind::Bitmap(_) => Err(HostError::not_found(ElementKind::Sprite, id)),
        }
    }

    /// Write one pixel of a bitmap sprite.
    pub fn set_pixel(&mut self, id: ElementId, x: i32, y: i32, color: Argb) -> HostResult<()> {
        let SpriteKind::Bitmap(bitmap) = &mut self.get_mut(id)?.kind else {
            return Err(HostError::not_found(ElementKind::Sprite, id));
        };
        if bitmap.set_pixel(x, y, color) {
            return Ok(());
        }
        Err(HostError::OutOfBounds {
            id,
            x,
            y,
            width: bitmap.width(),
            height: bitmap.height(),
        })
    }

    /// Replace every pixel of a bitmap sprite from row-major `0xAARRGGBB` values.
    pub fn upload_pixels(&mut self, id: ElementId, raw: &[u32]) -> HostResult<()> {
        let SpriteKind::Bitmap(bitmap) = &mut self.get_mut(id)?.kind else {
            return Err(HostError::not_found(ElementKind::Sprite, id));
        };
        bitmap.fill_from(raw)
    }

    /// Move a sprite.
    pub fn set_position(&mut self, id: ElementId, left: i32, top: i32) -> HostResult<()> {
        let sprite = self.get_mut(id)?;
        sprite.left = left;
        sprite.top = top;
        Ok(())
    }

    /// Change a sprite's z-index.
    pub fn set_z_index(&mut self, id: ElementId, z_index: i32) -> HostResult<()> {
        self.get_mut(id)?.z_index = z_index;
        Ok(())
    }

    /// Remove a sprite. Removing an absent id is not an error.
    ///
    /// Returns whether a sprite was actually removed.
    pub fn delete(&mut self, id: ElementId) -> bool {
        self.sprites.remove(&id).is_some()
    }

    /// Read-only view of a sprite.
    pub fn get(&self, id: ElementId) -> HostResult<&Sprite> {
        self.sprites
            .get(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::Sprite, id))
    }

    /// Resolve a reference without treating absence as an error.
    pub fn resolve(&self, id: ElementId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    /// True if `id` is live.
    pub fn contains(&self, id: ElementId) -> bool {
        self.sprites.contains_key(&id)
    }

    /// Number of live sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// True when no sprites are live.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Live sprites in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.values()
    }

    fn get_mut(&mut self, id: ElementId) -> HostResult<&mut Sprite> {
        self.sprites
            .get_mut(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::Sprite, id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/sprite.rs"]
mod tests;
