use crate::foundation::error::{HostError, HostResult};

/// Integer identifier handed across the runtime boundary.
///
/// Ids are scoped per [`ElementKind`]; `0` is never issued.
pub type ElementId = u32;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Id category. Each category owns an independent id-space.
pub enum ElementKind {
    /// Plain text views in the widget column.
    TextView,
    /// Push buttons in the widget column.
    Button,
    /// Sprite canvases.
    Canvas,
    /// Bitmap and text sprites (one shared id-space).
    Sprite,
}

impl ElementKind {
    /// All categories, in allocator slot order.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::TextView,
        ElementKind::Button,
        ElementKind::Canvas,
        ElementKind::Sprite,
    ];

    pub(crate) fn slot(self) -> usize {
        match self {
            ElementKind::TextView => 0,
            ElementKind::Button => 1,
            ElementKind::Canvas => 2,
            ElementKind::Sprite => 3,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementKind::TextView => "text view",
            ElementKind::Button => "button",
            ElementKind::Canvas => "canvas",
            ElementKind::Sprite => "sprite",
        };
        f.write_str(name)
    }
}

/// Straight-alpha color packed as `0xAARRGGBB`, the runtime's wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

/// Accepts the packed `u32` form or the signed `i32` the runtime passes.
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Packed(u32),
            Signed(i32),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Packed(raw) => Argb(raw),
            Wire::Signed(raw) => Argb::from_i32(raw),
        })
    }
}

impl Argb {
    /// Fully transparent black (the initial value of every bitmap pixel).
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Reinterpret a signed runtime integer as a packed color.
    pub fn from_i32(raw: i32) -> Self {
        Self(raw as u32)
    }

    /// Alpha channel.
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Convert to premultiplied RGBA8 (r,g,b already multiplied by a).
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        let a = self.a();
        [premul(self.r(), a), premul(self.g(), a), premul(self.b(), a), a]
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Validated pixel dimensions of a canvas or bitmap.
pub struct SurfaceSize {
    /// Width in pixels (> 0).
    pub width: u32,
    /// Height in pixels (> 0).
    pub height: u32,
}

impl SurfaceSize {
    /// Validate runtime-supplied dimensions against `max_dim`.
    pub fn new(width: i32, height: i32, max_dim: u32) -> HostResult<Self> {
        let ok = |v: i32| v > 0 && (v as u32) <= max_dim;
        if !ok(width) || !ok(height) {
            return Err(HostError::invalid_dimensions(width, height));
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Total pixel count.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Row-major index of `(x, y)`, or `None` when outside.
    pub fn index_of(self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || (x as u32) >= self.width || (y as u32) >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
