use crate::{
    foundation::core::{Argb, SurfaceSize},
    foundation::error::HostResult,
    registry::sprite::{Bitmap, TextSprite},
    render::composite::{over_row_in_place, unpremultiply},
    render::surface::Surface,
};

#[derive(Clone, Debug)]
/// Read-back of a presented frame.
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy, as PNG encoders expect.
    pub fn to_straight(&self) -> FrameRGBA {
        if !self.premultiplied {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            data.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        FrameRGBA {
            width: self.width,
            height: self.height,
            data,
            premultiplied: false,
        }
    }

    /// RGBA8 pixel at `(x, y)`, in the frame's alpha mode.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A text draw recorded for the host's text shaper.
pub struct TextRun {
    /// Anchor column.
    pub left: i32,
    /// Anchor row (baseline, as the host toolkit draws text).
    pub top: i32,
    /// String to draw.
    pub content: String,
    /// Fill color.
    pub color: Argb,
    /// Font size in pixels.
    pub font_size: u32,
}

/// CPU framebuffer surface holding premultiplied RGBA8 pixels.
///
/// Bitmaps are composited source-over with clipping. Text is not rasterized here;
/// each draw is recorded as a [`TextRun`] in draw order for the host to shape
/// on top of the pixels.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    size: SurfaceSize,
    data: Vec<u8>,
    text_runs: Vec<TextRun>,
    frame_id: u64,
}

impl CpuSurface {
    /// Transparent surface of `size`.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            data: vec![0; size.area() * 4],
            text_runs: Vec::new(),
            frame_id: 0,
        }
    }

    /// Number of frames presented so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Text draws of the current frame, in draw order.
    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Copy of the current pixels.
    pub fn readback(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.data.clone(),
            premultiplied: true,
        }
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, color: Argb) -> HostResult<()> {
        let px = color.to_premul_rgba8();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
        self.text_runs.clear();
        Ok(())
    }

    fn blit(&mut self, left: i32, top: i32, bitmap: &Bitmap) -> HostResult<()> {
        let dst_w = i64::from(self.size.width);
        let dst_h = i64::from(self.size.height);
        let src_w = i64::from(bitmap.width());
        let src_h = i64::from(bitmap.height());

        // Visible source window after clipping against the surface.
        let x0 = (-i64::from(left)).max(0);
        let y0 = (-i64::from(top)).max(0);
        let x1 = (dst_w - i64::from(left)).min(src_w);
        let y1 = (dst_h - i64::from(top)).min(src_h);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let pixels = bitmap.pixels();
        let run = (x1 - x0) as usize;
        let mut src_row = Vec::with_capacity(run * 4);
        for sy in y0..y1 {
            let s = (sy * src_w + x0) as usize;
            src_row.clear();
            for px in &pixels[s..s + run] {
                src_row.extend_from_slice(&px.to_premul_rgba8());
            }
            let d = (((sy + i64::from(top)) * dst_w + x0 + i64::from(left)) * 4) as usize;
            over_row_in_place(&mut self.data[d..d + run * 4], &src_row)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, left: i32, top: i32, text: &TextSprite) -> HostResult<()> {
        self.text_runs.push(TextRun {
            left,
            top,
            content: text.content.clone(),
            color: text.color,
            font_size: text.font_size,
        });
        Ok(())
    }

    fn present(&mut self) -> HostResult<u64> {
        self.frame_id += 1;
        Ok(self.frame_id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
