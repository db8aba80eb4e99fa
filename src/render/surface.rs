use crate::foundation::core::Canvas;
use crate::foundation::error::{HaloError, HaloResult};

/// Mutable premultiplied RGBA8 raster with fixed dimensions, backed by a `vello_cpu` pixmap.
pub struct Surface {
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Create a transparent surface. Each side must be in `1..=65535`.
    pub fn new(width: u32, height: u32) -> HaloResult<Self> {
        let side = |v: u32, name: &str| {
            u16::try_from(v)
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| {
                    HaloError::validation(format!("surface {name} must be in 1..=65535, got {v}"))
                })
        };
        let w = side(width, "width")?;
        let h = side(height, "height")?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        pixmap.data_as_u8_slice_mut().fill(0);
        Ok(Self { pixmap })
    }

    /// Create a surface matching `canvas`.
    pub fn for_canvas(canvas: Canvas) -> HaloResult<Self> {
        Self::new(canvas.width, canvas.height)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Mutable premultiplied RGBA8 bytes, row-major.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = ((y as usize) * (self.width() as usize) + (x as usize)) * 4;
        let d = self.data();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Overwrite every pixel with `premul`.
    pub fn fill(&mut self, premul: [u8; 4]) {
        for px in self.data_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Replace this surface's pixels with `other`'s. Sizes must match.
    pub fn copy_from(&mut self, other: &Surface) -> HaloResult<()> {
        self.replace_data(other.data())
    }

    pub(crate) fn replace_data(&mut self, bytes: &[u8]) -> HaloResult<()> {
        let dst = self.data_mut();
        if dst.len() != bytes.len() {
            return Err(HaloError::render("surface copy expects equal sizes"));
        }
        dst.copy_from_slice(bytes);
        Ok(())
    }

    /// Read the surface back as a [`FrameRGBA`].
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data().to_vec(),
            premultiplied: true,
        }
    }
}

/// A rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 bytes, suitable for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
