use std::f64::consts::TAU;

use vello_cpu::kurbo::Affine;
use vello_cpu::peniko::{Color, ColorStop, Extend, Gradient, InterpolationAlphaSpace};

use crate::foundation::core::Point;
use crate::foundation::error::HaloResult;
use crate::gradient::GradientStop;
use crate::render::composite::{BlendMode, composite_in_place, over};
use crate::render::noise::NoiseTexture;
use crate::render::raster::{FillRegion, PixelBounds, render_region};
use crate::render::surface::Surface;

/// Geometry mapping a pixel to a gradient position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum GradientShape {
    /// Two-point conical gradient from a start circle `(focal, r0)` to an end circle
    /// `(center, r1)`.
    Radial {
        focal: Point,
        r0: f64,
        center: Point,
        r1: f64,
    },
    /// Linear gradient, `t = 0` at `start` and `t = 1` at `end`.
    Linear { start: Point, end: Point },
    /// Angular sweep around `center`, clockwise in y-down space from `start_angle`.
    Conic { center: Point, start_angle: f64 },
}

impl GradientShape {
    /// Spotlight gradient: focal point displaced vertically by `hotspot_offset_y * radius`,
    /// ending on the circle of `radius` around `center`.
    pub(crate) fn spot(center: Point, radius: f64, hotspot_offset_y: f64) -> Self {
        Self::Radial {
            focal: Point::new(center.x, center.y + radius * hotspot_offset_y),
            r0: 0.0,
            center,
            r1: radius,
        }
    }

    /// Plain radial gradient centered on `center`.
    pub(crate) fn centered(center: Point, radius: f64) -> Self {
        Self::spot(center, radius, 0.0)
    }

    /// Paint for this shape carrying `stops`, which must already be finalized.
    ///
    /// Positions are clamped at both ends except for the sweep, which wraps once per turn.
    /// Colors interpolate in straight alpha, the same as [`sample_stops`].
    ///
    /// [`sample_stops`]: crate::gradient::sample_stops
    pub(crate) fn gradient(&self, stops: &[GradientStop]) -> Gradient {
        let xy = |p: Point| (p.x, p.y);
        let (gradient, extend) = match *self {
            Self::Radial {
                focal,
                r0,
                center,
                r1,
            } => (
                Gradient::new_two_point_radial(xy(focal), r0 as f32, xy(center), r1 as f32),
                Extend::Pad,
            ),
            Self::Linear { start, end } => (Gradient::new_linear(xy(start), xy(end)), Extend::Pad),
            Self::Conic {
                center,
                start_angle,
            } => (
                Gradient::new_sweep(xy(center), start_angle as f32, (start_angle + TAU) as f32),
                Extend::Repeat,
            ),
        };
        let stops: Vec<ColorStop> = stops
            .iter()
            .map(|s| ColorStop::from((s.t, Color::new([s.r, s.g, s.b, s.a]))))
            .collect();
        gradient
            .with_extend(extend)
            .with_interpolation_alpha_space(InterpolationAlphaSpace::Unpremultiplied)
            .with_stops(stops.as_slice())
    }
}

/// One gradient fill operation.
pub(crate) struct GradientFill<'a> {
    pub(crate) shape: GradientShape,
    pub(crate) stops: &'a [GradientStop],
    pub(crate) region: FillRegion,
    pub(crate) opacity: f32,
    pub(crate) blend: BlendMode,
}

impl<'a> GradientFill<'a> {
    /// Fully opaque source-over fill.
    pub(crate) fn over(
        shape: GradientShape,
        stops: &'a [GradientStop],
        region: FillRegion,
    ) -> Self {
        Self {
            shape,
            stops,
            region,
            opacity: 1.0,
            blend: BlendMode::SourceOver,
        }
    }
}

/// Paint a gradient over `fill.region` and composite it.
pub(crate) fn fill_gradient(surface: &mut Surface, fill: &GradientFill<'_>) -> HaloResult<()> {
    let Some(bounds) = fill.region.pixel_bounds(surface.width(), surface.height()) else {
        return clear_if_masking(surface, fill.blend);
    };
    let layer = render_region(
        &fill.region,
        bounds,
        fill.shape.gradient(fill.stops),
        Affine::IDENTITY,
    )?;
    composite_layer(surface, bounds, &layer, fill.opacity, fill.blend)
}

/// One tiled texture fill operation.
pub(crate) struct TextureFill<'a> {
    pub(crate) texture: &'a NoiseTexture,
    /// Canvas position of texel `(0, 0)`.
    pub(crate) anchor: Point,
    pub(crate) region: FillRegion,
    pub(crate) opacity: f32,
    pub(crate) blend: BlendMode,
}

/// Repeat a texture over `fill.region` and composite it.
pub(crate) fn fill_texture(surface: &mut Surface, fill: &TextureFill<'_>) -> HaloResult<()> {
    let Some(bounds) = fill.region.pixel_bounds(surface.width(), surface.height()) else {
        return clear_if_masking(surface, fill.blend);
    };
    let layer = render_region(
        &fill.region,
        bounds,
        fill.texture.paint(),
        Affine::translate((fill.anchor.x, fill.anchor.y)),
    )?;
    composite_layer(surface, bounds, &layer, fill.opacity, fill.blend)
}

/// Source-over `src` onto `dst` with its top-left corner at `(x, y)`. Out-of-bounds parts are
/// dropped.
pub(crate) fn blit(dst: &mut Surface, src: &Surface, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let src_data = src.data();
    let dst_data = dst.data_mut();
    for dy in y0..y1 {
        for dx in x0..x1 {
            let si = (((dy - y) * sw + (dx - x)) * 4) as usize;
            let s = [
                src_data[si],
                src_data[si + 1],
                src_data[si + 2],
                src_data[si + 3],
            ];
            if s[3] == 0 {
                continue;
            }
            let di = ((dy * dw + dx) * 4) as usize;
            let d = [
                dst_data[di],
                dst_data[di + 1],
                dst_data[di + 2],
                dst_data[di + 3],
            ];
            dst_data[di..di + 4].copy_from_slice(&over(d, s, 1.0));
        }
    }
}

/// Composite a layer covering `bounds` onto `surface`, one row at a time.
///
/// A destination-in layer also clears everything outside `bounds`.
fn composite_layer(
    surface: &mut Surface,
    bounds: PixelBounds,
    layer: &vello_cpu::Pixmap,
    opacity: f32,
    blend: BlendMode,
) -> HaloResult<()> {
    let stride = surface.width() as usize * 4;
    let row_len = bounds.width() as usize * 4;
    let (x0, x1) = (bounds.x0 as usize * 4, bounds.x1 as usize * 4);
    let src = layer.data_as_u8_slice();
    let masking = blend == BlendMode::DestinationIn;

    for (y, row) in surface.data_mut().chunks_exact_mut(stride).enumerate() {
        let y = y as u32;
        if !(bounds.y0..bounds.y1).contains(&y) {
            if masking {
                row.fill(0);
            }
            continue;
        }
        if masking {
            row[..x0].fill(0);
            row[x1..].fill(0);
        }
        let offset = (y - bounds.y0) as usize * row_len;
        composite_in_place(&mut row[x0..x1], &src[offset..offset + row_len], opacity, blend)?;
    }
    Ok(())
}

fn clear_if_masking(surface: &mut Surface, blend: BlendMode) -> HaloResult<()> {
    if blend == BlendMode::DestinationIn {
        surface.data_mut().fill(0);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
