use kurbo::{PathEl, Shape as _};

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{HaloError, HaloResult};

const PATH_TOLERANCE: f64 = 0.1;

/// Area a fill is restricted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FillRegion {
    /// Antialiased disc.
    Disc { center: Point, radius: f64 },
    /// Antialiased axis-aligned rectangle.
    Rect(Rect),
    /// The whole surface.
    Full,
}

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl PixelBounds {
    pub(crate) fn width(self) -> u32 {
        self.x1 - self.x0
    }

    pub(crate) fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

impl FillRegion {
    pub(crate) fn disc(center: Point, radius: f64) -> Self {
        Self::Disc { center, radius }
    }

    /// Square of half-size `half` around `center`.
    pub(crate) fn square(center: Point, half: f64) -> Self {
        Self::Rect(Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        ))
    }

    /// Pixels the region can touch on a `width x height` surface, or `None` when empty.
    pub(crate) fn pixel_bounds(&self, width: u32, height: u32) -> Option<PixelBounds> {
        let r = match *self {
            Self::Full => {
                return (width > 0 && height > 0).then_some(PixelBounds {
                    x0: 0,
                    y0: 0,
                    x1: width,
                    y1: height,
                });
            }
            Self::Disc { center, radius } => {
                if !(radius > 0.0) {
                    return None;
                }
                Rect::new(
                    center.x - radius,
                    center.y - radius,
                    center.x + radius,
                    center.y + radius,
                )
            }
            Self::Rect(r) => r,
        };
        let clip = |v: f64, max: u32| v.clamp(0.0, f64::from(max)) as u32;
        let b = PixelBounds {
            x0: clip(r.x0.floor(), width),
            y0: clip(r.y0.floor(), height),
            x1: clip(r.x1.ceil(), width),
            y1: clip(r.y1.ceil(), height),
        };
        (b.x0 < b.x1 && b.y0 < b.y1).then_some(b)
    }
}

/// Paint `region` with `paint` into a scratch pixmap covering only `bounds`.
///
/// `paint_transform` places the paint in canvas space; the scratch origin is moved to
/// `(bounds.x0, bounds.y0)` so callers work in canvas coordinates throughout.
pub(crate) fn render_region(
    region: &FillRegion,
    bounds: PixelBounds,
    paint: impl Into<vello_cpu::PaintType>,
    paint_transform: vello_cpu::kurbo::Affine,
) -> HaloResult<vello_cpu::Pixmap> {
    let w = u16::try_from(bounds.width())
        .map_err(|_| HaloError::render("fill width exceeds u16"))?;
    let h = u16::try_from(bounds.height())
        .map_err(|_| HaloError::render("fill height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        -f64::from(bounds.x0),
        -f64::from(bounds.y0),
    )));
    ctx.set_paint_transform(paint_transform);
    ctx.set_paint(paint);

    match *region {
        FillRegion::Disc { center, radius } => {
            let circle = kurbo::Circle::new(center, radius.max(0.0));
            ctx.fill_path(&shape_to_cpu(circle.path_elements(PATH_TOLERANCE)));
        }
        FillRegion::Rect(r) => {
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
        }
        FillRegion::Full => {
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                f64::from(bounds.x0),
                f64::from(bounds.y0),
                f64::from(bounds.x1),
                f64::from(bounds.y1),
            ));
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap)
}

fn shape_to_cpu(elements: impl Iterator<Item = PathEl>) -> vello_cpu::kurbo::BezPath {
    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in elements {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
