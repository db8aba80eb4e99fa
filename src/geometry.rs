//! Spot geometry derived from parameters and canvas size.

use crate::foundation::core::clamp_unit;
use crate::params::HaloParams;

/// Radius-relative inner edge of the penumbra band.
pub const PENUMBRA_R0: f64 = 0.65;

/// Geometry of the spot for one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotGeometry {
    /// Spot radius in pixels.
    pub radius: f64,
    /// Horizontal ellipse scale (always `1`).
    pub scale_x: f64,
    /// Vertical ellipse scale (always `1`).
    pub scale_y: f64,
    /// Inner penumbra bound as a fraction of `radius`.
    pub penumbra_r0: f64,
    /// Outer penumbra bound as a fraction of `radius`.
    pub penumbra_r1: f64,
    /// Focal point displacement as a fraction of `radius`, positive is down.
    pub hotspot_offset_y: f64,
}

/// Ellipse scale and hotspot displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseScale {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Focal displacement as a fraction of the radius.
    pub hotspot_offset_y: f64,
}

/// Radius-relative penumbra band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenumbraBounds {
    /// Inner bound.
    pub r0: f64,
    /// Outer bound, never below `r0`.
    pub r1: f64,
}

/// Spot radius in pixels for a beam half-angle in degrees.
///
/// `radius = short_side * 0.45 * tan / (1 + tan * 0.5)` where `tan = tan(beam_angle)`.
pub fn spot_radius(beam_angle_deg: f64, canvas_w: f64, canvas_h: f64) -> f64 {
    let tan = beam_angle_deg.to_radians().tan();
    let short = canvas_w.min(canvas_h);
    short * 0.45 * tan / (1.0 + tan * 0.5)
}

/// Ellipse scale for a hotspot offset in `[0, 1]` (re-clamped).
pub fn ellipse_scale(hotspot_offset: f64) -> EllipseScale {
    let t = clamp_unit(hotspot_offset);
    EllipseScale {
        scale_x: 1.0,
        scale_y: 1.0,
        hotspot_offset_y: (0.5 - t) * 2.0 * 0.4,
    }
}

/// Penumbra band for a width in `[0, 1]` (re-clamped).
pub fn penumbra_bounds(penumbra_width: f64) -> PenumbraBounds {
    let w = clamp_unit(penumbra_width);
    let r0 = PENUMBRA_R0;
    PenumbraBounds {
        r0,
        r1: (r0 + 0.15 + 0.35 * w).min(1.0),
    }
}

/// Resolve the full spot geometry for `params` on a `canvas_w x canvas_h` canvas.
pub fn resolve_geometry(params: &HaloParams, canvas_w: f64, canvas_h: f64) -> SpotGeometry {
    let radius = spot_radius(params.spot.beam_angle, canvas_w, canvas_h);
    let scale = ellipse_scale(params.spot.hotspot_offset);
    let band = penumbra_bounds(params.edge.penumbra_width);
    SpotGeometry {
        radius,
        scale_x: scale.scale_x,
        scale_y: scale.scale_y,
        penumbra_r0: band.r0,
        penumbra_r1: band.r1,
        hotspot_offset_y: scale.hotspot_offset_y,
    }
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
