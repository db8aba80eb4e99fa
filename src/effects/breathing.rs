use std::f64::consts::TAU;

use crate::foundation::core::{Point, clamp_unit};
use crate::foundation::math::{angle_diff, smoothstep};
use crate::render::Surface;

const LOBE_WIDTH: f64 = 0.6;
const RAMP_START: f64 = 0.45;
const RAMP_END: f64 = 0.67;
const FADE_START: f64 = 0.97;
const FADE_END: f64 = 1.25;
/// Warp extent, as a fraction of the spot radius.
const REACH: f64 = 1.05;

fn lobe(theta: f64, center: f64) -> f64 {
    let x = angle_diff(theta, center) / LOBE_WIDTH;
    (-x * x).exp()
}

/// Radial displacement (in radius units) at normalized radius `r_norm` and polar angle `theta`.
///
/// Zero at the hotspot and far outside the penumbra; three Gaussian lobes spaced 120 degrees
/// apart rotate at `0.15 + 2.35 * speed` rad/s, each pulsing with its own sine.
pub fn wobble_offset(r_norm: f64, theta: f64, time: f64, amount: f64, speed: f64) -> f64 {
    let radial = smoothstep(RAMP_START, RAMP_END, r_norm)
        * (1.0 - smoothstep(FADE_START, FADE_END, r_norm));
    if radial == 0.0 || amount == 0.0 {
        return 0.0;
    }

    let spin = 0.15 + (2.5 - 0.15) * clamp_unit(speed);
    let theta0 = time * spin;
    let lobes = [
        ((time * 1.1).sin(), theta0),
        ((time * 1.4 + 1.3).sin(), theta0 + TAU / 3.0),
        ((time * 0.9 + 2.1).sin(), theta0 + 2.0 * TAU / 3.0),
    ];
    let sum: f64 = lobes.iter().map(|&(amp, center)| amp * lobe(theta, center)).sum();
    amount * 2.0 * radial * sum
}

/// In-place polar resampling of the area around the spot.
#[derive(Clone, Copy, Debug)]
pub struct BreathingWarp {
    /// Spot center in pixels.
    pub center: Point,
    /// Spot radius in pixels.
    pub radius: f64,
    /// Animation clock in seconds.
    pub time: f64,
    /// Wobble amplitude.
    pub amount: f64,
    /// Lobe rotation speed, `[0, 1]`.
    pub speed: f64,
    /// Opaque color written where a sample falls outside the warped rectangle.
    pub fill: [u8; 4],
}

impl BreathingWarp {
    /// Warp `surface` around the spot.
    ///
    /// Every destination pixel within `1.05 * radius` samples the pre-warp snapshot at its
    /// displaced radius along the same angle (nearest pixel). Pixels outside that distance and
    /// outside the rectangle are left alone.
    pub fn apply(&self, surface: &mut Surface) {
        if !(self.radius > 0.0) {
            return;
        }
        let (w, h) = (i64::from(surface.width()), i64::from(surface.height()));
        let (cx, cy) = (self.center.x, self.center.y);
        let reach = self.radius * REACH;
        let x0 = ((cx - reach).floor() as i64).max(0);
        let y0 = ((cy - reach).floor() as i64).max(0);
        let x1 = ((cx + reach).ceil() as i64).min(w);
        let y1 = ((cy + reach).ceil() as i64).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let snapshot = surface.data().to_vec();
        let data = surface.data_mut();
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 - cx;
                let dy = py as f64 - cy;
                let r_norm = dx.hypot(dy) / self.radius;
                if r_norm > REACH {
                    continue;
                }
                let theta = dy.atan2(dx);
                let wobble = wobble_offset(r_norm, theta, self.time, self.amount, self.speed);
                let r_src = (r_norm + wobble).clamp(0.0, REACH) * self.radius;
                let sx = (cx + r_src * theta.cos()).round() as i64;
                let sy = (cy + r_src * theta.sin()).round() as i64;

                let di = ((py * w + px) * 4) as usize;
                if (x0..x1).contains(&sx) && (y0..y1).contains(&sy) {
                    let si = ((sy * w + sx) * 4) as usize;
                    data[di..di + 4].copy_from_slice(&snapshot[si..si + 4]);
                } else {
                    data[di..di + 4].copy_from_slice(&self.fill);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/breathing.rs"]
mod tests;
