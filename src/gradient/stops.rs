use crate::foundation::core::{Rgb, clamp_unit_f32};

/// One color stop: position `t` plus straight (non-premultiplied) RGBA, all in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient.
    pub t: f32,
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl GradientStop {
    /// Build a stop from a position, a color and an alpha. Values are stored as given.
    pub fn new(t: f64, rgb: Rgb, a: f64) -> Self {
        Self {
            t: t as f32,
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: a as f32,
        }
    }

    /// `[r, g, b, a]`.
    pub fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn clamped(self) -> Self {
        Self {
            t: clamp_unit_f32(self.t),
            r: clamp_unit_f32(self.r),
            g: clamp_unit_f32(self.g),
            b: clamp_unit_f32(self.b),
            a: clamp_unit_f32(self.a),
        }
    }
}

/// Clamp every channel into `[0, 1]` and stable-sort ascending by `t`.
///
/// Every builder runs its output through this before returning.
pub(crate) fn finalize_stops(mut stops: Vec<GradientStop>) -> Vec<GradientStop> {
    for s in &mut stops {
        *s = s.clamped();
    }
    stops.sort_by(|a, b| a.t.total_cmp(&b.t));
    debug_assert!(stops_are_well_formed(&stops));
    stops
}

/// `true` when `stops` is non-empty, ascending by `t` and every channel is in `[0, 1]`.
pub fn stops_are_well_formed(stops: &[GradientStop]) -> bool {
    let in_unit = |v: f32| (0.0..=1.0).contains(&v);
    !stops.is_empty()
        && stops
            .iter()
            .all(|s| in_unit(s.t) && in_unit(s.r) && in_unit(s.g) && in_unit(s.b) && in_unit(s.a))
        && stops.windows(2).all(|w| w[0].t <= w[1].t)
}

/// Sample a sorted stop sequence at `t`.
///
/// An exact stop position returns that stop's color; positions outside the covered range take
/// the nearest endpoint; everything else interpolates linearly between the neighbors. An empty
/// sequence samples as transparent black.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> [f32; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t <= first.t {
        return first.rgba();
    }
    if t >= last.t {
        return last.rgba();
    }

    let j = stops.partition_point(|s| s.t < t);
    let b = stops[j];
    if b.t == t {
        return b.rgba();
    }
    let a = stops[j - 1];
    let u = (t - a.t) / (b.t - a.t);
    let lerp = |x: f32, y: f32| x + (y - x) * u;
    [lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b), lerp(a.a, b.a)]
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stops.rs"]
mod tests;
