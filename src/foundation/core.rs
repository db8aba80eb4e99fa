use crate::foundation::error::{HaloError, HaloResult};

pub use kurbo::{Point, Rect, Vec2};

/// Linear RGB triple with every channel in `[0, 1]`.
///
/// Serialized as a plain `[r, g, b]` array.
pub type Rgb = [f32; 3];

/// Clamp every channel of `rgb` into `[0, 1]`. Non-finite channels become `0`.
pub fn clamp_rgb(rgb: Rgb) -> Rgb {
    rgb.map(clamp_unit_f32)
}

/// Component-wise linear interpolation `a + (b - a) * t`.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

pub(crate) fn clamp_unit_f32(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Absolute 0-based frame index of an animation sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> HaloResult<Self> {
        if start.0 > end.0 {
            return Err(HaloError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> HaloResult<Self> {
        if den == 0 {
            return Err(HaloError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HaloError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Animation clock value (seconds) of frame `idx`.
    pub fn frame_time_secs(self, idx: FrameIndex) -> f64 {
        (idx.0 as f64) * self.frame_duration_secs()
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas center in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Convert a straight `[0, 1]` color plus alpha into premultiplied RGBA8.
pub(crate) fn premul_rgba8_from_unit(rgb: Rgb, a: f32) -> [u8; 4] {
    let a = clamp_unit_f32(a);
    let to_u8 = |v: f32| (clamp_unit_f32(v) * a * 255.0).round() as u8;
    [
        to_u8(rgb[0]),
        to_u8(rgb[1]),
        to_u8(rgb[2]),
        (a * 255.0).round() as u8,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
