use crate::foundation::core::{Rgb, clamp_unit_f32};

/// Approximate blackbody color for a temperature in Kelvin.
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let t = kelvin / 100.0;
    let (r, g, b) = if t <= 66.0 {
        let g = (99.470_802_586_1 * t.ln() - 161.119_568_166_1).clamp(0.0, 255.0);
        let b = if t <= 19.0 {
            0.0
        } else {
            (138.517_731_223_1 * (t - 10.0).ln() - 305.044_792_730_7).clamp(0.0, 255.0)
        };
        (255.0, g, b)
    } else {
        let r = (329.698_727_446 * (t - 60.0).powf(-0.133_204_759_2)).clamp(0.0, 255.0);
        let g = (288.122_169_528_3 * (t - 60.0).powf(-0.075_514_849_2)).clamp(0.0, 255.0);
        (r, g, 255.0)
    };
    [(r / 255.0) as f32, (g / 255.0) as f32, (b / 255.0) as f32]
}

/// Approximate display color of a visible wavelength (380..=780 nm).
///
/// Wavelengths outside the visible range map to black.
pub fn wavelength_to_rgb(nm: f64) -> Rgb {
    let (r, g, b) = match nm {
        n if (380.0..440.0).contains(&n) => (-(n - 440.0) / 60.0, 0.0, 1.0),
        n if (440.0..490.0).contains(&n) => (0.0, (n - 440.0) / 50.0, 1.0),
        n if (490.0..510.0).contains(&n) => (0.0, 1.0, -(n - 510.0) / 20.0),
        n if (510.0..580.0).contains(&n) => ((n - 510.0) / 70.0, 1.0, 0.0),
        n if (580.0..645.0).contains(&n) => (1.0, -(n - 645.0) / 65.0, 0.0),
        n if (645.0..=780.0).contains(&n) => (1.0, 0.0, 0.0),
        _ => (0.0, 0.0, 0.0),
    };

    let factor = if nm < 420.0 {
        0.3 + 0.7 * (nm - 380.0) / 40.0
    } else if nm > 700.0 {
        0.3 + 0.7 * (780.0 - nm) / 80.0
    } else {
        1.0
    };
    [
        clamp_unit_f32((r * factor) as f32),
        clamp_unit_f32((g * factor) as f32),
        clamp_unit_f32((b * factor) as f32),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/params/color.rs"]
mod tests;
