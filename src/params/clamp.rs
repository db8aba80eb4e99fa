use crate::foundation::core::{Rgb, clamp_rgb};
use crate::params::model::{HaloParams, RING_COLORS, SECTOR_COLORS, default_horizon_colors};

fn clamp_range(v: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}

/// Normalize the first `n` widths to sum to 1.
///
/// Missing entries count as `1/n`; a non-positive sum falls back to a uniform split.
pub fn normalize_ring_widths(widths: &[f64], n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let uniform = 1.0 / n as f64;
    let mut w: Vec<f64> = (0..n)
        .map(|i| match widths.get(i) {
            Some(v) if v.is_finite() => *v,
            Some(_) => 0.0,
            None => uniform,
        })
        .collect();
    let sum: f64 = w.iter().sum();
    if sum <= 0.0 {
        return vec![uniform; n];
    }
    for v in &mut w {
        *v /= sum;
    }
    w
}

fn clamp_colors(colors: &[Rgb], max: usize, defaults: &[Rgb], min_len: usize) -> Vec<Rgb> {
    let mut out: Vec<Rgb> = colors.iter().take(max).map(|c| clamp_rgb(*c)).collect();
    while out.len() < min_len {
        match defaults.get(out.len()) {
            Some(c) => out.push(*c),
            None => break,
        }
    }
    out
}

impl HaloParams {
    /// Return a copy with every field forced into its documented range.
    ///
    /// Color lists are truncated to their maximum length and padded from the defaults up to the
    /// count in use; ring widths are normalized.
    pub fn clamped(&self) -> Self {
        let mut p = self.clone();

        p.spot.beam_angle = clamp_range(p.spot.beam_angle, 15.0, 45.0, 30.0);
        p.spot.hotspot_offset = clamp_range(p.spot.hotspot_offset, 0.0, 1.0, 0.5);

        let c = &mut p.color;
        c.transition_curve = clamp_range(c.transition_curve, 0.0, 1.0, 0.5);

        let h = &mut c.horizon;
        h.num_colors = h.num_colors.clamp(2, 4);
        h.colors = clamp_colors(&h.colors, 4, &default_horizon_colors(), 4);
        h.horizon_y = clamp_range(h.horizon_y, 0.0, 1.0, 0.5);
        h.softness = clamp_range(h.softness, 0.0, 1.0, 0.35);
        h.tilt = clamp_range(h.tilt, -1.0, 1.0, 0.0);

        let m = &mut c.multi_ring;
        m.num_rings = m.num_rings.clamp(3, 5);
        let rings = m.num_rings as usize;
        m.ring_colors = clamp_colors(&m.ring_colors, 5, &RING_COLORS, rings);
        m.ring_widths = normalize_ring_widths(&m.ring_widths, rings);
        m.smoothness = clamp_range(m.smoothness, 0.0, 1.0, 0.4);
        m.ring_blend = clamp_range(m.ring_blend, 0.0, 1.0, 0.35);

        let s = &mut c.sector;
        s.num_sectors = s.num_sectors.clamp(3, 6);
        s.sector_colors = clamp_colors(
            &s.sector_colors,
            6,
            &SECTOR_COLORS,
            s.num_sectors as usize,
        );
        s.center_rgb = clamp_rgb(s.center_rgb);
        s.radial_blend = clamp_range(s.radial_blend, 0.0, 1.0, 0.5);

        let e = &mut p.edge;
        e.penumbra_width = clamp_range(e.penumbra_width, 0.0, 1.0, 0.4);
        e.chromatic_fringe = clamp_range(e.chromatic_fringe, 0.01, 1.0, 0.3);
        e.chromatic_fringe_rgb = clamp_rgb(e.chromatic_fringe_rgb);
        e.wobble_amount = clamp_range(e.wobble_amount, 0.0, 0.06, 0.03);
        e.wobble_speed = clamp_range(e.wobble_speed, 0.0, 0.6, 0.4);
        e.trajectory_diameter = clamp_range(e.trajectory_diameter, 0.1, 0.2, 0.15);
        e.trajectory_edge_hardness = clamp_range(e.trajectory_edge_hardness, 0.0, 1.0, 0.3);
        e.trajectory_speed = clamp_range(e.trajectory_speed, 0.0, 1.0, 0.4);
        e.trajectory_trail = clamp_range(e.trajectory_trail, 0.0, 1.0, 0.3);
        e.trajectory_rgb = clamp_rgb(e.trajectory_rgb);

        let sc = &mut p.scene;
        sc.wall_tint = clamp_rgb(sc.wall_tint);
        sc.light_rgb = clamp_rgb(sc.light_rgb);
        sc.edge_rgb = clamp_rgb(sc.edge_rgb);
        sc.bloom = clamp_range(sc.bloom, 0.0, 1.0, 0.5);
        sc.soft_blur = clamp_range(sc.soft_blur, 0.01, 1.0, 0.35);
        sc.haze = clamp_range(sc.haze, 0.0, 1.0, 0.0);
        sc.moving_light_intensity = clamp_range(sc.moving_light_intensity, 0.0, 1.0, 0.6);
        sc.moving_light_spread = clamp_range(sc.moving_light_spread, 0.0, 1.0, 0.25);
        sc.moving_light_dynamic = clamp_range(sc.moving_light_dynamic, 0.0, 1.0, 0.5);
        sc.moving_light_range = clamp_range(sc.moving_light_range, 0.0, 1.0, 0.5);

        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/clamp.rs"]
mod tests;
