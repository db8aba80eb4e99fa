use crate::foundation::core::{Rgb, clamp_unit, lerp_rgb};
use crate::geometry::SpotGeometry;
use crate::gradient::stops::{GradientStop, finalize_stops};
use crate::params::{HaloParams, normalize_ring_widths};

const WHITE: Rgb = [1.0, 1.0, 1.0];
const BLACK: Rgb = [0.0, 0.0, 0.0];
const FALLBACK_RING_RGB: Rgb = [0.5, 0.3, 0.2];

/// Map a linear radial position through the transition curve: `t^(2 - 1.5 * curve)`.
pub fn transition_t(linear_t: f64, transition_curve: f64) -> f64 {
    linear_t.powf(2.0 - 1.5 * transition_curve)
}

/// Stops of the main spot in radial mode.
///
/// Full-strength light color at the hotspot, a six-stop fade through the edge color across the
/// penumbra band and, when the fringe is enabled, a colored sub-band hugging the outer bound.
pub fn build_radial_stops(params: &HaloParams, geom: &SpotGeometry) -> Vec<GradientStop> {
    let light = params.scene.light_rgb;
    let edge = params.scene.edge_rgb;
    let curve = params.color.transition_curve;

    let t0 = clamp_unit(transition_t(geom.penumbra_r0, curve));
    let t1 = clamp_unit(transition_t(geom.penumbra_r1, curve));
    let mid = (t0 + t1) * 0.5;
    let q1 = (t0 + mid) * 0.5;
    let q2 = (mid + t1) * 0.5;

    let mut stops = vec![
        GradientStop::new(0.0, light, 1.0),
        GradientStop::new(t0 * 0.5, light, 0.96),
        GradientStop::new(t0, edge, 0.88),
        GradientStop::new(q1, edge, 0.65),
        GradientStop::new(mid, edge, 0.4),
        GradientStop::new(q2, edge, 0.18),
        GradientStop::new(t1, edge, 0.0),
    ];

    let fringe = params.edge.chromatic_fringe;
    if params.edge.chromatic_fringe_enabled && fringe > 0.005 {
        let spread = 0.008 + 0.085 * fringe;
        let t_inner = t0.max(t1 - spread);
        if t_inner < t1 {
            let rgb = params.edge.chromatic_fringe_rgb;
            stops.push(GradientStop::new(t_inner, rgb, 0.03 + 0.08 * fringe));
            stops.push(GradientStop::new((t_inner + t1) * 0.5, rgb, 0.12 + 0.2 * fringe));
            stops.push(GradientStop::new(t1, rgb, 0.0));
        }
    }

    finalize_stops(stops)
}

/// Stops for a ring that shows only the penumbra band: transparent inside `r0`, an edge-color
/// fade across `[r0, r1]`, transparent beyond.
pub fn build_penumbra_only_stops(params: &HaloParams, geom: &SpotGeometry) -> Vec<GradientStop> {
    let edge = params.scene.edge_rgb;
    let r0 = clamp_unit(geom.penumbra_r0);
    let r1 = (r0 + 0.01).max(geom.penumbra_r1.min(1.0));
    let mid = (r0 + r1) * 0.5;
    let q1 = (r0 + mid) * 0.5;
    let q2 = (mid + r1) * 0.5;

    finalize_stops(vec![
        GradientStop::new(0.0, edge, 0.0),
        GradientStop::new(r0, edge, 0.88),
        GradientStop::new(q1, edge, 0.65),
        GradientStop::new(mid, edge, 0.4),
        GradientStop::new(q2, edge, 0.18),
        GradientStop::new(r1, edge, 0.0),
        GradientStop::new(1.0, edge, 0.0),
    ])
}

/// Stops of the bloom halo around the spot.
pub fn build_bloom_stops(params: &HaloParams) -> Vec<GradientStop> {
    let edge = params.scene.edge_rgb;
    let peak = 0.12 * params.scene.bloom;
    finalize_stops(vec![
        GradientStop::new(0.0, edge, 0.0),
        GradientStop::new(0.25, edge, peak * 0.25),
        GradientStop::new(0.5, edge, peak * 0.6),
        GradientStop::new(0.75, edge, peak * 0.85),
        GradientStop::new(1.0, edge, 0.0),
    ])
}

/// White alpha mask that softens the silhouette of non-radial modes (applied destination-in).
pub fn build_edge_falloff_stops(geom: &SpotGeometry) -> Vec<GradientStop> {
    let r0 = geom.penumbra_r0;
    let r1 = geom.penumbra_r1;
    finalize_stops(vec![
        GradientStop::new(0.0, WHITE, 1.0),
        GradientStop::new(r0 * 0.95, WHITE, 1.0),
        GradientStop::new(r0, WHITE, 0.98),
        GradientStop::new((r0 + r1) * 0.5, WHITE, 0.5),
        GradientStop::new(r1, WHITE, 0.0),
        GradientStop::new(1.0, WHITE, 0.0),
    ])
}

/// Fringe ring drawn around non-radial modes at the outer penumbra bound.
pub fn build_chromatic_fringe_ring_stops(
    params: &HaloParams,
    geom: &SpotGeometry,
) -> Vec<GradientStop> {
    let r1 = geom.penumbra_r1;
    let fringe = params.edge.chromatic_fringe;
    let rgb = params.edge.chromatic_fringe_rgb;
    let spread = 0.02 + 0.1 * fringe;
    let t_inner = (r1 - spread).max(0.0);
    let t_outer = (r1 + spread).min(1.0);
    let a_inner = 0.02 + 0.06 * fringe;

    finalize_stops(vec![
        GradientStop::new(0.0, rgb, 0.0),
        GradientStop::new((t_inner - 0.01).max(0.0), rgb, 0.0),
        GradientStop::new(t_inner, rgb, a_inner),
        GradientStop::new((t_inner + r1) * 0.5, rgb, 0.1 + 0.22 * fringe),
        GradientStop::new(r1, rgb, a_inner),
        GradientStop::new(t_outer, rgb, 0.0),
        GradientStop::new(1.0, rgb, 0.0),
    ])
}

/// Concentric ring stops.
///
/// Each ring is a solid band; neighbors meet through a boundary stop holding their 50/50 mix,
/// spread over `smoothness * 0.15 + ring_blend * 0.22` on both sides. The sequence ends in a
/// transparent stop at `t = 1` in the last ring's color.
pub fn build_multi_ring_stops(params: &HaloParams) -> Vec<GradientStop> {
    let mr = &params.color.multi_ring;
    let colors: &[Rgb] = if mr.ring_colors.is_empty() {
        &[FALLBACK_RING_RGB]
    } else {
        &mr.ring_colors
    };
    let n = (mr.num_rings.max(1) as usize).min(colors.len());
    let widths = normalize_ring_widths(&mr.ring_widths, n);

    let sm_base = mr.smoothness * 0.15;
    let sm_mix = sm_base + mr.ring_blend * 0.22;

    let mut stops = Vec::with_capacity(n * 4 + 1);
    let mut t = 0.0f64;
    for (i, (&c, &w)) in colors.iter().zip(&widths).enumerate() {
        let t_end = (t + w).min(1.0);
        if i == 0 {
            stops.push(GradientStop::new(0.0, c, 1.0));
            stops.push(GradientStop::new(t_end - sm_mix, c, 1.0));
        } else {
            let prev = colors[i - 1];
            let t_right = (t + sm_mix).min(1.0);
            stops.push(GradientStop::new((t - sm_mix).max(0.0), prev, 1.0));
            stops.push(GradientStop::new(t, lerp_rgb(prev, c, 0.5), 1.0));
            stops.push(GradientStop::new(t_right, c, 1.0));
            if t_end - t_right > 0.001 {
                stops.push(GradientStop::new(t_end - sm_base, c, 1.0));
            }
        }
        t = t_end;
        if t >= 1.0 {
            break;
        }
    }
    stops.push(GradientStop::new(1.0, colors[n - 1], 0.0));

    finalize_stops(stops)
}

/// Linear band stops for horizon mode.
///
/// The first color holds up to `horizon_y - softness / 2`, the colors in use spread evenly
/// across the transition band, and the last color holds beyond it.
pub fn build_horizon_stops(params: &HaloParams) -> Vec<GradientStop> {
    let h = &params.color.horizon;
    let mut colors: Vec<Rgb> = h.colors.iter().take(4).copied().collect();
    if colors.is_empty() {
        colors.push(WHITE);
    }
    while colors.len() < 2 {
        colors.push(colors[0]);
    }
    let n = (h.num_colors.clamp(2, 4) as usize).min(colors.len());

    let soft = h.softness.clamp(0.001, 1.0);
    let y0 = clamp_unit(h.horizon_y - soft / 2.0);
    let y1 = clamp_unit(h.horizon_y + soft / 2.0);
    let span = (y1 - y0).max(0.001);

    let first = colors[0];
    let last = colors[n - 1];
    let mut stops = Vec::with_capacity(n + 4);
    stops.push(GradientStop::new(0.0, first, 1.0));
    stops.push(GradientStop::new(y0, first, 1.0));
    for (i, &c) in colors.iter().take(n).enumerate() {
        let t = y0 + span * i as f64 / (n - 1) as f64;
        stops.push(GradientStop::new(t, c, 1.0));
    }
    stops.push(GradientStop::new(y1, last, 1.0));
    stops.push(GradientStop::new(1.0, last, 1.0));

    finalize_stops(stops)
}

/// Angular stops for sector mode: `n + 1` stops at `i / n`, wrapping back to the first color.
pub fn build_sector_stops(params: &HaloParams) -> Vec<GradientStop> {
    let s = &params.color.sector;
    let colors: &[Rgb] = if s.sector_colors.is_empty() {
        &[WHITE]
    } else {
        &s.sector_colors
    };
    let n = (s.num_sectors.max(1) as usize).min(colors.len());
    let stops = (0..=n)
        .map(|i| GradientStop::new(i as f64 / n as f64, colors[i % n], 1.0))
        .collect();
    finalize_stops(stops)
}

/// Radial overlay for sector mode, fading the center color in toward the rim.
pub fn build_sector_overlay_stops(params: &HaloParams) -> Vec<GradientStop> {
    let s = &params.color.sector;
    finalize_stops(vec![
        GradientStop::new(0.0, s.center_rgb, 0.0),
        GradientStop::new(1.0, s.center_rgb, s.radial_blend * 0.45),
    ])
}

/// Dark wall vignette: clear out to 55% of the radius, then darkening to half-opaque black.
pub fn build_vignette_stops() -> Vec<GradientStop> {
    finalize_stops(vec![
        GradientStop::new(0.0, BLACK, 0.0),
        GradientStop::new(0.55, BLACK, 0.0),
        GradientStop::new(1.0, BLACK, 0.5),
    ])
}

/// Soft blob used by each fog layer.
pub fn build_fog_blob_stops(rgb: Rgb, center_alpha: f64) -> Vec<GradientStop> {
    let edge_alpha = center_alpha * 0.15;
    finalize_stops(vec![
        GradientStop::new(0.0, rgb, center_alpha),
        GradientStop::new(0.32, rgb, center_alpha * 0.45),
        GradientStop::new(0.82, rgb, edge_alpha),
        GradientStop::new(1.0, rgb, 0.0),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/builders.rs"]
mod tests;
