use super::*;
use crate::params::model::GradientMode;

#[test]
fn clamped_enforces_documented_ranges() {
    let mut p = HaloParams::default();
    p.spot.beam_angle = 90.0;
    p.edge.wobble_amount = 1.0;
    p.edge.wobble_speed = -1.0;
    p.edge.trajectory_diameter = 0.9;
    p.edge.chromatic_fringe = 0.0;
    p.scene.soft_blur = 0.0;
    p.color.multi_ring.num_rings = 9;
    p.color.sector.num_sectors = 1;
    p.color.horizon.tilt = -4.0;
    p.scene.light_rgb = [2.0, -1.0, 0.5];

    let c = p.clamped();
    assert_eq!(c.spot.beam_angle, 45.0);
    assert_eq!(c.edge.wobble_amount, 0.06);
    assert_eq!(c.edge.wobble_speed, 0.0);
    assert_eq!(c.edge.trajectory_diameter, 0.2);
    assert_eq!(c.edge.chromatic_fringe, 0.01);
    assert_eq!(c.scene.soft_blur, 0.01);
    assert_eq!(c.color.multi_ring.num_rings, 5);
    assert_eq!(c.color.sector.num_sectors, 3);
    assert_eq!(c.color.horizon.tilt, -1.0);
    assert_eq!(c.scene.light_rgb, [1.0, 0.0, 0.5]);
    assert_eq!(c.color.gradient_mode, GradientMode::Radial);
}

#[test]
fn clamped_is_stable_on_defaults() {
    let once = HaloParams::default().clamped();
    let twice = once.clamped();
    assert_eq!(twice.spot, once.spot);
    assert_eq!(twice.edge, once.edge);
    assert_eq!(twice.scene, once.scene);
    assert_eq!(twice.color.multi_ring.ring_widths.len(), 3);
    for (a, b) in once
        .color
        .multi_ring
        .ring_widths
        .iter()
        .zip(&twice.color.multi_ring.ring_widths)
    {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn non_finite_values_take_defaults() {
    let mut p = HaloParams::default();
    p.spot.hotspot_offset = f64::NAN;
    p.scene.haze = f64::INFINITY;
    let c = p.clamped();
    assert_eq!(c.spot.hotspot_offset, 0.5);
    assert_eq!(c.scene.haze, 0.0);
}

#[test]
fn ring_widths_normalize_and_fall_back_to_uniform() {
    let w = normalize_ring_widths(&[2.0, 1.0, 1.0], 3);
    assert_eq!(w, vec![0.5, 0.25, 0.25]);

    let w = normalize_ring_widths(&[0.0, 0.0, 0.0], 3);
    assert_eq!(w, vec![1.0 / 3.0; 3]);

    let w = normalize_ring_widths(&[1.0], 2);
    assert!((w[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
}

#[test]
fn short_color_lists_are_padded_from_defaults() {
    let mut p = HaloParams::default();
    p.color.multi_ring.num_rings = 4;
    p.color.multi_ring.ring_colors = vec![[1.0, 1.0, 1.0]];
    let c = p.clamped();
    assert_eq!(c.color.multi_ring.ring_colors.len(), 4);
    assert_eq!(c.color.multi_ring.ring_colors[0], [1.0, 1.0, 1.0]);
    assert_eq!(c.color.multi_ring.ring_colors[1], RING_COLORS[1]);
}
