use super::*;

fn ramp() -> Vec<GradientStop> {
    finalize_stops(vec![
        GradientStop::new(0.0, [1.0, 0.0, 0.0], 1.0),
        GradientStop::new(0.3, [0.2, 0.4, 0.6], 0.5),
        GradientStop::new(1.0, [0.0, 0.0, 1.0], 0.0),
    ])
}

#[test]
fn exact_stop_positions_return_stop_colors() {
    let stops = ramp();
    for s in &stops {
        assert_eq!(sample_stops(&stops, s.t), s.rgba());
    }
}

#[test]
fn sampling_outside_the_range_clamps_to_endpoints() {
    let stops = finalize_stops(vec![
        GradientStop::new(0.2, [1.0, 0.0, 0.0], 1.0),
        GradientStop::new(0.8, [0.0, 1.0, 0.0], 0.5),
    ]);
    assert_eq!(sample_stops(&stops, 0.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(sample_stops(&stops, -4.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(sample_stops(&stops, 0.95), [0.0, 1.0, 0.0, 0.5]);
    assert_eq!(sample_stops(&stops, f32::NAN), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn sampling_interpolates_linearly_between_neighbors() {
    let stops = ramp();
    let [r, g, b, a] = sample_stops(&stops, 0.15);
    assert!((r - 0.6).abs() < 1e-6);
    assert!((g - 0.2).abs() < 1e-6);
    assert!((b - 0.3).abs() < 1e-6);
    assert!((a - 0.75).abs() < 1e-6);
}

#[test]
fn empty_sequence_samples_transparent() {
    assert_eq!(sample_stops(&[], 0.5), [0.0; 4]);
}

#[test]
fn finalize_clamps_and_sorts_stably() {
    let stops = finalize_stops(vec![
        GradientStop::new(1.4, [2.0, 0.0, 0.0], 1.0),
        GradientStop::new(0.5, [0.0, 0.0, 0.0], 0.2),
        GradientStop::new(0.5, [0.0, 1.0, 0.0], 0.3),
        GradientStop::new(-0.2, [0.0, 0.0, -1.0], 2.0),
    ]);
    assert!(stops_are_well_formed(&stops));
    assert_eq!(stops[0].t, 0.0);
    assert_eq!(stops[0].a, 1.0);
    assert_eq!(stops[1].a, 0.2);
    assert_eq!(stops[2].a, 0.3);
    assert_eq!(stops[3].t, 1.0);
    assert_eq!(stops[3].r, 1.0);
}

#[test]
fn well_formed_rejects_unsorted_and_empty() {
    assert!(!stops_are_well_formed(&[]));
    let unsorted = [
        GradientStop::new(0.6, [0.0; 3], 1.0),
        GradientStop::new(0.1, [0.0; 3], 1.0),
    ];
    assert!(!stops_are_well_formed(&unsorted));
}
