use super::*;

#[test]
fn zero_amount_has_no_wobble() {
    for r in [0.0, 0.5, 0.8, 1.0, 1.2] {
        assert_eq!(wobble_offset(r, 0.7, 3.0, 0.0, 0.4), 0.0);
    }
}

#[test]
fn wobble_vanishes_at_the_hotspot_and_far_outside() {
    assert_eq!(wobble_offset(0.2, 1.0, 2.0, 0.06, 0.5), 0.0);
    assert_eq!(wobble_offset(1.3, 1.0, 2.0, 0.06, 0.5), 0.0);
    assert!(wobble_offset(0.85, 0.0, 1.0, 0.06, 0.5).abs() > 0.0);
}

#[test]
fn wobble_is_bounded_by_the_lobe_sum() {
    let amount = 0.05;
    for step in 0..64 {
        let theta = step as f64 * 0.1;
        let w = wobble_offset(0.85, theta, step as f64 * 0.37, amount, 0.6);
        // Three lobes of height at most one, doubled.
        assert!(w.abs() <= amount * 2.0 * 3.0 + 1e-12);
    }
}

#[test]
fn zero_amount_warp_leaves_pixels_untouched() {
    let mut s = Surface::new(40, 40).unwrap();
    for (i, px) in s.data_mut().chunks_exact_mut(4).enumerate() {
        let v = (i % 251) as u8;
        px.copy_from_slice(&[v, v, v, 255]);
    }
    let before = s.data().to_vec();
    BreathingWarp {
        center: Point::new(20.0, 20.0),
        radius: 15.0,
        time: 1.5,
        amount: 0.0,
        speed: 0.4,
        fill: [1, 2, 3, 255],
    }
    .apply(&mut s);
    assert_eq!(s.data(), &before[..]);
}

#[test]
fn warp_only_touches_the_area_around_the_spot() {
    let mut s = Surface::new(60, 60).unwrap();
    for (i, px) in s.data_mut().chunks_exact_mut(4).enumerate() {
        let v = (i * 7 % 256) as u8;
        px.copy_from_slice(&[v, 255 - v, v / 2, 255]);
    }
    let before = s.data().to_vec();
    BreathingWarp {
        center: Point::new(30.0, 30.0),
        radius: 10.0,
        time: 2.0,
        amount: 0.06,
        speed: 0.8,
        fill: [0, 0, 0, 255],
    }
    .apply(&mut s);
    let after = s.data();
    for y in 0..60usize {
        for x in 0..60usize {
            let dx = x as f64 - 30.0;
            let dy = y as f64 - 30.0;
            if dx.hypot(dy) > 10.5 + 1e-9 {
                let i = (y * 60 + x) * 4;
                assert_eq!(&after[i..i + 4], &before[i..i + 4], "({x}, {y})");
            }
        }
    }
}

#[test]
fn samples_beyond_the_surface_take_the_wall_fill() {
    let fill = [34, 32, 30, 255];
    let mut filled = 0;
    for step in 0..160 {
        // The warp rectangle is clipped by the surface, so edge pixels pushed outward sample
        // off-surface positions.
        let mut s = Surface::new(20, 20).unwrap();
        BreathingWarp {
            center: Point::new(10.0, 10.0),
            radius: 12.0,
            time: step as f64 * 0.25,
            amount: 0.06,
            speed: 0.5,
            fill,
        }
        .apply(&mut s);
        for px in s.data().chunks_exact(4) {
            if px != [0, 0, 0, 0] {
                assert_eq!(px, fill);
                filled += 1;
            }
        }
    }
    assert!(filled > 0);
}
