use super::*;

fn frame(params: &HaloParams, w: u32, h: u32, time: Option<f64>) -> Surface {
    let mut s = Surface::new(w, h).unwrap();
    render(&mut s, params, time).unwrap();
    s
}

fn close(a: [u8; 4], b: [u8; 3], tol: i32) -> bool {
    a.iter()
        .zip(b)
        .all(|(&x, y)| (i32::from(x) - i32::from(y)).abs() <= tol)
}

#[test]
fn default_wall_color() {
    assert_eq!(wall_rgb8([0.08, 0.06, 0.05]), [34, 32, 30]);
    assert_eq!(wall_rgb8([1.0, 1.0, 1.0]), [69, 68, 66]);
}

#[test]
fn frame_is_opaque_everywhere() {
    let s = frame(&HaloParams::default(), 96, 64, None);
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn hotspot_shows_the_light_color() {
    let params = HaloParams::default();
    let s = frame(&params, 120, 90, None);
    let light = params.scene.light_rgb.map(|c| (c * 255.0).round() as u8);
    let px = s.pixel(60, 45).unwrap();
    assert!(close(px, light, 10), "center {px:?} vs {light:?}");
}

#[test]
fn corners_stay_dark() {
    let s = frame(&HaloParams::default(), 120, 90, None);
    let px = s.pixel(0, 0).unwrap();
    assert!(u32::from(px[0]) + u32::from(px[1]) + u32::from(px[2]) < 110, "{px:?}");
}

#[test]
fn non_radial_modes_leave_the_surroundings_alone() {
    let radial = frame(&HaloParams::default(), 120, 90, None);
    for mode in [GradientMode::Horizon, GradientMode::MultiRing, GradientMode::Sector] {
        let mut params = HaloParams::default();
        params.color.gradient_mode = mode;
        let s = frame(&params, 120, 90, None);
        assert_eq!(s.pixel(0, 0), radial.pixel(0, 0), "{mode:?}");
        assert_eq!(s.pixel(119, 89), radial.pixel(119, 89), "{mode:?}");
        assert_ne!(s.pixel(60, 45), radial.pixel(60, 45), "{mode:?}");
    }
}

#[test]
fn sector_mode_varies_with_angle() {
    let mut params = HaloParams::default();
    params.color.gradient_mode = GradientMode::Sector;
    params.color.sector.num_sectors = 3;
    params.color.sector.radial_blend = 0.0;
    let s = frame(&params, 120, 120, None);
    // Points on a small circle at 30, 150 and 270 degrees.
    let right = s.pixel(66, 63).unwrap();
    let left = s.pixel(53, 63).unwrap();
    let up = s.pixel(60, 52).unwrap();
    assert_ne!(right, left);
    assert_ne!(left, up);
}

#[test]
fn rendering_is_deterministic() {
    let mut params = HaloParams::default();
    params.edge.trajectory_enabled = true;
    params.scene.moving_light_enabled = true;
    let a = frame(&params, 80, 60, Some(1.25));
    let b = frame(&params, 80, 60, Some(1.25));
    assert_eq!(a.data(), b.data());
}

#[test]
fn trajectory_changes_over_time() {
    let mut params = HaloParams::default();
    params.edge.trajectory_enabled = true;
    let a = frame(&params, 80, 60, Some(0.0));
    let b = frame(&params, 80, 60, Some(1.0));
    assert_ne!(a.data(), b.data());
}

#[test]
fn effects_without_time_match_the_static_frame() {
    let mut params = HaloParams::default();
    params.edge.trajectory_enabled = true;
    params.scene.moving_light_enabled = true;
    let animated_off = frame(&params, 80, 60, None);
    let plain = frame(&HaloParams::default(), 80, 60, None);
    assert_eq!(animated_off.data(), plain.data());
}

#[test]
fn breathing_soft_blur_applies_without_a_clock() {
    let plain = frame(&HaloParams::default(), 80, 60, None);

    let mut params = HaloParams::default();
    params.edge.breathing_enabled = true;
    let blurred = frame(&params, 80, 60, None);
    assert_ne!(blurred.data(), plain.data());
    assert!(blurred.data().chunks_exact(4).all(|px| px[3] == 255));

    params.scene.soft_blur = 0.0;
    let unblurred = frame(&params, 80, 60, None);
    assert_eq!(unblurred.data(), plain.data());
}

#[test]
fn fog_brightens_the_spot_area() {
    let mut params = HaloParams::default();
    params.scene.bloom = 0.0;
    let base = frame(&params, 80, 80, Some(1.0));
    params.scene.moving_light_enabled = true;
    params.scene.moving_light_intensity = 1.0;
    let fog = frame(&params, 80, 80, Some(1.0));
    // Screen never darkens; sum over the frame must grow.
    let sum = |s: &Surface| s.data().iter().map(|&v| u64::from(v)).sum::<u64>();
    assert!(sum(&fog) > sum(&base));
}

#[test]
fn haze_softens_the_frame() {
    let mut params = HaloParams::default();
    let sharp = frame(&params, 48, 48, None);
    params.scene.haze = 0.3;
    let hazy = frame(&params, 48, 48, None);
    assert_ne!(sharp.data(), hazy.data());
    assert!(hazy.data().chunks_exact(4).all(|px| px[3] == 255));
}
