use super::*;
use crate::foundation::core::Rect;
use crate::render::noise::{GRAIN_NOISE_SIZE, NoiseKind, noise_texture};

fn solid(rgb: [f32; 3]) -> Vec<GradientStop> {
    vec![GradientStop::new(0.0, rgb, 1.0), GradientStop::new(1.0, rgb, 1.0)]
}

fn red_to_blue() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.0, [1.0, 0.0, 0.0], 1.0),
        GradientStop::new(1.0, [0.0, 0.0, 1.0], 1.0),
    ]
}

fn paint_full(w: u32, h: u32, shape: GradientShape, stops: &[GradientStop]) -> Surface {
    let mut s = Surface::new(w, h).unwrap();
    fill_gradient(&mut s, &GradientFill::over(shape, stops, FillRegion::Full)).unwrap();
    s
}

fn assert_close(px: [u8; 4], want: [u8; 4], tol: i32) {
    for c in 0..4 {
        let d = (i32::from(px[c]) - i32::from(want[c])).abs();
        assert!(d <= tol, "{px:?} vs {want:?}");
    }
}

#[test]
fn centered_radial_runs_from_center_to_rim() {
    let shape = GradientShape::centered(Point::new(16.0, 16.0), 16.0);
    let s = paint_full(32, 32, shape, &red_to_blue());
    let center = s.pixel(16, 16).unwrap();
    assert!(center[0] > 230 && center[2] < 25, "center {center:?}");
    let rim = s.pixel(30, 16).unwrap();
    assert!(rim[2] > 210 && rim[0] < 45, "rim {rim:?}");
    // Past the end circle the last stop is held.
    assert_close(s.pixel(0, 0).unwrap(), [0, 0, 255, 255], 2);
}

#[test]
fn spot_gradient_is_brightest_at_the_displaced_focal_point() {
    let shape = GradientShape::spot(Point::new(32.0, 32.0), 30.0, -0.5);
    let s = paint_full(64, 64, shape, &red_to_blue());
    let above = s.pixel(32, 17).unwrap();
    let below = s.pixel(32, 46).unwrap();
    assert!(above[0] > 230, "focal {above:?}");
    assert!(below[0] < above[0] && below[2] > above[2], "{below:?} vs {above:?}");
}

#[test]
fn linear_matches_sampled_stops() {
    let stops = vec![
        GradientStop::new(0.0, [1.0, 0.0, 0.0], 0.2),
        GradientStop::new(1.0, [0.0, 0.0, 1.0], 1.0),
    ];
    let shape = GradientShape::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(16.0, 0.0),
    };
    let s = paint_full(16, 1, shape, &stops);
    for x in [0u32, 5, 8, 15] {
        let t = (x as f32 + 0.5) / 16.0;
        let [r, g, b, a] = crate::gradient::sample_stops(&stops, t);
        let want = crate::foundation::core::premul_rgba8_from_unit([r, g, b], a);
        assert_close(s.pixel(x, 0).unwrap(), want, 4);
    }
}

#[test]
fn conic_sweeps_clockwise_from_positive_x() {
    let shape = GradientShape::Conic {
        center: Point::new(16.0, 16.0),
        start_angle: 0.0,
    };
    let s = paint_full(32, 32, shape, &red_to_blue());
    let right = s.pixel(30, 16).unwrap();
    let below = s.pixel(16, 30).unwrap();
    let left = s.pixel(2, 16).unwrap();
    let above = s.pixel(16, 2).unwrap();
    assert!(right[0] > 240, "right {right:?}");
    assert!(right[2] < below[2] && below[2] < left[2] && left[2] < above[2]);
}

#[test]
fn full_region_fill_covers_every_pixel() {
    let mut s = Surface::new(8, 8).unwrap();
    let stops = solid([1.0, 0.0, 0.0]);
    fill_gradient(
        &mut s,
        &GradientFill {
            shape: GradientShape::centered(Point::new(4.0, 4.0), 4.0),
            stops: &stops,
            region: FillRegion::Full,
            opacity: 1.0,
            blend: BlendMode::SourceOver,
        },
    )
    .unwrap();
    assert!(s.data().chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
}

#[test]
fn disc_fill_stays_inside_the_disc() {
    let mut s = Surface::new(32, 32).unwrap();
    let stops = solid([0.0, 1.0, 0.0]);
    let center = Point::new(16.0, 16.0);
    fill_gradient(
        &mut s,
        &GradientFill {
            shape: GradientShape::centered(center, 6.0),
            stops: &stops,
            region: FillRegion::disc(center, 6.0),
            opacity: 1.0,
            blend: BlendMode::SourceOver,
        },
    )
    .unwrap();
    assert_eq!(s.pixel(16, 16), Some([0, 255, 0, 255]));
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(16, 2), Some([0, 0, 0, 0]));
}

#[test]
fn opacity_scales_the_layer() {
    let mut s = Surface::new(4, 4).unwrap();
    let stops = solid([1.0, 1.0, 1.0]);
    fill_gradient(
        &mut s,
        &GradientFill {
            shape: GradientShape::centered(Point::new(2.0, 2.0), 2.0),
            stops: &stops,
            region: FillRegion::Full,
            opacity: 0.5,
            blend: BlendMode::SourceOver,
        },
    )
    .unwrap();
    let px = s.pixel(1, 1).unwrap();
    assert!((127..=129).contains(&px[3]), "{px:?}");
}

#[test]
fn destination_in_clears_outside_the_region() {
    let mut s = Surface::new(32, 32).unwrap();
    s.fill([10, 20, 30, 255]);
    let stops = solid([1.0, 1.0, 1.0]);
    let center = Point::new(16.0, 16.0);
    fill_gradient(
        &mut s,
        &GradientFill {
            shape: GradientShape::centered(center, 8.0),
            stops: &stops,
            region: FillRegion::disc(center, 8.0),
            opacity: 1.0,
            blend: BlendMode::DestinationIn,
        },
    )
    .unwrap();
    assert_eq!(s.pixel(16, 16), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn texture_fill_is_anchored() {
    let tex = noise_texture(NoiseKind::Grain, GRAIN_NOISE_SIZE);
    let mut s = Surface::new(16, 16).unwrap();
    fill_texture(
        &mut s,
        &TextureFill {
            texture: &tex,
            anchor: Point::new(3.0, 5.0),
            region: FillRegion::Full,
            opacity: 1.0,
            blend: BlendMode::SourceOver,
        },
    )
    .unwrap();
    let texel = |x: u16, y: u16| {
        let px = tex.pixmap.sample(x, y);
        [px.r, px.g, px.b, px.a]
    };
    let last = GRAIN_NOISE_SIZE - 1;
    assert_eq!(s.pixel(3, 5), Some(texel(0, 0)));
    assert_eq!(s.pixel(4, 5), Some(texel(1, 0)));
    assert_eq!(s.pixel(2, 4), Some(texel(last, last)));
}

#[test]
fn destination_in_with_an_empty_region_clears_everything() {
    let mut s = Surface::new(8, 8).unwrap();
    s.fill([10, 20, 30, 255]);
    let stops = solid([1.0, 1.0, 1.0]);
    let center = Point::new(-40.0, -40.0);
    fill_gradient(
        &mut s,
        &GradientFill {
            shape: GradientShape::centered(center, 4.0),
            stops: &stops,
            region: FillRegion::disc(center, 4.0),
            opacity: 1.0,
            blend: BlendMode::DestinationIn,
        },
    )
    .unwrap();
    assert!(s.data().iter().all(|b| *b == 0));
}

#[test]
fn fills_leave_pixels_outside_the_region_untouched() {
    let mut s = Surface::new(24, 24).unwrap();
    s.fill([10, 20, 30, 255]);
    let stops = solid([1.0, 1.0, 1.0]);
    let region = FillRegion::Rect(Rect::new(4.0, 4.0, 8.0, 8.0));
    let shape = GradientShape::centered(Point::new(6.0, 6.0), 2.0);
    for blend in [BlendMode::SourceOver, BlendMode::Screen, BlendMode::SoftLight] {
        fill_gradient(
            &mut s,
            &GradientFill {
                shape,
                stops: &stops,
                region,
                opacity: 1.0,
                blend,
            },
        )
        .unwrap();
        assert_eq!(s.pixel(12, 12), Some([10, 20, 30, 255]), "{blend:?}");
        assert_eq!(s.pixel(3, 5), Some([10, 20, 30, 255]), "{blend:?}");
    }
    assert_eq!(s.pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn blit_offsets_and_clips() {
    let mut dst = Surface::new(10, 10).unwrap();
    let mut src = Surface::new(4, 4).unwrap();
    src.fill([0, 0, 200, 200]);
    blit(&mut dst, &src, 8, -2);
    assert_eq!(dst.pixel(8, 0), Some([0, 0, 200, 200]));
    assert_eq!(dst.pixel(9, 1), Some([0, 0, 200, 200]));
    assert_eq!(dst.pixel(9, 2), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(7, 0), Some([0, 0, 0, 0]));
}
