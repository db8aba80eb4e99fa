use super::*;

#[test]
fn full_region_bounds_are_the_surface() {
    let b = FillRegion::Full.pixel_bounds(7, 5).unwrap();
    assert_eq!(
        b,
        PixelBounds {
            x0: 0,
            y0: 0,
            x1: 7,
            y1: 5
        }
    );
}

#[test]
fn disc_bounds_are_clipped() {
    let b = FillRegion::disc(Point::new(2.0, 2.0), 4.5)
        .pixel_bounds(20, 20)
        .unwrap();
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (0, 0, 7, 7));
}

#[test]
fn empty_regions_have_no_bounds() {
    assert_eq!(FillRegion::disc(Point::new(5.0, 5.0), 0.0).pixel_bounds(10, 10), None);
    assert_eq!(
        FillRegion::square(Point::new(-50.0, -50.0), 10.0).pixel_bounds(10, 10),
        None
    );
}

fn red() -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::new([1.0, 0.0, 0.0, 1.0])
}

fn alpha_at(pixmap: &vello_cpu::Pixmap, x: u16, y: u16) -> u8 {
    pixmap.sample(x, y).a
}

#[test]
fn disc_is_solid_inside_and_empty_outside() {
    let region = FillRegion::disc(Point::new(16.0, 16.0), 9.5);
    let bounds = PixelBounds {
        x0: 0,
        y0: 0,
        x1: 32,
        y1: 32,
    };
    let pixmap = render_region(&region, bounds, red(), vello_cpu::kurbo::Affine::IDENTITY).unwrap();
    assert_eq!(alpha_at(&pixmap, 16, 16), 255);
    assert_eq!(alpha_at(&pixmap, 0, 0), 0);
    assert_eq!(alpha_at(&pixmap, 31, 16), 0);
    // A pixel straddling the circle is partially covered.
    let edge = alpha_at(&pixmap, 25, 16);
    assert!(edge > 0 && edge < 255, "edge coverage {edge}");
}

#[test]
fn scratch_pixmap_matches_the_bounds() {
    let region = FillRegion::disc(Point::new(40.0, 30.0), 5.0);
    let bounds = region.pixel_bounds(100, 100).unwrap();
    assert_eq!((bounds.width(), bounds.height()), (10, 10));
    let pixmap = render_region(&region, bounds, red(), vello_cpu::kurbo::Affine::IDENTITY).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (10, 10));
    // Canvas (40, 30) lands at the middle of the scratch pixmap.
    assert_eq!(alpha_at(&pixmap, 5, 5), 255);
    assert_eq!(alpha_at(&pixmap, 0, 0), 0);
}

#[test]
fn rect_matches_pixel_aligned_edges() {
    let region = FillRegion::Rect(Rect::new(2.0, 3.0, 6.0, 5.0));
    let bounds = PixelBounds {
        x0: 0,
        y0: 0,
        x1: 8,
        y1: 8,
    };
    let pixmap = render_region(&region, bounds, red(), vello_cpu::kurbo::Affine::IDENTITY).unwrap();
    assert_eq!(alpha_at(&pixmap, 2, 3), 255);
    assert_eq!(alpha_at(&pixmap, 5, 4), 255);
    assert_eq!(alpha_at(&pixmap, 6, 4), 0);
    assert_eq!(alpha_at(&pixmap, 2, 5), 0);
}

#[test]
fn full_region_fills_the_offset_bounds() {
    let bounds = PixelBounds {
        x0: 4,
        y0: 2,
        x1: 8,
        y1: 6,
    };
    let pixmap =
        render_region(&FillRegion::Full, bounds, red(), vello_cpu::kurbo::Affine::IDENTITY)
            .unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (4, 4));
    let px = pixmap.sample(3, 3);
    assert_eq!((px.r, px.a), (255, 255));
}
