use super::*;

#[test]
fn new_rejects_zero_and_oversized_sides() {
    assert!(Surface::new(0, 10).is_err());
    assert!(Surface::new(10, 0).is_err());
    assert!(Surface::new(70_000, 10).is_err());
    let s = Surface::new(3, 2).unwrap();
    assert_eq!((s.width(), s.height()), (3, 2));
    assert_eq!(s.data().len(), 24);
    assert!(s.data().iter().all(|b| *b == 0));
}

#[test]
fn fill_pixel_and_copy() {
    let mut a = Surface::new(2, 2).unwrap();
    a.fill([10, 20, 30, 255]);
    assert_eq!(a.pixel(1, 1), Some([10, 20, 30, 255]));
    assert_eq!(a.pixel(2, 0), None);

    let mut b = Surface::new(2, 2).unwrap();
    b.copy_from(&a).unwrap();
    assert_eq!(b.data(), a.data());

    let small = Surface::new(1, 1).unwrap();
    assert!(b.copy_from(&small).is_err());
}

#[test]
fn frame_unpremultiplies_for_export() {
    let mut s = Surface::new(1, 1).unwrap();
    s.fill([64, 32, 0, 128]);
    let frame = s.to_frame();
    assert!(frame.premultiplied);
    let straight = frame.to_straight_rgba8();
    assert_eq!(straight[3], 128);
    assert_eq!(straight[0], 128);
    assert_eq!(straight[1], 64);
}
