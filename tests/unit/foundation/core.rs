use super::*;

#[test]
fn argb_channels_unpack_in_order() {
    let c = Argb(0x80FF_4010);
    assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0xFF, 0x40, 0x10));
    assert_eq!(Argb::from_i32(-1), Argb::WHITE);
    assert_eq!(c.to_string(), "#80FF4010");
}

#[test]
fn argb_premultiplies_color_channels() {
    assert_eq!(Argb::WHITE.to_premul_rgba8(), [255, 255, 255, 255]);
    assert_eq!(Argb::TRANSPARENT.to_premul_rgba8(), [0, 0, 0, 0]);
    assert_eq!(Argb(0x80FF_0000).to_premul_rgba8(), [128, 0, 0, 128]);
}

#[test]
fn surface_size_rejects_non_positive_and_oversized() {
    assert!(SurfaceSize::new(0, 10, 64).is_err());
    assert!(SurfaceSize::new(10, -3, 64).is_err());
    assert!(SurfaceSize::new(65, 10, 64).is_err());
    let s = SurfaceSize::new(64, 1, 64).unwrap();
    assert_eq!(s.area(), 64);
}

#[test]
fn surface_size_index_of_bounds() {
    let s = SurfaceSize::new(4, 3, 64).unwrap();
    assert_eq!(s.index_of(0, 0), Some(0));
    assert_eq!(s.index_of(3, 2), Some(11));
    assert_eq!(s.index_of(4, 0), None);
    assert_eq!(s.index_of(0, 3), None);
    assert_eq!(s.index_of(-1, 0), None);
}

#[test]
fn element_kind_slots_are_distinct() {
    let mut slots: Vec<usize> = ElementKind::ALL.iter().map(|k| k.slot()).collect();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), ElementKind::ALL.len());
}
