use super::*;

fn store() -> (SpriteStore, IdAllocator) {
    (SpriteStore::with_limit(256), IdAllocator::new())
}

#[test]
fn bitmap_starts_transparent_and_takes_pixel_writes() {
    let (mut store, mut ids) = store();
    let id = store.create_bitmap(&mut ids, 10, 10).unwrap();

    let bitmap = store.get(id).unwrap().as_bitmap().unwrap();
    assert!(bitmap.pixels().iter().all(|&p| p == Argb::TRANSPARENT));

    store.set_pixel(id, 9, 0, Argb(0xFF11_2233)).unwrap();
    let bitmap = store.get(id).unwrap().as_bitmap().unwrap();
    assert_eq!(bitmap.pixel(9, 0), Some(Argb(0xFF11_2233)));
    assert_eq!(bitmap.pixel(0, 9), Some(Argb::TRANSPARENT));
}

#[test]
fn out_of_range_pixel_fails_and_leaves_bitmap_unchanged() {
    let (mut store, mut ids) = store();
    let id = store.create_bitmap(&mut ids, 4, 3).unwrap();
    let before = store.get(id).unwrap().clone();

    for (x, y) in [(4, 0), (0, 3), (-1, 1), (2, -5)] {
        let err = store.set_pixel(id, x, y, Argb::WHITE).unwrap_err();
        assert!(
            matches!(err, HostError::OutOfBounds { width: 4, height: 3, .. }),
            "{err}"
        );
    }
    assert_eq!(store.get(id).unwrap(), &before);
}

#[test]
fn bitmap_and_text_share_one_id_space() {
    let (mut store, mut ids) = store();
    let b = store.create_bitmap(&mut ids, 1, 1).unwrap();
    let t = store.create_text(&mut ids, "hi", Argb::WHITE, 12).unwrap();
    let b2 = store.create_bitmap(&mut ids, 1, 1).unwrap();
    assert_eq!((b, t, b2), (1, 2, 3));
}

#[test]
fn invalid_dimensions_are_rejected_without_consuming_an_id() {
    let (mut store, mut ids) = store();
    assert!(matches!(
        store.create_bitmap(&mut ids, 0, 5),
        Err(HostError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        store.create_bitmap(&mut ids, 5, 257),
        Err(HostError::InvalidDimensions { .. })
    ));
    assert_eq!(store.create_bitmap(&mut ids, 5, 5).unwrap(), 1);
}

#[test]
fn non_positive_font_size_is_a_validation_error() {
    let (mut store, mut ids) = store();
    for size in [0, -3] {
        let err = store
            .create_text(&mut ids, "x", Argb::WHITE, size)
            .unwrap_err();
        assert!(matches!(err, HostError::Validation(_)));
        assert_eq!(
            err.to_string(),
            format!("validation error: font size must be > 0, got {size}")
        );
    }
    assert_eq!(store.create_text(&mut ids, "x", Argb::WHITE, 1).unwrap(), 1);
}

#[test]
fn kind_mismatch_reports_not_found() {
    let (mut store, mut ids) = store();
    let b = store.create_bitmap(&mut ids, 2, 2).unwrap();
    let t = store.create_text(&mut ids, "a", Argb::WHITE, 10).unwrap();

    assert!(store.set_text(b, "nope").unwrap_err().is_not_found());
    assert!(store.set_pixel(t, 0, 0, Argb::WHITE).unwrap_err().is_not_found());

    store.set_text(t, "b").unwrap();
    assert_eq!(store.get(t).unwrap().as_text().unwrap().content, "b");
}

#[test]
fn mutations_on_unknown_id_fail_without_side_effects() {
    let (mut store, mut ids) = store();
    let id = store.create_bitmap(&mut ids, 2, 2).unwrap();

    assert!(store.set_position(99, 1, 1).unwrap_err().is_not_found());
    assert!(store.set_z_index(99, 1).unwrap_err().is_not_found());
    assert!(store.get(99).unwrap_err().is_not_found());

    let s = store.get(id).unwrap();
    assert_eq!((s.left, s.top, s.z_index), (0, 0, 0));
}

#[test]
fn position_and_z_accept_negative_values() {
    let (mut store, mut ids) = store();
    let id = store.create_text(&mut ids, "t", Argb::WHITE, 8).unwrap();
    store.set_position(id, -20, -30).unwrap();
    store.set_z_index(id, i32::MIN).unwrap();
    let s = store.get(id).unwrap();
    assert_eq!((s.left, s.top, s.z_index), (-20, -30, i32::MIN));
}

#[test]
fn delete_is_idempotent() {
    let (mut store, mut ids) = store();
    let id = store.create_bitmap(&mut ids, 1, 1).unwrap();
    assert!(store.delete(id));
    assert!(!store.delete(id));
    assert!(store.is_empty());
    assert!(store.resolve(id).is_none());
}

#[test]
fn sort_key_orders_by_z_then_id() {
    let (mut store, mut ids) = store();
    let a = store.create_bitmap(&mut ids, 1, 1).unwrap();
    let b = store.create_bitmap(&mut ids, 1, 1).unwrap();
    store.set_z_index(a, -1).unwrap();
    store.set_z_index(b, -1).unwrap();
    let ka = store.get(a).unwrap().sort_key();
    let kb = store.get(b).unwrap().sort_key();
    assert!(ka < kb);

    store.set_z_index(a, 0).unwrap();
    assert!(store.get(a).unwrap().sort_key() > kb);

    store.set_z_index(b, i32::MAX).unwrap();
    store.set_z_index(a, i32::MIN).unwrap();
    assert!(store.get(a).unwrap().sort_key() < store.get(b).unwrap().sort_key());
}

#[test]
fn upload_pixels_checks_length() {
    let (mut store, mut ids) = store();
    let id = store.create_bitmap(&mut ids, 2, 1).unwrap();
    assert!(matches!(
        store.upload_pixels(id, &[0xFF00_0000]),
        Err(HostError::Validation(_))
    ));
    store.upload_pixels(id, &[0xFF00_0000, 0xFFFF_FFFF]).unwrap();
    let bitmap = store.get(id).unwrap().as_bitmap().unwrap();
    assert_eq!(bitmap.pixel(1, 0), Some(Argb::WHITE));
}
