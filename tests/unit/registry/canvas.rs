use super::*;
use crate::registry::ids::IdAllocator;

struct Fixture {
    ids: IdAllocator,
    store: SpriteStore,
    canvas: Canvas,
}

impl Fixture {
    fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            store: SpriteStore::default(),
            canvas: Canvas::new(
                1,
                SurfaceSize {
                    width: 100,
                    height: 100,
                },
            ),
        }
    }

    fn bitmap(&mut self, z: i32) -> ElementId {
        let id = self.store.create_bitmap(&mut self.ids, 4, 4).unwrap();
        self.store.set_z_index(id, z).unwrap();
        self.canvas.attach(id);
        id
    }

    fn order(&self) -> Vec<ElementId> {
        self.canvas.render(&self.store, Argb::BLACK).sprite_order()
    }
}

#[test]
fn z_index_dominates_creation_order() {
    let mut f = Fixture::new();
    let a = f.bitmap(3);
    let b = f.bitmap(-7);
    let c = f.bitmap(0);
    assert_eq!(f.order(), vec![b, c, a]);
}

#[test]
fn equal_z_falls_back_to_creation_order() {
    let mut f = Fixture::new();
    let a = f.bitmap(2);
    let b = f.bitmap(2);
    let c = f.bitmap(2);

    // Attach order must not matter.
    f.canvas.detach(a);
    f.canvas.attach(a);
    assert_eq!(f.canvas.references(), &[b, c, a]);
    assert_eq!(f.order(), vec![a, b, c]);
}

#[test]
fn extreme_z_values_order_correctly() {
    let mut f = Fixture::new();
    let hi = f.bitmap(i32::MAX);
    let lo = f.bitmap(i32::MIN);
    let mid = f.bitmap(-1);
    assert_eq!(f.order(), vec![lo, mid, hi]);
}

#[test]
fn render_does_not_reorder_references() {
    let mut f = Fixture::new();
    let a = f.bitmap(9);
    let b = f.bitmap(1);
    let _ = f.order();
    assert_eq!(f.canvas.references(), &[a, b]);
}

#[test]
fn detach_then_reattach_round_trips_membership() {
    let mut f = Fixture::new();
    let a = f.bitmap(0);
    let b = f.bitmap(0);

    assert!(f.canvas.detach(a));
    assert_eq!(f.order(), vec![b]);

    f.canvas.attach(a);
    assert_eq!(f.order(), vec![a, b]);
}

#[test]
fn detach_of_missing_reference_is_noop() {
    let mut f = Fixture::new();
    let a = f.bitmap(0);
    assert!(!f.canvas.detach(a + 100));
    assert_eq!(f.canvas.references(), &[a]);
}

#[test]
fn duplicate_attach_draws_twice_and_detach_removes_one() {
    let mut f = Fixture::new();
    let a = f.bitmap(0);
    f.canvas.attach(a);
    assert_eq!(f.order(), vec![a, a]);

    f.canvas.detach(a);
    assert_eq!(f.order(), vec![a]);
}

#[test]
fn deleted_sprites_are_skipped_silently() {
    let mut f = Fixture::new();
    let a = f.bitmap(0);
    let b = f.bitmap(1);
    f.store.delete(a);

    assert_eq!(f.order(), vec![b]);
    assert_eq!(f.canvas.references(), &[a, b]);
}

#[test]
fn plan_carries_position_and_payload() {
    let mut f = Fixture::new();
    let t = f
        .store
        .create_text(&mut f.ids, "score", Argb(0xFFAA_BBCC), 14)
        .unwrap();
    f.store.set_position(t, 7, -3).unwrap();
    f.canvas.attach(t);

    let plan = f.canvas.render(&f.store, Argb(0xFF00_0001));
    assert_eq!(plan.clear, Argb(0xFF00_0001));
    assert_eq!(plan.size.width, 100);
    let op = plan.ops[0];
    assert_eq!((op.sprite, op.left, op.top), (t, 7, -3));
    match op.draw {
        Draw::Text(text) => {
            assert_eq!(text.content, "score");
            assert_eq!(text.font_size, 14);
        }
        Draw::Blit(_) => panic!("expected a text op"),
    }
}
