use glam::Vec2;
use site_core::blob::spawn_grid;
use site_core::{Viewport, BLOB_ATOM_MAX, BLOB_ATOM_MIN, BLOB_OPACITY_MAX, BLOB_WRAP_PADDING};

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0, 1.0)
}

#[test]
fn zero_grid_spawns_nothing() {
    assert!(spawn_grid(&viewport(), 0, 0, 42).is_empty());
    assert!(spawn_grid(&viewport(), 3, 0, 42).is_empty());
    assert!(spawn_grid(&viewport(), 0, 3, 42).is_empty());
}

#[test]
fn grid_spawns_one_blob_per_cell() {
    let blobs = spawn_grid(&viewport(), 2, 3, 42);
    assert_eq!(blobs.len(), 6);
    for blob in &blobs {
        assert!(blob.atoms.len() >= BLOB_ATOM_MIN);
        assert!(blob.atoms.len() <= BLOB_ATOM_MAX);
    }
}

#[test]
fn spawning_is_deterministic_per_seed() {
    let a = spawn_grid(&viewport(), 2, 2, 7);
    let b = spawn_grid(&viewport(), 2, 2, 7);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.atoms.len(), y.atoms.len());
    }
}

#[test]
fn opacity_stays_within_the_cap() {
    let mut blobs = spawn_grid(&viewport(), 2, 2, 42);
    let bounds = Vec2::new(660.0, 800.0);
    let mut clock = 0.0;
    for _ in 0..600 {
        clock += 1.0 / 60.0;
        for blob in &mut blobs {
            blob.step(1.0 / 60.0, clock, bounds);
            assert!(blob.opacity >= 0.0);
            assert!(blob.opacity <= BLOB_OPACITY_MAX + 1e-6);
        }
    }
}

#[test]
fn positions_wrap_toroidally_at_the_padded_bounds() {
    let bounds = Vec2::new(660.0, 800.0);
    let mut blobs = spawn_grid(&viewport(), 1, 1, 42);
    let blob = &mut blobs[0];

    blob.pos = Vec2::new(-BLOB_WRAP_PADDING - 1.0, 100.0);
    blob.step(0.0, 0.0, bounds);
    assert_eq!(blob.pos.x, bounds.x + BLOB_WRAP_PADDING);

    blob.pos = Vec2::new(100.0, bounds.y + BLOB_WRAP_PADDING + 1.0);
    blob.step(0.0, 0.0, bounds);
    assert_eq!(blob.pos.y, -BLOB_WRAP_PADDING);
}
