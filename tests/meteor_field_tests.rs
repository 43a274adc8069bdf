//! Meteor field tests - resize, advance and spawn behavior

use meteor_mayhem::core::MeteorField;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============== Resize Tests ==============

#[test]
fn test_resize_grow_preserves_existing_meteor() {
    let mut field = MeteorField::new(10);
    field.set(3, 5);

    field.resize(15);

    assert_eq!(field.at(3), Some(5));
    for column in 10..15 {
        assert_eq!(field.at(column), None, "new column {} should be empty", column);
    }
}

#[test]
fn test_resize_shrink_preserves_prefix() {
    let mut field = MeteorField::new(10);
    for column in 0..10 {
        field.set(column, column);
    }

    field.resize(5);

    assert_eq!(field.width(), 5);
    for column in 0..5 {
        assert_eq!(field.at(column), Some(column));
    }
}

#[test]
fn test_resize_boundary_column_is_cleared() {
    // The first column past the old width must start empty, and the last old
    // column must keep its meteor.
    let mut field = MeteorField::new(4);
    field.set(3, 7);
    field.resize(8);
    assert_eq!(field.at(3), Some(7));
    assert_eq!(field.at(4), None);
}

// ============== Advance Tests ==============

#[test]
fn test_advance_bottom_row_exits() {
    let rows = 12;
    let mut field = MeteorField::new(2);
    field.set(0, rows - 1);
    field.set(1, 0);

    field.advance(rows);

    assert_eq!(field.at(0), None);
    assert_eq!(field.at(1), Some(1));
}

#[test]
fn test_meteor_falls_through_whole_screen() {
    let rows = 5;
    let mut field = MeteorField::new(1);
    field.set(0, 0);

    for expected in 1..rows {
        field.advance(rows);
        assert_eq!(field.at(0), Some(expected));
    }
    field.advance(rows);
    assert_eq!(field.at(0), None);
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_never_touches_full_field() {
    let mut field = MeteorField::new(32);
    for column in 0..32 {
        field.set(column, 3);
    }
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..1000 {
        field.try_spawn(&mut rng);
    }

    assert!(field.iter().all(|(_, row)| row == 3));
    assert_eq!(field.occupied(), 32);
}

#[test]
fn test_spawn_fills_free_columns_only() {
    let mut field = MeteorField::new(3);
    field.set(0, 4);
    field.set(2, 4);
    let mut rng = StdRng::seed_from_u64(5);

    let mut spawned = Vec::new();
    for _ in 0..200 {
        if let Some(column) = field.try_spawn(&mut rng) {
            spawned.push(column);
        }
    }

    assert_eq!(spawned, vec![1]);
    assert_eq!(field.at(1), Some(0));
    assert_eq!(field.at(0), Some(4));
}

#[test]
fn test_rows_stay_in_range_under_random_play() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut field = MeteorField::new(20);
    let rows = 15;

    for _ in 0..5000 {
        field.try_spawn(&mut rng);
        field.advance(rows);
        assert!(field.iter().all(|(_, row)| row < rows));
    }
}
