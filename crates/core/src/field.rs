//! Meteor field - one optional falling meteor per screen column
//!
//! The field is as wide as the terminal. Each column holds `None` when empty
//! or `Some(row)` with the current row of its meteor, so a column can never
//! hold more than one meteor.

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeteorField {
    columns: Vec<Option<u16>>,
}

impl MeteorField {
    /// Create an empty field `width` columns wide
    pub fn new(width: u16) -> Self {
        Self {
            columns: vec![None; width as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Change the number of columns.
    ///
    /// Columns below the old width keep their meteor; columns at or beyond it
    /// start empty. Shrinking drops the tail.
    pub fn resize(&mut self, width: u16) {
        self.columns.resize(width as usize, None);
    }

    /// Move every meteor down one row.
    ///
    /// A meteor that reaches `rows` has left the screen and its column is
    /// emptied.
    pub fn advance(&mut self, rows: u16) {
        for slot in self.columns.iter_mut() {
            if let Some(row) = *slot {
                let next = row.saturating_add(1);
                *slot = if next >= rows { None } else { Some(next) };
            }
        }
    }

    /// Make one spawn attempt in a uniformly chosen column.
    ///
    /// The attempt silently fails if that column already holds a meteor, so the
    /// effective spawn rate drops as the field fills up. Returns the column
    /// that received a new meteor.
    pub fn try_spawn<R: Rng>(&mut self, rng: &mut R) -> Option<u16> {
        if self.columns.is_empty() {
            return None;
        }
        let column = rng.gen_range(0..self.columns.len());
        let slot = &mut self.columns[column];
        if slot.is_some() {
            return None;
        }
        *slot = Some(0);
        Some(column as u16)
    }

    /// Empty a column. Out-of-range columns are ignored.
    pub fn clear(&mut self, column: u16) {
        if let Some(slot) = self.columns.get_mut(column as usize) {
            *slot = None;
        }
    }

    /// Row of the meteor in `column`, if any.
    pub fn at(&self, column: u16) -> Option<u16> {
        self.columns.get(column as usize).copied().flatten()
    }

    /// Place a meteor directly. Returns false when `column` is out of range.
    pub fn set(&mut self, column: u16, row: u16) -> bool {
        match self.columns.get_mut(column as usize) {
            Some(slot) => {
                *slot = Some(row);
                true
            }
            None => false,
        }
    }

    /// Drop meteors sitting at `rows` or below (used when the terminal gets shorter).
    pub fn truncate_rows(&mut self, rows: u16) {
        for slot in self.columns.iter_mut() {
            if matches!(*slot, Some(row) if row >= rows) {
                *slot = None;
            }
        }
    }

    /// `(column, row)` of every meteor, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(column, slot)| slot.map(|row| (column as u16, row)))
    }

    pub fn occupied(&self) -> usize {
        self.columns.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_field_is_empty() {
        let field = MeteorField::new(8);
        assert_eq!(field.width(), 8);
        assert_eq!(field.occupied(), 0);
        assert!((0..8).all(|c| field.at(c).is_none()));
    }

    #[test]
    fn resize_grow_preserves_old_columns_and_clears_new() {
        let mut field = MeteorField::new(10);
        field.set(3, 5);
        field.set(9, 1);

        field.resize(15);

        assert_eq!(field.width(), 15);
        assert_eq!(field.at(3), Some(5));
        assert_eq!(field.at(9), Some(1));
        for c in 10..15 {
            assert_eq!(field.at(c), None, "column {} should start empty", c);
        }
    }

    #[test]
    fn resize_shrink_keeps_prefix() {
        let mut field = MeteorField::new(10);
        field.set(3, 5);
        field.set(7, 2);
        let before: Vec<_> = (0..5).map(|c| field.at(c)).collect();

        field.resize(5);

        assert_eq!(field.width(), 5);
        let after: Vec<_> = (0..5).map(|c| field.at(c)).collect();
        assert_eq!(before, after);
        assert_eq!(field.at(7), None);
    }

    #[test]
    fn shrink_then_grow_does_not_resurrect_meteors() {
        let mut field = MeteorField::new(10);
        field.set(8, 4);
        field.resize(5);
        field.resize(10);
        assert_eq!(field.at(8), None);
    }

    #[test]
    fn advance_moves_down_and_exits_bottom() {
        let mut field = MeteorField::new(3);
        field.set(0, 0);
        field.set(1, 9);

        field.advance(10);

        assert_eq!(field.at(0), Some(1));
        assert_eq!(field.at(1), None);
        assert_eq!(field.at(2), None);
    }

    #[test]
    fn spawn_on_full_field_changes_nothing() {
        let mut field = MeteorField::new(6);
        for c in 0..6 {
            field.set(c, c + 2);
        }
        let before = field.clone();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(field.try_spawn(&mut rng), None);
        }
        assert_eq!(field, before);
    }

    #[test]
    fn spawn_places_meteor_at_top() {
        let mut field = MeteorField::new(4);
        let mut rng = StdRng::seed_from_u64(1);

        let column = field.try_spawn(&mut rng).expect("empty field always accepts a spawn");
        assert_eq!(field.at(column), Some(0));
        assert_eq!(field.occupied(), 1);
    }

    #[test]
    fn spawn_on_zero_width_field_is_noop() {
        let mut field = MeteorField::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(field.try_spawn(&mut rng), None);
    }

    #[test]
    fn clear_and_out_of_range_access() {
        let mut field = MeteorField::new(4);
        field.set(2, 3);
        field.clear(2);
        field.clear(99);
        assert_eq!(field.at(2), None);
        assert_eq!(field.at(99), None);
        assert!(!field.set(4, 0));
    }

    #[test]
    fn truncate_rows_drops_low_meteors() {
        let mut field = MeteorField::new(3);
        field.set(0, 2);
        field.set(1, 5);
        field.set(2, 4);
        field.truncate_rows(4);
        assert_eq!(field.iter().collect::<Vec<_>>(), vec![(0, 2)]);
    }
}
