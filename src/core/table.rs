/// Weighted table resolution.
///
/// Tables are authored as 1-indexed die tables: a roll of `n` selects the
/// `n`th entry. Rolls past the end select the last entry. Several tables are
/// deliberately shorter than their die so the tail entry absorbs the excess.
use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::core::dice::Dice;

/// One band of a range table: rolls in `min..=max` resolve to `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band<T> {
    pub min: u32,
    pub max: u32,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(min: u32, max: u32, value: T) -> Self {
        Self { min, max, value }
    }

    pub fn contains(&self, roll: u32) -> bool {
        (self.min..=self.max).contains(&roll)
    }
}

/// Resolve `roll` against a flat table, clamping out-of-range rolls.
///
/// A roll of 0 selects the first entry. Panics only on an empty table,
/// which is an authoring error.
pub fn pick<T: Copy>(table: &[T], roll: u32) -> T {
    *pick_ref(table, roll)
}

/// Borrowing form of [`pick`] for tables of owned values.
pub fn pick_ref<T>(table: &[T], roll: u32) -> &T {
    let last = table.len() - 1;
    let index = (roll.max(1) as usize - 1).min(last);
    &table[index]
}

/// Resolve `roll` against a range table, returning `fallback` when no band
/// contains it.
pub fn pick_band<T: Copy>(bands: &[Band<T>], roll: u32, fallback: T) -> T {
    bands
        .iter()
        .find(|band| band.contains(roll))
        .map(|band| band.value)
        .unwrap_or(fallback)
}

/// Roll a die sized to the table and resolve it.
pub fn roll_on<T: Copy>(dice: &mut Dice, table: &[T]) -> T {
    pick(table, dice.roll(table.len() as u32))
}

/// Roll `times` on a table with a die of `sides` faces, keeping duplicates.
pub fn roll_repeatedly<T: Copy>(dice: &mut Dice, table: &[T], sides: u32, times: u32) -> Vec<T> {
    (0..times).map(|_| pick(table, dice.roll(sides))).collect()
}

/// Remove duplicates while keeping first-seen order.
pub fn dedup_in_order<T: Copy + Eq + Hash>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUTS: &[&str] = &["Heap", "Round", "Row"];

    #[test]
    fn pick_is_one_indexed() {
        assert_eq!(pick(LAYOUTS, 1), "Heap");
        assert_eq!(pick(LAYOUTS, 2), "Round");
        assert_eq!(pick(LAYOUTS, 3), "Row");
    }

    #[test]
    fn pick_clamps_to_last() {
        assert_eq!(pick(LAYOUTS, 4), "Row");
        assert_eq!(pick(LAYOUTS, 100), "Row");
    }

    #[test]
    fn pick_zero_is_first() {
        assert_eq!(pick(LAYOUTS, 0), "Heap");
    }

    #[test]
    fn bands_resolve_by_range() {
        let bands = [
            Band::new(1, 3, "Housing"),
            Band::new(4, 10, "Business"),
            Band::new(11, 13, "Official"),
        ];
        assert_eq!(pick_band(&bands, 1, "none"), "Housing");
        assert_eq!(pick_band(&bands, 3, "none"), "Housing");
        assert_eq!(pick_band(&bands, 4, "none"), "Business");
        assert_eq!(pick_band(&bands, 13, "none"), "Official");
        assert_eq!(pick_band(&bands, 14, "none"), "none");
    }

    #[test]
    fn roll_on_uses_table_length() {
        let mut dice = Dice::from_fn(|sides| sides);
        assert_eq!(roll_on(&mut dice, LAYOUTS), "Row");
    }

    #[test]
    fn roll_repeatedly_keeps_duplicates() {
        let mut dice = Dice::from_fn(|_| 2);
        assert_eq!(
            roll_repeatedly(&mut dice, LAYOUTS, 3, 3),
            vec!["Round", "Round", "Round"]
        );
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let values = ["Moat", "Palisade", "Moat", "Towers", "Palisade"];
        assert_eq!(dedup_in_order(values), vec!["Moat", "Palisade", "Towers"]);
    }
}
