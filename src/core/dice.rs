/// Dice service: uniform die rolls over an injectable randomness source.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can produce a die result in `[1, sides]`.
///
/// Implementations are not required to clamp; [`Dice`] clamps every result
/// into range before handing it to a generator.
pub trait RollSource {
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// A roll source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRolls<R>(pub R);

impl<R: Rng> RollSource for RngRolls<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides)
    }
}

/// A roll source driven by a closure `sides -> roll`.
///
/// Used to force specific outcomes, e.g. `FnRolls(|_| 1)` always rolls the
/// minimum and `FnRolls(|sides| sides)` always rolls the maximum.
pub struct FnRolls<F>(pub F);

impl<F: FnMut(u32) -> u32> RollSource for FnRolls<F> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (self.0)(sides)
    }
}

/// Die roller handed to every generator.
pub struct Dice {
    source: Box<dyn RollSource>,
}

impl Dice {
    /// Wrap an arbitrary roll source.
    pub fn from_source(source: impl RollSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Deterministic dice from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_source(RngRolls(StdRng::seed_from_u64(seed)))
    }

    /// Fresh dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_source(RngRolls(StdRng::from_entropy()))
    }

    /// Dice whose outcomes are computed by `f(sides)`.
    pub fn from_fn(f: impl FnMut(u32) -> u32 + 'static) -> Self {
        Self::from_source(FnRolls(f))
    }

    /// Roll a single die with `sides` faces. A zero-sided die rolls 1.
    pub fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        self.source.roll_die(sides).clamp(1, sides)
    }

    /// Sum of `count` dice with `sides` faces each.
    pub fn roll_many(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll(sides)).sum()
    }

    pub fn d2(&mut self) -> u32 {
        self.roll(2)
    }

    pub fn d3(&mut self) -> u32 {
        self.roll(3)
    }

    pub fn d4(&mut self) -> u32 {
        self.roll(4)
    }

    pub fn d6(&mut self) -> u32 {
        self.roll(6)
    }

    pub fn d8(&mut self) -> u32 {
        self.roll(8)
    }

    pub fn d10(&mut self) -> u32 {
        self.roll(10)
    }

    pub fn d12(&mut self) -> u32 {
        self.roll(12)
    }

    pub fn d20(&mut self) -> u32 {
        self.roll(20)
    }

    pub fn d24(&mut self) -> u32 {
        self.roll(24)
    }

    pub fn d30(&mut self) -> u32 {
        self.roll(30)
    }

    pub fn d100(&mut self) -> u32 {
        self.roll(100)
    }

    pub fn two_d6(&mut self) -> u32 {
        self.roll_many(2, 6)
    }

    pub fn three_d6(&mut self) -> u32 {
        self.roll_many(3, 6)
    }

    /// A `1-in-n` chance: succeeds when a `dN` shows 1.
    pub fn one_in(&mut self, n: u32) -> bool {
        self.roll(n) == 1
    }

    /// A percentile gate: succeeds when a `d100` is at most `percent`.
    pub fn percent(&mut self, percent: u32) -> bool {
        self.d100() <= percent
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rolls_stay_in_range() {
        let mut dice = Dice::seeded(7);
        for sides in [2, 3, 4, 6, 8, 10, 12, 20, 24, 30, 100] {
            for _ in 0..500 {
                let r = dice.roll(sides);
                assert!((1..=sides).contains(&r), "d{} rolled {}", sides, r);
            }
        }
    }

    #[test]
    fn seeded_dice_are_deterministic() {
        let mut a = Dice::seeded(42);
        let mut b = Dice::seeded(42);
        let left: Vec<u32> = (0..50).map(|_| a.d100()).collect();
        let right: Vec<u32> = (0..50).map(|_| b.d100()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn every_face_eventually_appears() {
        let mut dice = Dice::seeded(3);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[(dice.d6() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_rolls_are_clamped() {
        let mut dice = Dice::from_fn(|_| 0);
        assert_eq!(dice.d6(), 1);

        let mut dice = Dice::from_fn(|_| 999);
        assert_eq!(dice.d20(), 20);
    }

    #[test]
    fn sums_of_minimums_and_maximums() {
        let mut low = Dice::from_fn(|_| 1);
        assert_eq!(low.two_d6(), 2);
        assert_eq!(low.three_d6(), 3);

        let mut high = Dice::from_fn(|sides| sides);
        assert_eq!(high.two_d6(), 12);
        assert_eq!(high.three_d6(), 18);
    }

    #[test]
    fn gates() {
        let mut low = Dice::from_fn(|_| 1);
        assert!(low.one_in(6));
        assert!(low.percent(15));

        let mut high = Dice::from_fn(|sides| sides);
        assert!(!high.one_in(6));
        assert!(!high.percent(50));
    }

    #[test]
    fn zero_sided_die_rolls_one() {
        let mut dice = Dice::seeded(1);
        assert_eq!(dice.roll(0), 1);
    }
}
