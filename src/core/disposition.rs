/// Disposition resolution for settlements and their rulers.
use crate::core::dice::Dice;
use crate::core::table::{pick_band, Band};
use crate::schema::common::Disposition;

/// `2d6` bands onto the five-step disposition scale.
pub const DISPOSITION_BANDS: [Band<Disposition>; 5] = [
    Band::new(2, 2, Disposition::AttackOnSight),
    Band::new(3, 5, Disposition::Hostile),
    Band::new(6, 8, Disposition::Neutral),
    Band::new(9, 11, Disposition::Welcoming),
    Band::new(12, 12, Disposition::Enthusiastic),
];

/// The reverse of a disposition, used when a ruler disagrees with the
/// people they rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opposite {
    Fixed(Disposition),
    /// Roll a `d3`: at most `threshold` gives `low`, otherwise `high`.
    Split {
        threshold: u32,
        low: Disposition,
        high: Disposition,
    },
}

pub const OPPOSITE_DISPOSITIONS: [(Disposition, Opposite); 5] = [
    (
        Disposition::AttackOnSight,
        Opposite::Fixed(Disposition::Enthusiastic),
    ),
    (Disposition::Hostile, Opposite::Fixed(Disposition::Welcoming)),
    (
        Disposition::Neutral,
        Opposite::Split {
            threshold: 3,
            low: Disposition::Hostile,
            high: Disposition::Welcoming,
        },
    ),
    (Disposition::Welcoming, Opposite::Fixed(Disposition::Hostile)),
    (
        Disposition::Enthusiastic,
        Opposite::Fixed(Disposition::AttackOnSight),
    ),
];

/// Map a `2d6` total onto the disposition scale.
pub fn disposition_for(roll: u32) -> Disposition {
    pick_band(&DISPOSITION_BANDS, roll, Disposition::Enthusiastic)
}

/// Roll a fresh disposition.
pub fn roll_disposition(dice: &mut Dice) -> Disposition {
    disposition_for(dice.two_d6())
}

/// Resolve the opposite of `disposition`, rolling where the table splits.
pub fn opposite_of(disposition: Disposition, dice: &mut Dice) -> Disposition {
    let opposite = OPPOSITE_DISPOSITIONS
        .iter()
        .find(|(from, _)| *from == disposition)
        .map(|(_, to)| *to);

    match opposite {
        Some(Opposite::Fixed(to)) => to,
        Some(Opposite::Split {
            threshold,
            low,
            high,
        }) => {
            if dice.d3() <= threshold {
                low
            } else {
                high
            }
        }
        None => disposition,
    }
}

/// A ruler shares the people's disposition unless a `d6` shows 5 or 6,
/// in which case they hold the opposite view.
pub fn roll_ruler_disposition(people: Disposition, dice: &mut Dice) -> Disposition {
    if dice.d6() >= 5 {
        opposite_of(people, dice)
    } else {
        people
    }
}
