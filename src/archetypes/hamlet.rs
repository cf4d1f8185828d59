use tracing::trace;

use super::{base, roll_layout, GenerationContext};
use crate::core::disposition::roll_disposition;
use crate::core::names::settlement_name;
use crate::core::table::pick;
use crate::schema::civilian::HamletData;
use crate::schema::settlement::{SettlementRecord, SettlementType};

pub const MAIN_BUILDINGS: &[&str] = &[
    "Brewery/Vineyard",
    "Chapel",
    "Farm/Ranch",
    "Manor",
    "Mill",
    "Mine",
    "Sawmill",
    "Shop",
    "Tavern",
    "Toll",
    "Tourney grounds",
    "Watchtower",
];

pub const SECRETS: &[&str] = &[
    "Cannibals",
    "Cultists",
    "Dopplegangers",
    "Inbred",
    "Murderers",
    "Lycanthropes/Vampires",
];

pub fn generate(ctx: &mut GenerationContext<'_>) -> HamletData {
    let name = settlement_name(ctx.dice);

    let main_building = pick(MAIN_BUILDINGS, ctx.dice.d12()).to_string();
    let peasant_houses = ctx.dice.d6().saturating_sub(1);
    let layout = roll_layout(ctx.dice);

    let secret = if ctx.dice.one_in(6) {
        let secret = pick(SECRETS, ctx.dice.d6());
        trace!(secret, "hamlet secret");
        Some(secret.to_string())
    } else {
        None
    };

    let descriptors = ctx.roll_descriptors();
    let disposition = roll_disposition(ctx.dice);

    HamletData {
        base: base(
            SettlementType::Hamlet,
            name.name,
            name.variations,
            disposition,
        ),
        main_building,
        peasant_houses,
        total_buildings: 1 + peasant_houses,
        layout,
        secret,
        descriptors,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::Hamlet(generate(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::WordTableDescriptors;
    use crate::core::dice::Dice;
    use crate::schema::common::{Disposition, Layout};

    fn hamlet_with(mut dice: Dice) -> HamletData {
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
        generate(&mut ctx)
    }

    #[test]
    fn minimum_rolls_give_a_lone_building() {
        let hamlet = hamlet_with(Dice::from_fn(|_| 1));
        assert_eq!(hamlet.peasant_houses, 0);
        assert_eq!(hamlet.total_buildings, 1);
        assert_eq!(hamlet.main_building, "Brewery/Vineyard");
        assert_eq!(hamlet.layout, Layout::Heap);
        assert_eq!(hamlet.secret.as_deref(), Some("Cannibals"));
        assert_eq!(hamlet.base.disposition, Disposition::AttackOnSight);
    }

    #[test]
    fn maximum_rolls_have_no_secret() {
        let hamlet = hamlet_with(Dice::from_fn(|sides| sides));
        assert_eq!(hamlet.peasant_houses, 5);
        assert_eq!(hamlet.total_buildings, 6);
        assert_eq!(hamlet.main_building, "Watchtower");
        assert_eq!(hamlet.secret, None);
        assert_eq!(hamlet.base.disposition, Disposition::Enthusiastic);
    }

    #[test]
    fn total_counts_main_building() {
        let mut dice = Dice::seeded(11);
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        for _ in 0..200 {
            let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
            let hamlet = generate(&mut ctx);
            assert!(hamlet.peasant_houses <= 5);
            assert_eq!(hamlet.total_buildings, hamlet.peasant_houses + 1);
            assert!(!hamlet.descriptors.description.is_empty());
        }
    }
}
