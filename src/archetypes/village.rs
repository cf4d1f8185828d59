use tracing::trace;

use super::{base, owned, roll_event, roll_layout, GenerationContext};
use crate::core::dice::Dice;
use crate::core::disposition::{roll_disposition, roll_ruler_disposition};
use crate::core::names::settlement_name;
use crate::core::table::{dedup_in_order, pick, pick_band, roll_repeatedly, Band};
use crate::schema::civilian::{VillageData, VillageDefense, VillagePointsOfInterest};
use crate::schema::common::SizeTier;
use crate::schema::settlement::{SettlementRecord, SettlementType};

/// Villagers per point of size multiplier.
pub const POPULATION_BASE: u32 = 50;

/// `d6` size bands: (tier, multiplier).
pub const SIZE_BANDS: [Band<(SizeTier, u32)>; 3] = [
    Band::new(1, 3, (SizeTier::Medium, 2)),
    Band::new(4, 5, (SizeTier::Small, 1)),
    Band::new(6, 6, (SizeTier::Big, 3)),
];

pub const DEFAULT_OCCUPATION: &str = "Farming and cattle breeding only";

pub const SPECIALIZED_OCCUPATIONS: &[&str] = &[
    "Brewing (breweries) or Viticulture (vineyards)",
    "Fishing (fisheries)",
    "Hunting (tanneries)",
    "Logging (sawmills)",
    "Mining (mines)",
    "Pottery (workshops)",
];

pub const GENERAL_LOCATIONS: &[&str] = &["Blacksmith", "Market", "Tavern", "Well"];

pub const SPECIAL_LOCATIONS: &[&str] = &[
    "Abandoned building",
    "Apothecary",
    "Bakery",
    "Burnt/Ruined building",
    "Butcher",
    "Castle-farm",
    "Church",
    "Famous person's house",
    "General store",
    "Graveyard",
    "Guard post",
    "Guildhouse",
    "Gypsy wagon",
    "Horse stables",
    "Library",
    "Mill",
    "Monument/Memorial",
    "Orchard",
    "School",
    "Tailor",
];

pub const DEFENSES: &[&str] = &[
    "Wooden palisade",
    "Wooden palisade",
    "Wooden palisade",
    "Motte (= mound)",
    "Motte (= mound)",
    "Chevaux de frise",
    "Moat (= trench)",
    "Watchtowers",
];

pub const RULERS: &[&str] = &[
    "Bandits",
    "Council",
    "Lycanthrope",
    "Mayor",
    "Merchant",
    "Priest",
    "Village elder",
    "Witch",
];

pub const NOTABLE_NPCS: &[&str] = &[
    "Aggressive guard",
    "Annoying minstrel",
    "Bandit in disguise",
    "Beggar who knows a lot",
    "Curious waitress",
    "Cute dog",
    "Frightened peasant",
    "Lonely widow",
    "Misunderstood witch",
    "Old fool/hag",
    "One-handed lumberjack",
    "Retired mercenary",
    "Seasoned adventurer",
    "Sick child",
    "Stubborn magician",
    "Talented craftsman",
    "Traveling merchant",
    "Troubled hunter",
    "Vampire/Werewolf hunter",
    "Village idiot",
];

pub const SECRETS: &[&str] = &[
    "Animals turned human",
    "Curse",
    "Elder god cult",
    "Eternal youth",
    "Hidden treasure",
    "Hiding outlaws",
    "Hivemind",
    "Inability to leave",
    "Pact with a demon",
    "Sadistic rituals",
    "Secret society",
    "Underground galleries",
];

pub const EVENTS: &[&str] = &[
    "Adventurers passing by",
    "Announcement by a crier",
    "Ceremony (wedding, etc.)",
    "Controlled by monsters",
    "Disappearances",
    "Famine",
    "Festival/Fair",
    "Fire",
    "Looting",
    "Market day",
    "Plague",
    "Visit of a notable (lord, etc.)",
];

/// Guards for a village or city: `(d3 + 3) x factor`.
pub(crate) fn roll_guards(dice: &mut Dice, factor: u32) -> u32 {
    (dice.d3() + 3) * factor
}

pub fn generate(ctx: &mut GenerationContext<'_>) -> VillageData {
    let name = settlement_name(ctx.dice);
    let dice = &mut *ctx.dice;

    let (size, size_multiplier) = pick_band(&SIZE_BANDS, dice.d6(), (SizeTier::Small, 1));
    let population = size_multiplier * POPULATION_BASE;

    let occupation = if dice.one_in(6) {
        pick(SPECIALIZED_OCCUPATIONS, dice.d6())
    } else {
        DEFAULT_OCCUPATION
    };

    let layout = roll_layout(dice);

    let special = roll_repeatedly(dice, SPECIAL_LOCATIONS, 20, size_multiplier);
    let features = dedup_in_order(roll_repeatedly(dice, DEFENSES, 8, size_multiplier));
    let guards = roll_guards(dice, size_multiplier);

    let ruler = pick(RULERS, dice.d8());
    let disposition = roll_disposition(dice);
    let ruler_disposition = roll_ruler_disposition(disposition, dice);

    let notable_npcs = roll_repeatedly(dice, NOTABLE_NPCS, 20, size_multiplier);

    let secret = if dice.one_in(6) {
        let secret = pick(SECRETS, dice.d12());
        trace!(secret, "village secret");
        Some(secret.to_string())
    } else {
        None
    };

    let events = roll_event(dice, EVENTS);

    VillageData {
        base: base(
            SettlementType::Village,
            name.name,
            name.variations,
            disposition,
        ),
        size,
        size_multiplier,
        population,
        occupation: occupation.to_string(),
        layout,
        points_of_interest: VillagePointsOfInterest {
            general: owned(GENERAL_LOCATIONS.iter().copied()),
            special: owned(special),
        },
        defense: VillageDefense {
            features: owned(features),
            guards,
        },
        ruler: ruler.to_string(),
        ruler_disposition,
        notable_npcs: owned(notable_npcs),
        secret,
        events,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::Village(generate(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::WordTableDescriptors;

    fn village_with(mut dice: Dice) -> VillageData {
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
        generate(&mut ctx)
    }

    #[test]
    fn size_bands() {
        assert_eq!(
            pick_band(&SIZE_BANDS, 1, (SizeTier::Small, 1)),
            (SizeTier::Medium, 2)
        );
        assert_eq!(
            pick_band(&SIZE_BANDS, 5, (SizeTier::Small, 1)),
            (SizeTier::Small, 1)
        );
        assert_eq!(
            pick_band(&SIZE_BANDS, 6, (SizeTier::Small, 1)),
            (SizeTier::Big, 3)
        );
    }

    #[test]
    fn big_village_from_maximum_rolls() {
        let village = village_with(Dice::from_fn(|sides| sides));
        assert_eq!(village.size, SizeTier::Big);
        assert_eq!(village.size_multiplier, 3);
        assert_eq!(village.population, 150);
        assert_eq!(village.occupation, DEFAULT_OCCUPATION);
        assert_eq!(village.points_of_interest.special.len(), 3);
        assert_eq!(village.defense.features, vec!["Watchtowers".to_string()]);
        assert_eq!(village.defense.guards, 18);
        assert_eq!(village.notable_npcs.len(), 3);
        assert_eq!(village.secret, None);
        assert_eq!(village.events, None);
    }

    #[test]
    fn medium_village_from_minimum_rolls() {
        let village = village_with(Dice::from_fn(|_| 1));
        assert_eq!(village.size, SizeTier::Medium);
        assert_eq!(village.population, 100);
        assert_eq!(village.occupation, SPECIALIZED_OCCUPATIONS[0]);
        assert_eq!(village.defense.features, vec!["Wooden palisade".to_string()]);
        assert_eq!(village.defense.guards, 8);
        assert_eq!(village.ruler, "Bandits");
        assert_eq!(village.secret.as_deref(), Some("Animals turned human"));
        assert!(village.events.is_some());
    }

    #[test]
    fn general_locations_are_fixed() {
        let village = village_with(Dice::seeded(5));
        assert_eq!(
            village.points_of_interest.general,
            vec!["Blacksmith", "Market", "Tavern", "Well"]
        );
    }

    #[test]
    fn population_tracks_multiplier() {
        let mut dice = Dice::seeded(21);
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        for _ in 0..200 {
            let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
            let village = generate(&mut ctx);
            assert_eq!(village.population, village.size_multiplier * POPULATION_BASE);
            assert_eq!(
                village.notable_npcs.len() as u32,
                village.size_multiplier
            );
            assert!(village.defense.features.len() as u32 <= village.size_multiplier);
            let guards_per_size = village.defense.guards / village.size_multiplier;
            assert!((4..=6).contains(&guards_per_size));
        }
    }
}
