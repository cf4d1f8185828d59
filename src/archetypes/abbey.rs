use tracing::trace;

use super::{base, owned, roll_event, GenerationContext};
use crate::core::dice::Dice;
use crate::core::disposition::roll_disposition;
use crate::core::names::{abbey_name, roll_saint};
use crate::core::table::{dedup_in_order, pick, pick_band, roll_on, roll_repeatedly, Band};
use crate::schema::class_related::{
    AbbeyData, AbbeyPopulation, AbbeySize, Activities, AdditionalLocations, StructureAndLand,
};
use crate::schema::settlement::{SettlementRecord, SettlementType};

pub const PROTECTION: &str = "Stone wall with large gate";
pub const OUTSIDE_WALLS: &str = "Fields and farming buildings (barns, mills, etc.)";

pub const HECTARES_PER_ACRE: f64 = 0.4047;

pub const CORE_LOCATIONS: &[&str] = &[
    "Abbot's room",
    "Cellars",
    "Cemetery",
    "Church",
    "Cloisters and garden",
    "Infirmary",
    "Kitchen and refectory",
    "Monks cells",
    "Necessarium (latrines)",
    "Servants, laborers and tradesmen quarters",
    "Storehouses",
];

pub const GARDENS: &[&str] = &[
    "Flower garden",
    "Fountain",
    "Kitchen garden",
    "Physic garden (medicine)",
];

pub const INFIRMARY_ROOMS: &[&str] = &[
    "Bloodletting & purging room",
    "Drugstore",
    "Physician's residence",
    "Room for critical patients",
];

pub const RELIGIOUS_ROOMS: &[&str] = &[
    "Chapter house (for meetings)",
    "Parlour",
    "School",
    "Scriptorium and library",
];

pub const OTHER_LOCATIONS: &[&str] = &[
    "Abbot's gateway",
    "Barns and stables",
    "Guest rooms",
    "Vestarium (clothing storage)",
    "Washhouse",
    "Watchtower",
];

/// Distinct farming rolls attempted per abbey.
pub const FARMING_ROLLS: u32 = 2;

pub const FARMING: &[&str] = &[
    "Barley (beer)",
    "Chickens (meat)",
    "Cotton",
    "Cows (meat, milk and cheese)",
    "Goats (meat, milk and cheese)",
    "Grapes (wine)",
    "Hops (beer)",
    "Orchard (fruits and preserves)",
    "Pigs (meat)",
    "Sheeps (meat and wool)",
    "Vegetables",
    "Wheat (flour and bread)",
];

pub const WORKSHOPS: &[&str] = &[
    "Candle makers",
    "Cutlers",
    "Potters",
    "Shoemakers",
    "Smiths",
    "Tanners",
];

pub const OTHER_ACTIVITIES: &[&str] = &[
    "Bee keeping",
    "Bookshop",
    "Catering",
    "Copy & translation",
    "Exorcism",
    "Guided tour",
];

/// Fame rolls above this go to the religious artifact table.
pub const FAME_REASON_MAX: u32 = 11;

pub const FAME_REASONS: &[&str] = &[
    "Age",
    "Architecture",
    "Cattle baptism",
    "Curative (hot) springs",
    "Domain and landscapes",
    "Grave of well known bishop",
    "Key religious celebration",
    "Meals served to travelers",
    "Pilgrimage",
    "Power",
    "Quality of products",
];

pub const RELIC: &str = "Relic";

pub const ARTIFACTS: &[&str] = &[
    "Ancient parchment",
    "Art piece",
    "Crown",
    "Holy sword",
    "Precious book",
    RELIC,
];

pub const RELIC_PARTS: &[&str] = &[
    "Arm",
    "Blood",
    "Bones (vertebra, phalanx)",
    "Eye",
    "Flesh",
    "Head",
    "Heart",
    "Item that killed the saint",
    "Leg",
    "Piece of clothing",
    "Prayer book",
    "Religious symbol",
    "Ring",
    "Sandals",
    "Scalp",
    "Shroud",
    "Skin",
    "Tongue",
    "Tooth",
    "Walking stick",
];

/// `d20` spell level held by a relic.
pub const SPELL_LEVEL_BANDS: [Band<u32>; 5] = [
    Band::new(1, 8, 1),
    Band::new(9, 14, 2),
    Band::new(15, 17, 3),
    Band::new(18, 19, 4),
    Band::new(20, 20, 5),
];

pub const HISTORIES: &[&str] = &[
    "Abandoned then used again",
    "Changed confession",
    "Claimed its autonomy",
    "Destroyed then rebuilt",
    "Founded 2d10 x10 years ago",
    "Has seen better days",
    "Only one original building remains",
    "Sponsored by a rich patron",
    "Started as a knight hermitage",
    "Used to be a boarding school",
    "Was relocated",
    "Was under a spell",
];

pub const EVENTS: &[&str] = &[
    "Broken device",
    "Cowls shrunken/dyed in red",
    "Demonic corruption",
    "Disappearance of the abbot",
    "Drought/Flood",
    "Festival/Fair",
    "Fire",
    "Looting",
    "Moles/Rats infestation",
    "Plague",
    "Scandal",
    "Visit of a notable person",
];

fn roll_size(dice: &mut Dice) -> AbbeySize {
    if dice.d6() == 6 {
        AbbeySize::Major
    } else {
        AbbeySize::Small
    }
}

pub fn roll_population(dice: &mut Dice, size: AbbeySize) -> AbbeyPopulation {
    match size {
        AbbeySize::Small => {
            let monks_nuns = dice.d4() * 10 + 20;
            let abbot_level = if monks_nuns >= 50 { 10 } else { 9 };
            AbbeyPopulation {
                monks_nuns,
                abbot_level,
            }
        }
        AbbeySize::Major => {
            let monks_nuns = dice.d24() * 10 + 90;
            AbbeyPopulation {
                monks_nuns,
                abbot_level: 9 + monks_nuns / 100,
            }
        }
    }
}

/// "3 acres (= 1.2 ha)"
pub fn area_within_walls(acres: u32) -> String {
    format!(
        "{} acres (= {:.1} ha)",
        acres,
        f64::from(acres) * HECTARES_PER_ACRE
    )
}

fn roll_relic(dice: &mut Dice) -> String {
    let part = pick(RELIC_PARTS, dice.d20());
    let saint = roll_saint(dice);
    let spell_level = pick_band(&SPELL_LEVEL_BANDS, dice.d20(), 1);
    format!(
        "Relic: {} of Saint {} (contains Level {} spell, usable once per week)",
        part, saint, spell_level
    )
}

/// Why a major abbey is known: a plain reason or a religious artifact.
pub fn roll_fame(dice: &mut Dice) -> String {
    let roll = dice.d20();
    if roll <= FAME_REASON_MAX {
        return pick(FAME_REASONS, roll).to_string();
    }

    let artifact = pick(ARTIFACTS, dice.d6());
    let fame = if artifact == RELIC {
        roll_relic(dice)
    } else {
        format!("Religious artifact: {}", artifact)
    };
    trace!(%fame, "abbey artifact");
    fame
}

pub fn generate(ctx: &mut GenerationContext<'_>) -> AbbeyData {
    let dice = &mut *ctx.dice;
    let name = abbey_name(dice);

    let abbey_size = roll_size(dice);
    let abbey_population = roll_population(dice, abbey_size);

    let structure_and_land = StructureAndLand {
        protection: PROTECTION.to_string(),
        outside_walls: OUTSIDE_WALLS.to_string(),
        area_within_walls: area_within_walls(dice.d2() + 2),
    };

    let additional_locations = AdditionalLocations {
        garden: vec![roll_on(dice, GARDENS).to_string()],
        infirmary: vec![roll_on(dice, INFIRMARY_ROOMS).to_string()],
        religious: vec![roll_on(dice, RELIGIOUS_ROOMS).to_string()],
        other: vec![roll_on(dice, OTHER_LOCATIONS).to_string()],
    };

    let farming = dedup_in_order(roll_repeatedly(dice, FARMING, 12, FARMING_ROLLS));
    let activities = Activities {
        farming: owned(farming),
        workshop: vec![pick(WORKSHOPS, dice.d6()).to_string()],
        other: vec![pick(OTHER_ACTIVITIES, dice.d6()).to_string()],
    };

    let fame = match abbey_size {
        AbbeySize::Major => Some(roll_fame(dice)),
        AbbeySize::Small => None,
    };

    let history = pick(HISTORIES, dice.d12()).to_string();
    let events = roll_event(dice, EVENTS);
    let disposition = roll_disposition(dice);

    AbbeyData {
        base: base(
            SettlementType::Abbey,
            name.clone(),
            vec![name],
            disposition,
        ),
        abbey_size,
        abbey_population,
        structure_and_land,
        core_locations: owned(CORE_LOCATIONS.iter().copied()),
        additional_locations,
        activities,
        fame,
        history,
        events,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::Abbey(generate(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::WordTableDescriptors;

    fn abbey_with(mut dice: Dice) -> AbbeyData {
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
        generate(&mut ctx)
    }

    #[test]
    fn spell_levels_follow_cumulative_thresholds() {
        let level = |roll| pick_band(&SPELL_LEVEL_BANDS, roll, 1);
        assert_eq!(level(1), 1);
        assert_eq!(level(8), 1);
        assert_eq!(level(9), 2);
        assert_eq!(level(14), 2);
        assert_eq!(level(17), 3);
        assert_eq!(level(19), 4);
        assert_eq!(level(20), 5);
    }

    #[test]
    fn small_abbot_levels_up_at_fifty() {
        let mut dice = Dice::from_fn(|_| 3);
        let population = roll_population(&mut dice, AbbeySize::Small);
        assert_eq!(population.monks_nuns, 50);
        assert_eq!(population.abbot_level, 10);

        let mut dice = Dice::from_fn(|_| 2);
        let population = roll_population(&mut dice, AbbeySize::Small);
        assert_eq!(population.monks_nuns, 40);
        assert_eq!(population.abbot_level, 9);
    }

    #[test]
    fn area_is_reported_in_both_units() {
        assert_eq!(area_within_walls(3), "3 acres (= 1.2 ha)");
        assert_eq!(area_within_walls(4), "4 acres (= 1.6 ha)");
    }

    #[test]
    fn plain_fame_reason() {
        let mut dice = Dice::from_fn(|_| 4);
        assert_eq!(roll_fame(&mut dice), "Curative (hot) springs");
    }

    #[test]
    fn non_relic_artifact() {
        let mut dice = Dice::from_fn(|sides| if sides == 20 { 15 } else { 4 });
        assert_eq!(roll_fame(&mut dice), "Religious artifact: Holy sword");
    }

    #[test]
    fn major_abbey_with_a_relic() {
        let abbey = abbey_with(Dice::from_fn(|sides| sides));
        assert_eq!(abbey.base.name, "Abbey of Saint-Victor");
        assert_eq!(abbey.base.name_variations, vec!["Abbey of Saint-Victor"]);
        assert_eq!(abbey.abbey_size, AbbeySize::Major);
        assert_eq!(abbey.abbey_population.monks_nuns, 330);
        assert_eq!(abbey.abbey_population.abbot_level, 12);
        assert_eq!(
            abbey.fame.as_deref(),
            Some("Relic: Walking stick of Saint Victor (contains Level 5 spell, usable once per week)")
        );
        assert_eq!(abbey.history, "Was under a spell");
        assert_eq!(abbey.events, None);
    }

    #[test]
    fn small_abbey_has_no_fame() {
        let abbey = abbey_with(Dice::from_fn(|_| 1));
        assert_eq!(abbey.abbey_size, AbbeySize::Small);
        assert_eq!(abbey.abbey_population.monks_nuns, 30);
        assert_eq!(abbey.abbey_population.abbot_level, 9);
        assert_eq!(abbey.fame, None);
        assert_eq!(abbey.structure_and_land.area_within_walls, "3 acres (= 1.2 ha)");
        assert_eq!(abbey.activities.farming, vec!["Barley (beer)"]);
        assert_eq!(abbey.core_locations.len(), 11);
        assert!(abbey.events.is_some());
    }

    #[test]
    fn population_bounds_by_size() {
        let mut dice = Dice::seeded(8);
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        for _ in 0..200 {
            let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
            let abbey = generate(&mut ctx);
            let population = &abbey.abbey_population;
            match abbey.abbey_size {
                AbbeySize::Small => {
                    assert!((30..=60).contains(&population.monks_nuns));
                    assert!(abbey.fame.is_none());
                }
                AbbeySize::Major => {
                    assert!((100..=330).contains(&population.monks_nuns));
                    assert_eq!(population.abbot_level, 9 + population.monks_nuns / 100);
                    assert!(abbey.fame.is_some());
                }
            }
            assert!(!abbey.activities.farming.is_empty());
            assert!(abbey.activities.farming.len() <= 2);
        }
    }
}
