use tracing::trace;

use super::{base, owned, roll_event, GenerationContext};
use crate::core::dice::Dice;
use crate::core::disposition::roll_disposition;
use crate::core::names::castle_name;
use crate::core::table::{dedup_in_order, pick, roll_repeatedly};
use crate::schema::class_related::{
    CastleData, CastleDefenses, Gatehouse, Garrison, Jails, Keep, Treasure, Walls,
};
use crate::schema::settlement::{SettlementRecord, SettlementType};

pub const CONDITIONS: &[&str] = &["Perfect", "Worn", "Worn", "Aged", "Aged", "Crumbling"];

pub const KEEP_SHAPES: &[&str] = &[
    "Square/Rectangle",
    "Square/Rectangle",
    "Square/Rectangle",
    "Round",
    "Round",
    "Shell (= hollow cylinder)",
];

pub const NONE: &str = "None";

pub const DEFENSIVE_FEATURES: &[&str] = &[
    NONE,
    NONE,
    NONE,
    NONE,
    NONE,
    NONE,
    "Ballista",
    "Boiling oil",
    "Catapult",
    "Hoarding",
    "Iron spikes",
    "Piles of rocks",
];

pub const NON_DEFENSIVE_FEATURES: &[&str] = &[
    NONE,
    NONE,
    NONE,
    NONE,
    NONE,
    NONE,
    "Banners/Flags",
    "Gargoyles",
    "Heads/Bodies",
    "Overgrown",
    "Religious symbols",
    "Secret passage",
];

pub const STONE_WALLS: &str = "Stone walls and towers";
pub const MOAT: &str = "Moat (= trench)";

pub const DEFENSES: &[&str] = &[
    STONE_WALLS,
    STONE_WALLS,
    STONE_WALLS,
    MOAT,
    "Motte (= mound)",
    "Wooden palisade",
];

/// Wall shapes and their tower counts. `None` means `d3 + 3` towers.
pub const WALL_SHAPES: &[(&str, Option<u32>)] = &[
    ("Square/Rectangle", Some(4)),
    ("Trapezium", Some(4)),
    ("Pentagon", Some(5)),
    ("Hexagon", Some(6)),
    ("Octagon", Some(8)),
    ("Star", Some(10)),
    ("Cross", Some(12)),
    ("Circle", None),
];

pub const TOWER_SHAPES: &[&str] = &[
    "Square",
    "Square",
    "Square",
    "Round",
    "Round",
    "Polygonal (3, 6 or 8 sides)",
];

pub const GATEHOUSE_CLOSURES: &[&str] = &[
    "Portcullis and wooden door",
    "Portcullis and wooden door",
    "Portcullis and wooden door",
    "Drawbridge",
    "Drawbridge",
    "Both",
];

pub const GATEHOUSE_TOWERS: u32 = 2;

pub const MOAT_ENCOUNTERS: &[&str] = &[
    "Nothing",
    "Nothing",
    "Nothing",
    "Nothing",
    "Crocodiles",
    "Electric eels",
    "Leeches",
    "Piranha",
];

/// Lord's personal guard, always the same size.
pub const BODYGUARDS: u32 = 6;

/// Garrison shares in percent: heavy cavaliers, medium cavaliers (spear),
/// medium cavaliers (bow), footmen (sword), footmen (polearm),
/// footmen (crossbow), footmen (longbow).
pub const GARRISON_SHARES: [u32; 7] = [10, 10, 10, 40, 10, 10, 10];

pub const EVENTS: &[&str] = &[
    "Assassination",
    "Big HD monster attack",
    "Ceremony (wedding, etc.)",
    "Festival/Fair",
    "Fire",
    "Plague",
    "Resources/Gold dwindling",
    "Rival lord scouting",
    "Small HD monsters wanting to establish a lair nearby",
    "Siege/Looting",
    "Tournament",
    "Visit of a notable person",
];

/// Five independent `d100` gates.
pub fn roll_treasure(dice: &mut Dice) -> Treasure {
    let mut treasure = Treasure::default();

    if dice.percent(50) {
        treasure.gold = Some(dice.d4() * 10_000);
    }
    if dice.percent(50) {
        treasure.additional_gold = Some(dice.d6() * 5_000);
    }
    if dice.percent(25) {
        treasure.gems = Some(dice.three_d6());
    }
    if dice.percent(25) {
        treasure.jewelry = Some(dice.d10());
    }
    if dice.percent(15) {
        treasure.magic_items = Some(4);
        treasure.scrolls = Some(dice.d6());
    }

    trace!(?treasure, "castle treasure");
    treasure
}

/// Lord level and troop split for `total_fighters`.
pub fn garrison_for(total_fighters: u32) -> Garrison {
    let lord_level = 9 + total_fighters / 60;
    let [heavy, spear, bow, sword, polearm, crossbow, longbow] =
        GARRISON_SHARES.map(|percent| total_fighters * percent / 100);

    Garrison {
        total_fighters,
        lord_level,
        lieutenant_level: lord_level - 2,
        bodyguard_level: lord_level - 3,
        bodyguards: BODYGUARDS,
        cavaliers_heavy: heavy,
        cavaliers_medium_spear: spear,
        cavaliers_medium_bow: bow,
        footmen_sword: sword,
        footmen_polearm: polearm,
        footmen_crossbow: crossbow,
        footmen_longbow: longbow,
    }
}

fn roll_walls(dice: &mut Dice) -> Walls {
    let (shape, towers) = pick(WALL_SHAPES, dice.d8());
    let towers = towers.unwrap_or_else(|| dice.d3() + 3);
    Walls {
        shape: shape.to_string(),
        towers,
        tower_shape: pick(TOWER_SHAPES, dice.d6()).to_string(),
        defensive_feature: pick(DEFENSIVE_FEATURES, dice.d12()).to_string(),
        non_defensive_feature: pick(NON_DEFENSIVE_FEATURES, dice.d12()).to_string(),
    }
}

fn roll_defenses(dice: &mut Dice) -> CastleDefenses {
    let count = dice.d4();
    let features = dedup_in_order(roll_repeatedly(dice, DEFENSES, 6, count));

    let total_fighters = dice.three_d6() * 10;
    let garrison = garrison_for(total_fighters);

    let (walls, gatehouse) = if features.contains(&STONE_WALLS) {
        let walls = roll_walls(dice);
        let gatehouse = Gatehouse {
            closure: pick(GATEHOUSE_CLOSURES, dice.d6()).to_string(),
            towers: GATEHOUSE_TOWERS,
        };
        (Some(walls), Some(gatehouse))
    } else {
        (None, None)
    };

    let moat_encounter = features
        .contains(&MOAT)
        .then(|| pick(MOAT_ENCOUNTERS, dice.d8()).to_string());

    CastleDefenses {
        features: owned(features),
        walls,
        gatehouse,
        moat_encounter,
        garrison,
    }
}

pub fn generate(ctx: &mut GenerationContext<'_>) -> CastleData {
    let dice = &mut *ctx.dice;
    let name = castle_name(dice);

    let condition = pick(CONDITIONS, dice.d6()).to_string();

    let keep = Keep {
        shape: pick(KEEP_SHAPES, dice.d6()).to_string(),
        levels: dice.d3() + 1,
        defensive_feature: pick(DEFENSIVE_FEATURES, dice.d12()).to_string(),
        non_defensive_feature: pick(NON_DEFENSIVE_FEATURES, dice.d12()).to_string(),
        jails: Jails {
            commoners: dice.two_d6(),
            nobles: dice.d3(),
        },
        siege_supplies: dice.two_d6(),
        treasure: roll_treasure(dice),
    };

    let defenses = roll_defenses(dice);
    let events = roll_event(dice, EVENTS);
    let disposition = roll_disposition(dice);

    CastleData {
        base: base(
            SettlementType::Castle,
            name.clone(),
            vec![name],
            disposition,
        ),
        condition,
        keep,
        defenses,
        events,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::Castle(generate(ctx))
}
