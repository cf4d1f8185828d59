use super::{base, owned, GenerationContext};
use crate::core::dice::Dice;
use crate::core::disposition::roll_disposition;
use crate::core::names::settlement_name;
use crate::core::table::{dedup_in_order, pick, pick_band, roll_repeatedly, Band};
use crate::schema::class_related::{
    Inhabitants, LevelUsage, TowerAppearance, TowerData, TowerLevels,
};
use crate::schema::settlement::{SettlementRecord, SettlementType};

/// Ground, top and at least one floor in between.
pub const MIN_TOTAL_LEVELS: u32 = 3;

/// `d12` underground level count.
pub const UNDERGROUND_BANDS: [Band<u32>; 4] = [
    Band::new(7, 8, 1),
    Band::new(9, 10, 2),
    Band::new(11, 11, 3),
    Band::new(12, 12, 4),
];

pub const CONNECTIONS: &[&str] = &[
    "Staircase",
    "Staircase",
    "Staircase",
    "Spiral staircase",
    "Spiral staircase",
    "Spiral staircase",
    "Ladder",
    "Ladder",
    "Elevator",
    "Elevator",
    "Magic elevator",
    "Teleportation portals",
];

pub const MATERIALS: &[&str] = &[
    "Cobblestone",
    "Cobblestone",
    "Cobblestone",
    "Cobblestone",
    "Cobblestone",
    "Wood",
    "Wood",
    "Wood",
    "Wood",
    "Wood",
    "Bricks",
    "Bricks",
    "Bricks",
    "Sandstone",
    "Sandstone",
    "Sandstone",
    "Limestone",
    "Limestone",
    "Marble",
    "Metal",
];

pub const SHAPES: &[&str] = &[
    "Square",
    "Square",
    "Square",
    "Square",
    "Square",
    "Round",
    "Round",
    "Round",
    "Round",
    "Round",
    "Conical",
    "Conical",
    "Conical",
    "Tilted",
    "Tilted",
    "Tilted",
    "Asymmetrical",
    "S-shaped",
    "Stacked",
    "Twisted",
];

pub const NOTHING: &str = "Nothing";

pub const DETAILS: &[&str] = &[
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    "Balcony",
    "Banners",
    "Battlements",
    "Climbing plants",
    "Flags",
    "Moldings",
    "Porch",
    "Stained glass",
    "Statues/Gargoyles",
    "Turrets",
];

pub const INSIDE_APPEARANCES: &[&str] = &[
    "Colorful",
    "Cozy",
    "Dark",
    "Dusty",
    "Extravagant",
    "Luxurious",
    "Moldy",
    "Old fashioned",
    "Stark",
    "Well decorated",
];

pub const SPECIAL_EQUIPMENT: &[&str] = &[
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    NOTHING,
    "Acoustic tube",
    "Alarm system",
    "Dumbwaiter",
    "Emergency ladder/stairs",
    "Garbage chute",
    "Oversized pet doors",
    "Pneumatic tubes",
    "Secret passage",
    "Slide",
    "Ventilation system",
];

pub const GROUND_LEVEL: &[&str] = &[
    "Empty and dusty",
    "Fortified room",
    "Hallway",
    "Reception desk",
    "Ruined room",
    "Shop/Tavern",
    "Trapped room",
    "Unloading room",
];

pub const ABOVEGROUND_LEVELS: &[&str] = &[
    "Abandoned/Cursed level",
    "Archives",
    "Armory",
    "Bedroom(s)",
    "Kitchen and dining room",
    "Laboratory",
    "Library",
    "Meeting room",
    "Museum",
    "Music room/Art room",
    "Office/Study",
    "Storage room",
];

pub const TOP_LEVEL: &[&str] = &[
    "Aviary",
    "Beacon",
    "Duel platform",
    "Foghorn",
    "Golden apple tree",
    "Greenhouse",
    "High security prison",
    "Landing platform",
    "Lightning rod",
    "Lookout post",
    "Magic searchlight",
    "Monster nest",
    "Observatory",
    "Panic room",
    "Ruined/Overgrown",
    "Siege engine",
    "Throne room",
    "Treasure room",
    "Weather station",
    "Windmill",
];

pub const UNDERGROUND_LEVELS: &[&str] = &[
    "Abandoned/Cursed level",
    "Alchemy lab",
    "Cellar",
    "Chapel",
    "Forge",
    "Menagerie",
    "Mushroom cave",
    "Prison",
    "Rituals room",
    "Storage",
    "Torture room",
    "Wine cellar",
];

pub const BOTTOM_LEVEL: &[&str] = &[
    "Abyss",
    "Ancient ruins",
    "Arena",
    "Boudoir",
    "Creature mouth",
    "Excavation site",
    "Flesh pit",
    "Flooded pit",
    "Gambling den",
    "Magic portal",
    "Magic well",
    "Mine",
    "Oubliette",
    "Tunnel to the center of the planet",
    "Secret society headquarters",
    "Tomb",
    "Tunnel to a lair",
    "Tunnel to the surface",
    "Vault",
    "Well",
];

/// Level counts from two `d12` rolls.
pub fn roll_levels(dice: &mut Dice) -> TowerLevels {
    let aboveground = dice.d12();
    let underground = pick_band(&UNDERGROUND_BANDS, dice.d12(), 0);
    let has_bottom = underground > 0;
    let total = (aboveground + underground + 1 + u32::from(has_bottom)).max(MIN_TOTAL_LEVELS);

    TowerLevels {
        aboveground,
        underground,
        total,
        has_bottom,
    }
}

/// `d3` rolls of `d20` on a table padded with "Nothing"; keeps the distinct
/// real entries.
fn roll_extras(dice: &mut Dice, table: &[&'static str]) -> Vec<String> {
    let count = dice.d3();
    let rolled = roll_repeatedly(dice, table, 20, count)
        .into_iter()
        .filter(|entry| *entry != NOTHING);
    owned(dedup_in_order(rolled))
}

fn roll_level_usage(dice: &mut Dice, levels: &TowerLevels) -> LevelUsage {
    let ground = pick(GROUND_LEVEL, dice.d8()).to_string();
    let top = pick(TOP_LEVEL, dice.d20()).to_string();
    let aboveground = owned(roll_repeatedly(
        dice,
        ABOVEGROUND_LEVELS,
        12,
        levels.aboveground,
    ));

    let underground = (levels.underground > 0)
        .then(|| owned(roll_repeatedly(dice, UNDERGROUND_LEVELS, 12, levels.underground)));
    let bottom = levels
        .has_bottom
        .then(|| pick(BOTTOM_LEVEL, dice.d20()).to_string());

    LevelUsage {
        ground,
        aboveground,
        top,
        underground,
        bottom,
    }
}

fn roll_inhabitants(dice: &mut Dice) -> Inhabitants {
    let wizard_level = dice.d12() + 8;
    let apprentice_level = dice.one_in(4).then(|| dice.d6());
    Inhabitants {
        wizard_level,
        apprentice_level,
    }
}

pub fn generate(ctx: &mut GenerationContext<'_>) -> TowerData {
    let dice = &mut *ctx.dice;
    let name = settlement_name(dice);

    let levels = roll_levels(dice);
    let connection = pick(CONNECTIONS, dice.d12()).to_string();

    let appearance = TowerAppearance {
        material: pick(MATERIALS, dice.d20()).to_string(),
        shape: pick(SHAPES, dice.d20()).to_string(),
        details: roll_extras(dice, DETAILS),
    };
    let inside_appearance = pick(INSIDE_APPEARANCES, dice.d10()).to_string();
    let special_equipment = roll_extras(dice, SPECIAL_EQUIPMENT);

    let level_usage = roll_level_usage(dice, &levels);
    let inhabitants = roll_inhabitants(dice);
    let disposition = roll_disposition(dice);

    TowerData {
        base: base(
            SettlementType::Tower,
            name.name,
            name.variations,
            disposition,
        ),
        levels,
        connection,
        appearance,
        inside_appearance,
        special_equipment,
        level_usage,
        inhabitants,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::Tower(generate(ctx))
}
