use tracing::trace;

use super::village::roll_guards;
use super::{base, owned, roll_event, GenerationContext};
use crate::core::dice::Dice;
use crate::core::disposition::{roll_disposition, roll_ruler_disposition};
use crate::core::names::settlement_name;
use crate::core::table::{pick, pick_band, roll_on, roll_repeatedly, Band};
use crate::schema::civilian::{
    CityData, CityDefense, CityPointsOfInterest, DescribedBuilding, DescribedLocation,
};
use crate::schema::common::SizeTier;
use crate::schema::settlement::{SettlementRecord, SettlementType};

/// Citizens per point of size multiplier.
pub const POPULATION_BASE: u32 = 500;

/// `d6` size bands: (tier, multiplier).
pub const SIZE_BANDS: [Band<(SizeTier, u32)>; 3] = [
    Band::new(1, 3, (SizeTier::Medium, 3)),
    Band::new(4, 5, (SizeTier::Small, 2)),
    Band::new(6, 6, (SizeTier::Big, 4)),
];

pub const OCCUPATIONS: &[&str] = &[
    "Brewing (breweries) or Viticulture (vineyard)",
    "Cattle breeding (farms, meadows)",
    "Farming crops (farms, fields)",
    "Fishing (fishery)",
    "Hunting (tannery)",
    "Logging (sawmills)",
    "Metallurgy (forge, foundry)",
    "Mining (mine)",
    "Pottery (pottery shop)",
    "Trading (caravanserai/port)",
];

pub const NOTHING: &str = "Nothing";

pub const CHARACTERISTICS: &[&str] = &[
    NOTHING, NOTHING, NOTHING, NOTHING, NOTHING, "Corrupt", "Crowded", "Destroyed", "Dry",
    "Filthy", "Holy city", "Humid", "Narrow", "Noisy", "Open", "Renowned", "Silent", "Tiered",
    "Unsafe", "Windy",
];

/// Characteristics wanted per city.
pub const CHARACTERISTIC_COUNT: usize = 2;
/// Rolls allowed to find them. Unlucky cities end up with fewer.
pub const CHARACTERISTIC_ATTEMPTS: u32 = 10;

pub const APPEARANCES: &[&str] = &[
    "Cluttered",
    "Cobblestone",
    "Colorful",
    "Covered with art",
    "Dark",
    "Eerie",
    "Flowers",
    "Geometric",
    "Huge windows",
    "Light",
    "Lots of canals",
    "Lots of stairs",
    "Misaligned buildings",
    "Red bricks",
    "Stark",
    "Tall towers",
    "White marble",
    "Wondrous",
    "Wooden",
];

pub const COLOR_SCHEMES: &[&str] = &[
    "Grayscale",
    "Black and white",
    "Blue and white",
    "Sand and terracotta",
];

pub const SPECIAL_LOCATIONS: &[&str] = &[
    "Abandoned building",
    "Aqueduct",
    "Archaeological site",
    "Bridge",
    "Burnt/Ruined building",
    "Calvary",
    "Carriage stop",
    "Construction site",
    "Famous street",
    "Fighting pit",
    "Fountain",
    "Gallows",
    "Junkyard",
    "Market hall",
    "Military cemetery",
    "Monument/Memorial",
    "Park",
    "Pilgrimage",
    "Plaza",
    "Slave pit",
];

pub const HOUSING: &[&str] = &[
    "Studio",
    "One bedroom apartment",
    "Two bedrooms apartment",
    "Bungalow",
    "Maisonnette",
    "Penthouse",
    "Mansion",
    "Hotel room",
    "Tower",
    "Boarding house",
    "Tent",
    "Houseboat",
    "Under a bridge",
    "Shanty",
    "Squat",
    "Underground bunker",
    "Caravan",
    "Treehouse",
    "Basement",
    "Hut",
];

/// Each business appears twice so a `d100` covers the table.
pub const BUSINESSES: &[&str] = &[
    "Alchemist", "Alchemist", "Animal trainer", "Animal trainer", "Apothecary", "Apothecary",
    "Armorer", "Armorer", "Artist", "Artist", "Astronomer", "Astronomer", "Baker", "Baker",
    "Bank", "Bank", "Blacksmith", "Blacksmith", "Bookmaker", "Bookmaker", "Botanist", "Botanist",
    "Brewery", "Brewery", "Brothel", "Brothel", "Butcher", "Butcher", "Candlemaker",
    "Candlemaker", "Candy shop", "Candy shop", "Carpenter", "Carpenter", "Cartographer",
    "Cartographer", "Casino", "Casino", "Cheesemaker", "Cheesemaker", "Doctor", "Doctor",
    "Dollmaker", "Dollmaker", "Florist", "Florist", "Fortuneteller", "Fortuneteller", "Foundry",
    "Foundry", "General store", "General store", "Glassblower", "Glassblower", "Hairdresser",
    "Hairdresser", "Hardware store", "Hardware store", "Jeweler", "Jeweler", "Lawyer", "Lawyer",
    "Locksmith", "Locksmith", "Pawnshop", "Pawnshop", "Perfumer", "Perfumer", "Pet shop",
    "Pet shop", "Potter", "Potter", "Restaurant", "Restaurant", "Sage", "Sage", "Sauna", "Sauna",
    "Scribe", "Scribe", "Siege engines seller", "Siege engines seller", "Slaughterhouse",
    "Slaughterhouse", "Stables", "Stables", "Tailor", "Tailor", "Tanner", "Tanner",
    "Tapestry maker", "Tapestry maker", "Tavern", "Tavern", "Tinker", "Tinker", "Veterinarian",
    "Veterinarian", "Wine shop", "Wine shop",
];

pub const OFFICIAL_BUILDINGS: &[&str] = &[
    "Arcane university",
    "Archives",
    "Asylum",
    "City hall",
    "Conservatory",
    "Dispensary",
    "Embassy",
    "Fire station",
    "Mayor office",
    "Meteorological institute",
    "Mint",
    "Palace",
    "Post office",
    "School",
    "Sewers",
    "Tax office",
    "Tourist office",
    "Tribunal",
    "University",
    "Water tower",
];

pub const RELIGIOUS_BUILDINGS: &[&str] = &[
    "Catacombs",
    "Cathedral",
    "Church",
    "Covent",
    "Mausoleum",
    "Monastery",
    "Necropolis",
    "Orphanage",
    "Sanctuary",
    "Seminar",
    "Shrine",
    "Ziggurat",
];

pub const PUBLIC_BUILDINGS: &[&str] = &[
    "Aquarium",
    "Arena",
    "Art gallery",
    "Auction hall",
    "Botanical garden",
    "Event center",
    "Gymnasium",
    "Historical building",
    "House for sale",
    "Hospital",
    "Library",
    "Morgue",
    "Museum",
    "Observatory",
    "Opera",
    "Guildhouse",
    "Public baths",
    "Theater",
    "Workshop",
    "Zoo",
];

pub const MILITARY_BUILDINGS: &[&str] = &[
    "Armory",
    "Barracks",
    "Canteen",
    "Citadel",
    "Fort",
    "Guard post",
    "Guard tower",
    "Jail",
    "Menagerie",
    "Military archives",
    "Military hospital",
    "Military school",
    "Military surplus",
    "Prison",
    "Recruitment center",
    "Siege workshop",
    "Spy academy",
    "Training hall",
    "Underground vault",
    "Warehouse",
];

/// Kinds of notable city building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingCategory {
    Housing,
    Business,
    Official,
    Religious,
    Public,
    Military,
}

pub const BUILDING_CATEGORY_BANDS: [Band<BuildingCategory>; 6] = [
    Band::new(1, 3, BuildingCategory::Housing),
    Band::new(4, 10, BuildingCategory::Business),
    Band::new(11, 13, BuildingCategory::Official),
    Band::new(14, 14, BuildingCategory::Religious),
    Band::new(15, 17, BuildingCategory::Public),
    Band::new(18, 20, BuildingCategory::Military),
];

impl BuildingCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Business => "Business",
            Self::Official => "Official",
            Self::Religious => "Religious",
            Self::Public => "Public",
            Self::Military => "Military",
        }
    }

    /// The category's table and the die rolled on it. Housing only rolls
    /// the regular city half of its table.
    fn table(&self) -> (&'static [&'static str], u32) {
        match self {
            Self::Housing => (HOUSING, 10),
            Self::Business => (BUSINESSES, 100),
            Self::Official => (OFFICIAL_BUILDINGS, 20),
            Self::Religious => (RELIGIOUS_BUILDINGS, 12),
            Self::Public => (PUBLIC_BUILDINGS, 20),
            Self::Military => (MILITARY_BUILDINGS, 20),
        }
    }

    /// Roll a specific building, e.g. `"Religious: Shrine"`.
    pub fn roll_building(&self, dice: &mut Dice) -> String {
        let (table, sides) = self.table();
        format!("{}: {}", self.label(), pick(table, dice.roll(sides)))
    }
}

pub const DIRECTIONS: &[&str] = &["North", "East", "South", "West"];
/// `d4` rerolls allowed per entrance before taking the first free direction.
pub const DIRECTION_ATTEMPTS: u32 = 10;

pub const ENTRANCE_BANDS: [Band<&str>; 3] = [
    Band::new(1, 3, "Wooden doors"),
    Band::new(4, 5, "Portcullis"),
    Band::new(6, 6, "Both"),
];

pub const RULERS: &[&str] = &[
    "Noble",
    "Noble",
    "Clergy",
    "Council",
    "Mayor",
    "Merchants' guild",
    "Thieves' guild",
    "Vampire",
];

pub const NOTABLE_NPCS: &[&str] = &[
    "Aggressive guard",
    "Annoying minstrel",
    "Bandit in disguise",
    "Beggar who knows a lot",
    "Clever orphan",
    "Corrupted official",
    "Curious waitress",
    "Distracted scholar",
    "Haughty nobleman",
    "Lonely widow",
    "Nervous tax collector",
    "Penniless merchant",
    "Princess on the run",
    "Retired mercenary",
    "Seasoned adventurer",
    "Shady diplomat",
    "Stubborn wizard",
    "Talented craftsman",
    "Traveler from a distant land",
    "Vampire/Werewolf hunter",
];

pub const EVENTS: &[&str] = &[
    "Announcement by a crier",
    "Assassination",
    "Ceremony (wedding, etc.)",
    "Disappearances",
    "Festival/Fair",
    "Fire",
    "Market day",
    "Plague",
    "Siege/Looting",
    "Tournament",
    "Vermin invasion",
    "Visit of a religious person",
];

/// Up to [`CHARACTERISTIC_ATTEMPTS`] `d20` rolls, keeping distinct
/// characteristics other than "Nothing" until two are found.
pub fn roll_characteristics(dice: &mut Dice) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::with_capacity(CHARACTERISTIC_COUNT);
    let mut attempts = 0;
    while found.len() < CHARACTERISTIC_COUNT && attempts < CHARACTERISTIC_ATTEMPTS {
        let characteristic = pick(CHARACTERISTICS, dice.d20());
        if characteristic != NOTHING && !found.contains(&characteristic) {
            found.push(characteristic);
        }
        attempts += 1;
    }
    found
}

pub fn roll_appearance(dice: &mut Dice) -> String {
    match dice.d20() {
        20 => format!(
            "Specific color scheme: {}",
            roll_on(dice, COLOR_SCHEMES)
        ),
        roll => pick(APPEARANCES, roll).to_string(),
    }
}

/// Pick a gate direction not used by `taken`: reroll a `d4` on duplicates,
/// then fall back to the first free direction.
pub fn roll_direction(dice: &mut Dice, taken: &[&'static str]) -> &'static str {
    let mut direction = roll_on(dice, DIRECTIONS);
    let mut attempts = 1;
    while taken.contains(&direction) && attempts < DIRECTION_ATTEMPTS {
        direction = roll_on(dice, DIRECTIONS);
        attempts += 1;
    }

    if taken.contains(&direction) {
        if let Some(free) = DIRECTIONS.iter().copied().find(|d| !taken.contains(d)) {
            trace!(rerolled = direction, chosen = free, "entrance direction fallback");
            direction = free;
        }
    }
    direction
}

fn roll_defense(dice: &mut Dice, size_multiplier: u32) -> CityDefense {
    let walled = dice.d2() == 1;
    let guards = roll_guards(dice, 5 * size_multiplier);

    if !walled {
        return CityDefense {
            walled,
            entrances: None,
            siege_supplies: None,
            guards,
        };
    }

    let mut taken: Vec<&'static str> = Vec::new();
    let mut entrances = Vec::new();
    for _ in 0..size_multiplier {
        let direction = roll_direction(dice, &taken);
        taken.push(direction);
        let kind = pick_band(&ENTRANCE_BANDS, dice.d6(), "Both");
        entrances.push(format!(
            "{} entrance: {} (guarded by 2 towers)",
            direction, kind
        ));
    }

    CityDefense {
        walled,
        entrances: Some(entrances),
        siege_supplies: Some(format!("{} months", dice.two_d6())),
        guards,
    }
}

pub fn generate(ctx: &mut GenerationContext<'_>) -> CityData {
    let name = settlement_name(ctx.dice);

    let (size, size_multiplier) =
        pick_band(&SIZE_BANDS, ctx.dice.d6(), (SizeTier::Small, 2));
    let population = size_multiplier * POPULATION_BASE;

    let occupations = roll_repeatedly(ctx.dice, OCCUPATIONS, 10, size_multiplier);
    let characteristics = roll_characteristics(ctx.dice);
    let appearance = roll_appearance(ctx.dice);

    let mut special = Vec::new();
    for _ in 0..size_multiplier {
        let location = pick(SPECIAL_LOCATIONS, ctx.dice.d20()).to_string();
        special.push(DescribedLocation {
            location,
            descriptors: ctx.roll_descriptors(),
        });
    }

    let mut buildings_of_interest = Vec::new();
    for _ in 0..size_multiplier * 3 {
        let category =
            pick_band(&BUILDING_CATEGORY_BANDS, ctx.dice.d20(), BuildingCategory::Military);
        let building = category.roll_building(ctx.dice);
        buildings_of_interest.push(DescribedBuilding {
            building,
            descriptors: ctx.roll_descriptors(),
        });
    }

    let dice = &mut *ctx.dice;
    let defense = roll_defense(dice, size_multiplier);

    let ruler = pick(RULERS, dice.d8());
    let disposition = roll_disposition(dice);
    let ruler_disposition = roll_ruler_disposition(disposition, dice);
    let notable_npcs = roll_repeatedly(dice, NOTABLE_NPCS, 20, size_multiplier);
    let events = roll_event(dice, EVENTS);

    CityData {
        base: base(
            SettlementType::City,
            name.name,
            name.variations,
            disposition,
        ),
        size,
        size_multiplier,
        population,
        occupations: owned(occupations),
        characteristics: owned(characteristics),
        appearance,
        points_of_interest: CityPointsOfInterest { special },
        buildings_of_interest,
        defense,
        ruler: ruler.to_string(),
        ruler_disposition,
        notable_npcs: owned(notable_npcs),
        events,
    }
}

pub fn build(ctx: &mut GenerationContext<'_>) -> SettlementRecord {
    SettlementRecord::City(generate(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::WordTableDescriptors;

    fn city_with(mut dice: Dice) -> CityData {
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
        generate(&mut ctx)
    }

    #[test]
    fn business_table_covers_a_d100() {
        assert_eq!(BUSINESSES.len(), 100);
        assert_eq!(CHARACTERISTICS.len(), 20);
        assert_eq!(
            CHARACTERISTICS.iter().filter(|c| **c == NOTHING).count(),
            5
        );
    }

    #[test]
    fn building_categories_by_band() {
        let category = |roll| pick_band(&BUILDING_CATEGORY_BANDS, roll, BuildingCategory::Military);
        assert_eq!(category(1), BuildingCategory::Housing);
        assert_eq!(category(4), BuildingCategory::Business);
        assert_eq!(category(10), BuildingCategory::Business);
        assert_eq!(category(11), BuildingCategory::Official);
        assert_eq!(category(14), BuildingCategory::Religious);
        assert_eq!(category(17), BuildingCategory::Public);
        assert_eq!(category(20), BuildingCategory::Military);
    }

    #[test]
    fn building_labels_prefix_category() {
        let mut dice = Dice::from_fn(|sides| sides);
        assert_eq!(
            BuildingCategory::Religious.roll_building(&mut dice),
            "Religious: Ziggurat"
        );
        assert_eq!(
            BuildingCategory::Housing.roll_building(&mut dice),
            "Housing: Boarding house"
        );
        assert_eq!(
            BuildingCategory::Business.roll_building(&mut dice),
            "Business: Wine shop"
        );
    }

    #[test]
    fn characteristics_give_up_after_ten_nothings() {
        let mut dice = Dice::from_fn(|_| 1);
        assert!(roll_characteristics(&mut dice).is_empty());
    }

    #[test]
    fn characteristics_stop_at_one_when_only_duplicates_follow() {
        let mut dice = Dice::from_fn(|_| 20);
        assert_eq!(roll_characteristics(&mut dice), vec!["Windy"]);
    }

    #[test]
    fn characteristics_collect_two_distinct() {
        let mut faces = [6, 6, 7].into_iter().chain(std::iter::repeat(1));
        let mut dice = Dice::from_fn(move |_| faces.next().unwrap_or(1));
        assert_eq!(roll_characteristics(&mut dice), vec!["Corrupt", "Crowded"]);
    }

    #[test]
    fn color_scheme_on_twenty() {
        let mut dice = Dice::from_fn(|sides| sides);
        assert_eq!(
            roll_appearance(&mut dice),
            "Specific color scheme: Sand and terracotta"
        );
    }

    #[test]
    fn direction_falls_back_when_dice_repeat() {
        let mut dice = Dice::from_fn(|_| 1);
        assert_eq!(roll_direction(&mut dice, &["North"]), "East");
        assert_eq!(roll_direction(&mut dice, &["North", "East"]), "South");
    }

    #[test]
    fn big_walled_city_uses_all_four_directions() {
        // every die shows 1 except the d6 size roll, which shows 6 (Big)
        let mut dice = Dice::from_fn(|sides| if sides == 6 { 6 } else { 1 });
        let defense = roll_defense(&mut dice, 4);
        assert!(defense.walled);
        let entrances = defense.entrances.unwrap();
        assert_eq!(entrances.len(), 4);
        for direction in DIRECTIONS {
            assert_eq!(
                entrances.iter().filter(|e| e.starts_with(*direction)).count(),
                1
            );
        }
        assert_eq!(
            entrances[0],
            "North entrance: Both (guarded by 2 towers)"
        );
        assert_eq!(defense.siege_supplies.as_deref(), Some("12 months"));
        assert_eq!(defense.guards, 80);
    }

    #[test]
    fn unwalled_city_has_no_entrances() {
        let mut dice = Dice::from_fn(|sides| sides);
        let defense = roll_defense(&mut dice, 2);
        assert!(!defense.walled);
        assert_eq!(defense.entrances, None);
        assert_eq!(defense.siege_supplies, None);
        assert_eq!(defense.guards, 60);
    }

    #[test]
    fn city_counts_follow_size() {
        let mut dice = Dice::seeded(8);
        let mut descriptors = WordTableDescriptors::embedded().unwrap();
        for _ in 0..100 {
            let mut ctx = GenerationContext::new(&mut dice, &mut descriptors);
            let city = generate(&mut ctx);
            let m = city.size_multiplier;
            assert!((2..=4).contains(&m));
            assert_eq!(city.population, m * POPULATION_BASE);
            assert_eq!(city.occupations.len() as u32, m);
            assert_eq!(city.points_of_interest.special.len() as u32, m);
            assert_eq!(city.buildings_of_interest.len() as u32, m * 3);
            assert_eq!(city.notable_npcs.len() as u32, m);
            assert!(city.characteristics.len() <= 2);
            assert!(!city.characteristics.iter().any(|c| c == NOTHING));
        }
    }

    #[test]
    fn minimum_rolls_make_a_medium_city() {
        let city = city_with(Dice::from_fn(|_| 1));
        assert_eq!(city.size, SizeTier::Medium);
        assert_eq!(city.population, 1500);
        assert!(city.characteristics.is_empty());
        assert_eq!(city.appearance, "Cluttered");
        assert!(city
            .buildings_of_interest
            .iter()
            .all(|b| b.building == "Housing: Studio"));
        assert!(city.defense.walled);
        assert_eq!(city.ruler, "Noble");
        assert!(city.events.is_some());
    }
}
