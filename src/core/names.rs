/// Settlement name synthesis from structure templates.
///
/// A structure template such as `"BHF"` or `"D-in-D"` names the word tables
/// to roll on with the codes `A` through `H`. Each code rolls one word and
/// the words are joined with single spaces. Any other character in a
/// template is skipped.
use crate::core::dice::Dice;
use crate::core::table::pick;

pub const STRUCTURE_TEMPLATES: &[&str] = &[
    "BA", "BF", "BHF", "BH", "CA", "CF", "CH", "D", "DA", "DF", "DH", "D-by-sea", "D-in-D",
    "D-le-D", "D-les-bains", "D-on-the-Nisme-on-the-hill", "Dington", "Dsby", "Dthorpe", "Dton",
    "EA", "EB", "ED", "EF", "EH", "GB", "GD", "Trou-au-D", "Trou-de-D", "Val-D",
];

pub const BUILDINGS_OUTDOORS: &[&str] = &[
    "Abbey", "Arch", "Bank", "Barrack", "Bench", "Bridge", "Castle", "Chapel", "Church", "Court",
    "Cross", "Farm", "Forge", "Gate", "Hall", "Home", "Hospital", "House", "Inn", "Mall", "Market",
    "Mill", "Mine", "Post", "Road", "Stall", "Temple", "Tower", "Union", "Wall",
];

pub const NOUNS: &[&str] = &[
    "Acorn", "Angel", "Apple", "Atelier", "Autumn", "Axe", "Baker", "Bard", "Baron", "Barrow",
    "Berry", "Birch", "Bird", "Boar", "Book", "Bow", "Butcher", "Candle", "Cheese", "Cloud",
    "Corn", "Cow", "Crow", "Dawn", "Day", "Deer", "Demon", "Dragon", "Dream", "Dusk", "Dust",
    "Dwarf", "Eagle", "Elf", "Feather", "Fire", "Fish", "Flower", "Fog", "Fox", "Frog", "Ghost",
    "Gnoll", "Goblin", "Grave", "Halfling", "Hare", "Hawk", "Heaven", "Hell", "Hook", "Hope",
    "Horn", "Horse", "Hunter", "Knight", "Kobold", "Leaf", "Letter", "Lion", "Mage", "Moon",
    "Night", "Oak", "Orchid", "Pine", "Pork", "Rabbit", "Rain", "Ram", "River", "Robin", "Rose",
    "Salt", "Seed", "Sky", "Snake", "Snow", "Sorrow", "Spice", "Spring", "Squirrel", "Star",
    "Summer", "Sun", "Sword", "Thief", "Thorn", "Thunder", "Toad", "Tournament", "Tulip",
    "Violet", "Warrior", "Water", "Wind", "Winter", "Witch", "Wolf", "Wyvern",
];

pub const FIRST_NAMES: &[&str] = &[
    "Anna", "Arthur", "Bernard", "Charles", "Elizabeth", "Fanny", "George", "Helen", "Ilia",
    "John", "Kathleen", "King", "Louis", "Marcus", "Mary", "Nicholas", "Prince", "Princess",
    "Queen", "Tilly",
];

pub const CITY_NAME_ROOTS: &[&str] = &[
    "Avery", "Bayley", "Carm", "Dun", "Ensal", "Folton", "Galgar", "Haye", "Idar", "Julvet",
    "Kanth", "Loy", "Marsan", "Nisme", "Ourar", "Peulin", "Rundur", "Solin", "Thaas", "Unvary",
    "Vanau", "Wark", "Yverne", "Zalek",
];

pub const ADJECTIVES_COLORS: &[&str] = &[
    "Bad", "Black", "Bloody", "Blue", "Bone", "Brave", "Brown", "Burnt", "Charming", "Coal",
    "Cold", "Copper", "Coral", "Crystal", "Damp", "Dark", "Dry", "Dusty", "False", "Fast", "Free",
    "Giant", "Glass", "Gold", "Golden", "Good", "Great", "Green", "Gray", "Hidden", "Hot",
    "Indigo", "Iron", "Light", "Long", "Metal", "Mithral", "Obsidian", "Purple", "Red", "Rock",
    "Royal", "Silent", "Silver", "Small", "Stone", "True", "White", "Wild", "Wine", "Yellow",
];

pub const SETTLEMENT_SUFFIXES: &[&str] = &[
    "Borough", "Bourg", "Camp", "Cester", "Citadel", "City", "County", "Dorf", "Ham", "Hamlet",
    "Haven", "Heim", "Keep", "Stead", "Town", "Village", "Ville", "Ward", "Wihr", "Worth",
];

pub const DIRECTIONS_ADJECTIVES: &[&str] = &[
    "Bottom", "Down", "East", "Far", "Fort", "Haute", "High", "Little", "Lost", "Low", "Mount",
    "New", "North", "Old", "Port", "Saint", "South", "Under", "Up", "West",
];

pub const NATURE_TOPOGRAPHY: &[&str] = &[
    "Bay", "Beach", "Bone", "Break", "Burrow", "Cliff", "Corner", "Creek", "Dale", "End", "Fall",
    "Field", "Forest", "Garden", "Glade", "Glen", "Grove", "Head", "Helm", "Hill", "Hold", "Hole",
    "Hollow", "Island", "Lake", "Land", "Limit", "Marsh", "Mont", "Moor", "Mount", "Mountain",
    "Park", "Pass", "Path", "Peak", "Plain", "Point", "Pool", "Rest", "Run", "Source", "Summit",
    "Trail", "Tree", "Valley", "View", "Way", "Well", "Wood",
];

pub const CASTLE_FIRST_PARTS: &[&str] = &[
    "Apple", "Battle", "Black", "Bleak", "Blood", "Bright", "Broken", "Cloud", "Dark", "Dawn",
    "Dragon", "Dusk", "Fire", "Gold", "Hammer", "Hawk", "Horse", "Ice", "Light", "Lion", "Moon",
    "Oak", "Raven", "Red", "River", "Rose", "Silver", "Star", "Stone", "Wind",
];

pub const CASTLE_SECOND_PARTS: &[&str] = &[
    "Bane", "Bridge", "Fall", "Fang", "Foot", "Heart", "Herd", "Hold", "Hook", "Keep", "Maw",
    "Mist", "Moor", "Peak", "Rock", "Shield", "Skull", "Song", "Soul", "Storm", "Thorn", "Vale",
    "Way", "Wood",
];

pub const SAINTS: &[&str] = &[
    "Adélie", "Agath", "Alexia", "Aubreda", "Bardolphus", "Barthélemy", "Beatrix", "Bérengérius",
    "Bernard", "Cecilia", "Cédany", "Émelote", "Gaufridus", "Geffrey", "Géroldin", "Guillotin",
    "Jaclyn", "Jacomus", "Madeleine", "Marion", "Marjorie", "Martin", "Mary", "Melchior", "Paul",
    "Pétasse", "Peter", "Remy", "Thomasse", "Victor",
];

/// Word tables a structure template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTable {
    /// `A`: buildings and outdoors, `d30`.
    Buildings,
    /// `B`: nouns, `d100`.
    Nouns,
    /// `C`: first names, `d20`.
    FirstNames,
    /// `D`: city name roots, `d24`.
    CityRoots,
    /// `E`: adjectives and colors, halved `d100`.
    Adjectives,
    /// `F`: settlement type suffix, `d20`.
    Suffixes,
    /// `G`: directions and adjectives, `d20`.
    Directions,
    /// `H`: nature and topography, halved `d100`.
    Nature,
}

impl NameTable {
    pub fn from_code(code: char) -> Option<NameTable> {
        match code {
            'A' => Some(Self::Buildings),
            'B' => Some(Self::Nouns),
            'C' => Some(Self::FirstNames),
            'D' => Some(Self::CityRoots),
            'E' => Some(Self::Adjectives),
            'F' => Some(Self::Suffixes),
            'G' => Some(Self::Directions),
            'H' => Some(Self::Nature),
            _ => None,
        }
    }

    /// Roll one word from this table.
    pub fn roll(&self, dice: &mut Dice) -> &'static str {
        match self {
            Self::Buildings => pick(BUILDINGS_OUTDOORS, dice.d30()),
            Self::Nouns => pick(NOUNS, dice.d100()),
            Self::FirstNames => pick(FIRST_NAMES, dice.d20()),
            Self::CityRoots => pick(CITY_NAME_ROOTS, dice.d24()),
            Self::Adjectives => pick(ADJECTIVES_COLORS, halved_d100(dice)),
            Self::Suffixes => pick(SETTLEMENT_SUFFIXES, dice.d20()),
            Self::Directions => pick(DIRECTIONS_ADJECTIVES, dice.d20()),
            Self::Nature => pick(NATURE_TOPOGRAPHY, halved_d100(dice)),
        }
    }
}

/// A `d100` folded onto a 50-entry table: `floor((d100 - 1) / 2)`, as a
/// 1-indexed roll.
fn halved_d100(dice: &mut Dice) -> u32 {
    (dice.d100() - 1) / 2 + 1
}

/// A parsed structure template: the word tables to roll, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    pub tables: Vec<NameTable>,
}

impl NameTemplate {
    /// Keep the table codes of a template, dropping everything else.
    pub fn parse(input: &str) -> NameTemplate {
        NameTemplate {
            tables: input.chars().filter_map(NameTable::from_code).collect(),
        }
    }

    /// Roll every word and join them with spaces.
    pub fn render(&self, dice: &mut Dice) -> String {
        self.tables
            .iter()
            .map(|table| table.roll(dice))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A synthesized name and its variations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub name: String,
    pub variations: Vec<String>,
}

/// Roll a structure template on `d30` and render it.
pub fn settlement_name(dice: &mut Dice) -> GeneratedName {
    let template = pick(STRUCTURE_TEMPLATES, dice.d30());
    let name = NameTemplate::parse(template).render(dice);
    GeneratedName {
        variations: vec![name.clone()],
        name,
    }
}

/// `"Castle <first> <second>"`.
pub fn castle_name(dice: &mut Dice) -> String {
    let first = pick(CASTLE_FIRST_PARTS, dice.d30());
    let second = pick(CASTLE_SECOND_PARTS, dice.d24());
    format!("Castle {} {}", first, second)
}

pub fn abbey_name(dice: &mut Dice) -> String {
    match dice.d10() {
        1 => "Abbey of Blessed-Land".to_string(),
        2 => "Abbey of Clear-Water".to_string(),
        3 => "Abbey of Fruitful-Garden".to_string(),
        4 => {
            let virtue = pick(&["Help", "Hope", "Relief"], dice.d3());
            format!("Abbey of Good-{}", virtue)
        }
        5 => "Abbey of Peaceful-Soul".to_string(),
        6 => "Abbey of Sacred-Heart".to_string(),
        7 => {
            let patronage = pick(&["Chastity", "Mercy", "the Poor"], dice.d3());
            format!("Abbey of Our-Lady-of-{}", patronage)
        }
        _ => format!("Abbey of Saint-{}", roll_saint(dice)),
    }
}

/// A saint's name, `d30`.
pub fn roll_saint(dice: &mut Dice) -> &'static str {
    pick(SAINTS, dice.d30())
}
