//! Record payloads for class-related settlements: castles, wizard towers
//! and abbeys.

use serde::{Deserialize, Deserializer, Serialize};

use super::common::SettlementEvent;
use super::settlement::SettlementBase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jails {
    pub commoners: u32,
    pub nobles: u32,
}

/// Keep treasure. Each field is present only when its probability gate
/// succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treasure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gems: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jewelry: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolls: Option<u32>,
}

impl Treasure {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An empty treasure writes no fields, which RON renders as `()` and reads
/// back as a unit value.
fn treasure_or_unit<'de, D>(deserializer: D) -> Result<Treasure, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Treasure>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keep {
    pub shape: String,
    pub levels: u32,
    pub defensive_feature: String,
    pub non_defensive_feature: String,
    pub jails: Jails,
    /// Months of supplies in case of siege.
    pub siege_supplies: u32,
    #[serde(deserialize_with = "treasure_or_unit")]
    pub treasure: Treasure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Walls {
    pub shape: String,
    pub towers: u32,
    pub tower_shape: String,
    pub defensive_feature: String,
    pub non_defensive_feature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gatehouse {
    pub closure: String,
    pub towers: u32,
}

/// Castle garrison. Unit counts are floored shares of `total_fighters`
/// and need not add up to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garrison {
    pub total_fighters: u32,
    pub lord_level: u32,
    pub lieutenant_level: u32,
    pub bodyguard_level: u32,
    pub bodyguards: u32,
    pub cavaliers_heavy: u32,
    pub cavaliers_medium_spear: u32,
    pub cavaliers_medium_bow: u32,
    pub footmen_sword: u32,
    pub footmen_polearm: u32,
    pub footmen_crossbow: u32,
    pub footmen_longbow: u32,
}

impl Garrison {
    /// The seven troop counts, labelled.
    pub fn units(&self) -> [(&'static str, u32); 7] {
        [
            ("cavaliersHeavy", self.cavaliers_heavy),
            ("cavaliersMediumSpear", self.cavaliers_medium_spear),
            ("cavaliersMediumBow", self.cavaliers_medium_bow),
            ("footmenSword", self.footmen_sword),
            ("footmenPolearm", self.footmen_polearm),
            ("footmenCrossbow", self.footmen_crossbow),
            ("footmenLongbow", self.footmen_longbow),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastleDefenses {
    pub features: Vec<String>,
    pub walls: Option<Walls>,
    pub gatehouse: Option<Gatehouse>,
    pub moat_encounter: Option<String>,
    pub garrison: Garrison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub condition: String,
    pub keep: Keep,
    pub defenses: CastleDefenses,
    pub events: Option<SettlementEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerLevels {
    pub aboveground: u32,
    pub underground: u32,
    pub total: u32,
    pub has_bottom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerAppearance {
    pub material: String,
    pub shape: String,
    pub details: Vec<String>,
}

/// What each level of the tower is used for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUsage {
    pub ground: String,
    pub aboveground: Vec<String>,
    pub top: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underground: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inhabitants {
    pub wizard_level: u32,
    pub apprentice_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub levels: TowerLevels,
    pub connection: String,
    pub appearance: TowerAppearance,
    pub inside_appearance: String,
    pub special_equipment: Vec<String>,
    pub level_usage: LevelUsage,
    pub inhabitants: Inhabitants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AbbeySize {
    Small,
    Major,
}

impl AbbeySize {
    pub const ALL: [AbbeySize; 2] = [Self::Small, Self::Major];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Major => "Major",
        }
    }
}

label_strings!(AbbeySize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbbeyPopulation {
    pub monks_nuns: u32,
    pub abbot_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAndLand {
    pub protection: String,
    pub outside_walls: String,
    pub area_within_walls: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalLocations {
    pub garden: Vec<String>,
    pub infirmary: Vec<String>,
    pub religious: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activities {
    pub farming: Vec<String>,
    pub workshop: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbbeyData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub abbey_size: AbbeySize,
    pub abbey_population: AbbeyPopulation,
    pub structure_and_land: StructureAndLand,
    pub core_locations: Vec<String>,
    pub additional_locations: AdditionalLocations,
    pub activities: Activities,
    pub fame: Option<String>,
    pub history: String,
    pub events: Option<SettlementEvent>,
}
