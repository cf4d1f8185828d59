use serde::{Deserialize, Serialize};
use std::fmt;

use super::civilian::{CityData, HamletData, VillageData};
use super::class_related::{AbbeyData, CastleData, TowerData};
use super::common::Disposition;

/// Broad family a settlement archetype belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Civilian,
    ClassRelated,
}

impl Category {
    pub const ALL: [Category; 2] = [Self::Civilian, Self::ClassRelated];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Civilian => "Civilian",
            Self::ClassRelated => "Class-related",
        }
    }
}

label_strings!(Category);

/// The six settlement archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementType {
    Hamlet,
    Village,
    City,
    Castle,
    Tower,
    Abbey,
}

const BASE_FIELDS: &[&str] = &["category", "type", "name", "nameVariations", "disposition"];

impl SettlementType {
    pub const ALL: [SettlementType; 6] = [
        Self::Hamlet,
        Self::Village,
        Self::City,
        Self::Castle,
        Self::Tower,
        Self::Abbey,
    ];

    pub const CIVILIAN: [SettlementType; 3] = [Self::Hamlet, Self::Village, Self::City];

    pub const CLASS_RELATED: [SettlementType; 3] = [Self::Castle, Self::Tower, Self::Abbey];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamlet => "Hamlet",
            Self::Village => "Village",
            Self::City => "City",
            Self::Castle => "Castle",
            Self::Tower => "Tower",
            Self::Abbey => "Abbey",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Hamlet | Self::Village | Self::City => Category::Civilian,
            Self::Castle | Self::Tower | Self::Abbey => Category::ClassRelated,
        }
    }

    /// Parse an exact archetype name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<SettlementType> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Serialized field names of this archetype's record, in schema order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let specific: &[&str] = match self {
            Self::Hamlet => &[
                "mainBuilding",
                "peasantHouses",
                "totalBuildings",
                "layout",
                "secret",
                "descriptors",
            ],
            Self::Village => &[
                "size",
                "sizeMultiplier",
                "population",
                "occupation",
                "layout",
                "pointsOfInterest",
                "defense",
                "ruler",
                "rulerDisposition",
                "notableNPCs",
                "secret",
                "events",
            ],
            Self::City => &[
                "size",
                "sizeMultiplier",
                "population",
                "occupations",
                "characteristics",
                "appearance",
                "pointsOfInterest",
                "buildingsOfInterest",
                "defense",
                "ruler",
                "rulerDisposition",
                "notableNPCs",
                "events",
            ],
            Self::Castle => &["condition", "keep", "defenses", "events"],
            Self::Tower => &[
                "levels",
                "connection",
                "appearance",
                "insideAppearance",
                "specialEquipment",
                "levelUsage",
                "inhabitants",
            ],
            Self::Abbey => &[
                "abbeySize",
                "abbeyPopulation",
                "structureAndLand",
                "coreLocations",
                "additionalLocations",
                "activities",
                "fame",
                "history",
                "events",
            ],
        };
        BASE_FIELDS.iter().chain(specific).copied().collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.field_names().contains(&field)
    }
}

impl fmt::Display for SettlementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields every settlement record carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementBase {
    pub category: Category,
    pub name: String,
    pub name_variations: Vec<String>,
    pub disposition: Disposition,
}

/// A generated steading of any archetype.
///
/// Records are built in one generator call and never mutated afterwards;
/// regenerating produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettlementRecord {
    Hamlet(HamletData),
    Village(VillageData),
    City(CityData),
    Castle(CastleData),
    Tower(TowerData),
    Abbey(AbbeyData),
}

impl SettlementRecord {
    pub fn settlement_type(&self) -> SettlementType {
        match self {
            Self::Hamlet(_) => SettlementType::Hamlet,
            Self::Village(_) => SettlementType::Village,
            Self::City(_) => SettlementType::City,
            Self::Castle(_) => SettlementType::Castle,
            Self::Tower(_) => SettlementType::Tower,
            Self::Abbey(_) => SettlementType::Abbey,
        }
    }

    pub fn base(&self) -> &SettlementBase {
        match self {
            Self::Hamlet(data) => &data.base,
            Self::Village(data) => &data.base,
            Self::City(data) => &data.base,
            Self::Castle(data) => &data.base,
            Self::Tower(data) => &data.base,
            Self::Abbey(data) => &data.base,
        }
    }

    pub fn category(&self) -> Category {
        self.base().category
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn disposition(&self) -> Disposition {
        self.base().disposition
    }

    /// Occupation labels to hand to an NPC detail generator: the ruler
    /// first, then notable NPCs, in order and with duplicates kept.
    pub fn notable_figures(&self) -> Vec<&str> {
        let (ruler, npcs) = match self {
            Self::Village(data) => (&data.ruler, &data.notable_npcs),
            Self::City(data) => (&data.ruler, &data.notable_npcs),
            _ => return Vec::new(),
        };
        std::iter::once(ruler.as_str())
            .chain(npcs.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!(SettlementType::parse("Castle"), Some(SettlementType::Castle));
        assert_eq!(SettlementType::parse("castle"), None);
        assert_eq!(SettlementType::parse("Metropolis"), None);
        assert_eq!(SettlementType::parse(""), None);
    }

    #[test]
    fn categories_partition_types() {
        for t in SettlementType::CIVILIAN {
            assert_eq!(t.category(), Category::Civilian);
        }
        for t in SettlementType::CLASS_RELATED {
            assert_eq!(t.category(), Category::ClassRelated);
        }
    }

    #[test]
    fn field_names_include_base() {
        for t in SettlementType::ALL {
            let fields = t.field_names();
            for base in BASE_FIELDS {
                assert!(fields.contains(base), "{} missing {}", t, base);
            }
        }
        assert!(SettlementType::Hamlet.has_field("peasantHouses"));
        assert!(!SettlementType::Hamlet.has_field("garrison"));
    }

    #[test]
    fn category_serializes_with_hyphen() {
        let json = serde_json::to_string(&Category::ClassRelated).unwrap();
        assert_eq!(json, "\"Class-related\"");
    }
}
