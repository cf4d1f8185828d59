//! Record payloads for civilian settlements: hamlets, villages and cities.

use serde::{Deserialize, Serialize};

use super::common::{Descriptors, Disposition, Layout, SettlementEvent, SizeTier};
use super::settlement::SettlementBase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HamletData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub main_building: String,
    pub peasant_houses: u32,
    /// The main building plus every peasant house.
    pub total_buildings: u32,
    pub layout: Layout,
    pub secret: Option<String>,
    pub descriptors: Descriptors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillagePointsOfInterest {
    pub general: Vec<String>,
    pub special: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageDefense {
    pub features: Vec<String>,
    pub guards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub size: SizeTier,
    pub size_multiplier: u32,
    pub population: u32,
    pub occupation: String,
    pub layout: Layout,
    pub points_of_interest: VillagePointsOfInterest,
    pub defense: VillageDefense,
    pub ruler: String,
    pub ruler_disposition: Disposition,
    #[serde(rename = "notableNPCs")]
    pub notable_npcs: Vec<String>,
    pub secret: Option<String>,
    pub events: Option<SettlementEvent>,
}

/// A city location annotated with descriptor flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedLocation {
    pub location: String,
    pub descriptors: Descriptors,
}

/// A city building annotated with descriptor flavor, e.g. `"Business: Baker"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedBuilding {
    pub building: String,
    pub descriptors: Descriptors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPointsOfInterest {
    pub special: Vec<DescribedLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDefense {
    pub walled: bool,
    /// One entry per gate, e.g. `"North entrance: Portcullis (guarded by 2 towers)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrances: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siege_supplies: Option<String>,
    pub guards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityData {
    #[serde(flatten)]
    pub base: SettlementBase,
    pub size: SizeTier,
    pub size_multiplier: u32,
    pub population: u32,
    pub occupations: Vec<String>,
    pub characteristics: Vec<String>,
    pub appearance: String,
    pub points_of_interest: CityPointsOfInterest,
    pub buildings_of_interest: Vec<DescribedBuilding>,
    pub defense: CityDefense,
    pub ruler: String,
    pub ruler_disposition: Disposition,
    #[serde(rename = "notableNPCs")]
    pub notable_npcs: Vec<String>,
    pub events: Option<SettlementEvent>,
}
