/// The steading pipeline: type selection, archetype dispatch and single-field
/// step generation.
///
/// Generation itself cannot fail; only loading descriptor data and asking
/// for a field no archetype has produce errors.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::archetypes::{builder_for, GenerationContext};
use crate::core::descriptors::{DescriptorError, DescriptorRoller, WordTableDescriptors};
use crate::core::dice::Dice;
use crate::core::table::pick;
use crate::schema::settlement::{SettlementRecord, SettlementType};

#[derive(Debug, Error)]
pub enum SteadingError {
    #[error("descriptor error: {0}")]
    Descriptors(#[from] DescriptorError),
    #[error(
        "field '{field}' not found in {settlement_type} steading data. Available fields: {}",
        available.join(", ")
    )]
    FieldNotFound {
        field: String,
        settlement_type: SettlementType,
        available: Vec<String>,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The top-level steading generator. Built via `SteadingGenerator::builder()`.
pub struct SteadingGenerator {
    dice: Dice,
    descriptors: Box<dyn DescriptorRoller>,
    generation_count: u64,
}

/// Builder for constructing a `SteadingGenerator`.
pub struct SteadingGeneratorBuilder {
    seed: Option<u64>,
    descriptors_path: Option<String>,
    /// Directly provided dice (for scripted rolls in tests).
    dice: Option<Dice>,
    /// Directly provided descriptor source.
    descriptors: Option<Box<dyn DescriptorRoller>>,
}

impl SteadingGenerator {
    pub fn builder() -> SteadingGeneratorBuilder {
        SteadingGeneratorBuilder {
            seed: None,
            descriptors_path: None,
            dice: None,
            descriptors: None,
        }
    }

    /// Number of records generated so far, steps included.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Random archetype: `d2` for the category, then `d3` within it.
    pub fn select_type(&mut self) -> SettlementType {
        let category = if self.dice.d2() == 1 {
            &SettlementType::CIVILIAN
        } else {
            &SettlementType::CLASS_RELATED
        };
        pick(category, self.dice.d3())
    }

    /// Generate a steading. An unknown or missing type name picks one at
    /// random.
    pub fn generate(&mut self, requested: Option<&str>) -> SettlementRecord {
        let settlement_type = match requested.and_then(SettlementType::parse) {
            Some(settlement_type) => settlement_type,
            None => {
                let settlement_type = self.select_type();
                debug!(?requested, %settlement_type, "random steading type");
                settlement_type
            }
        };
        self.generate_type(settlement_type)
    }

    pub fn generate_type(&mut self, settlement_type: SettlementType) -> SettlementRecord {
        debug!(%settlement_type, count = self.generation_count, "generating steading");
        let build = builder_for(settlement_type);
        let mut ctx = GenerationContext::new(&mut self.dice, self.descriptors.as_mut());
        let record = build(&mut ctx);
        self.generation_count += 1;
        record
    }

    /// Regenerate one field: picks an archetype whose schema has `field`,
    /// generates a fresh record of it and returns only that field.
    pub fn generate_step(&mut self, field: &str) -> Result<serde_json::Value, SteadingError> {
        let candidates: Vec<SettlementType> = SettlementType::ALL
            .into_iter()
            .filter(|t| t.has_field(field))
            .collect();

        if candidates.is_empty() {
            let record = self.generate(None);
            let settlement_type = record.settlement_type();
            debug!(field, %settlement_type, "step field not found");
            return Err(SteadingError::FieldNotFound {
                field: field.to_string(),
                settlement_type,
                available: settlement_type
                    .field_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        }

        let roll = self.dice.roll(candidates.len() as u32);
        let settlement_type = pick(&candidates, roll);
        debug!(field, %settlement_type, candidates = candidates.len(), "step generation");

        let record = self.generate_type(settlement_type);
        let mut value = serde_json::to_value(&record)?;
        value
            .get_mut(field)
            .map(serde_json::Value::take)
            .ok_or_else(|| SteadingError::FieldNotFound {
                field: field.to_string(),
                settlement_type,
                available: settlement_type
                    .field_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
    }
}

impl SteadingGeneratorBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the descriptor word table from a RON file.
    pub fn descriptors_path(mut self, path: &str) -> Self {
        self.descriptors_path = Some(path.to_string());
        self
    }

    /// Provide dice directly (takes precedence over `seed`).
    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Provide a descriptor source directly (takes precedence over
    /// `descriptors_path`).
    pub fn with_descriptors(mut self, descriptors: Box<dyn DescriptorRoller>) -> Self {
        self.descriptors = Some(descriptors);
        self
    }

    pub fn build(self) -> Result<SteadingGenerator, SteadingError> {
        let dice = match (self.dice, self.seed) {
            (Some(dice), _) => dice,
            (None, Some(seed)) => Dice::seeded(seed),
            (None, None) => Dice::from_entropy(),
        };

        let descriptors: Box<dyn DescriptorRoller> = match (self.descriptors, self.descriptors_path)
        {
            (Some(descriptors), _) => descriptors,
            (None, Some(path)) => {
                debug!(%path, "loading descriptor table");
                Box::new(WordTableDescriptors::load_from_ron(Path::new(&path))?)
            }
            (None, None) => Box::new(WordTableDescriptors::embedded()?),
        };

        Ok(SteadingGenerator {
            dice,
            descriptors,
            generation_count: 0,
        })
    }
}

/// Generate one steading with entropy-seeded dice and the embedded
/// descriptor table.
pub fn generate_steading(requested: Option<&str>) -> Result<SettlementRecord, SteadingError> {
    let mut generator = SteadingGenerator::builder().build()?;
    Ok(generator.generate(requested))
}

/// Regenerate a single field with entropy-seeded dice.
pub fn generate_steading_step(field: &str) -> Result<serde_json::Value, SteadingError> {
    let mut generator = SteadingGenerator::builder().build()?;
    generator.generate_step(field)
}
