/// Descriptor rolling: narrative flavor triples attached to sub-entries.
///
/// The engine treats descriptors as opaque annotations. Any flavor source
/// can plug in through [`DescriptorRoller`]; [`WordTableDescriptors`] is the
/// built-in one, driven by an adverb list and an adjective list loaded
/// from RON.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::dice::Dice;
use crate::core::table::pick_ref;
use crate::schema::common::Descriptors;

/// Word table compiled into the crate and used when no other is configured.
pub const DEFAULT_DESCRIPTOR_TABLE: &str = include_str!("../../data/descriptors.ron");

/// Die rolled on each word list. The default lists have one word per face.
pub const DESCRIPTOR_DIE: u32 = 100;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("descriptor table has no {0}")]
    EmptyTable(&'static str),
}

/// Source of `{adverb, adjective, description}` flavor triples.
pub trait DescriptorRoller {
    fn roll_descriptors(&mut self, dice: &mut Dice) -> Descriptors;
}

/// Rolls `d100` on an adverb list and on an adjective list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordTableDescriptors {
    adverbs: Vec<String>,
    adjectives: Vec<String>,
}

impl WordTableDescriptors {
    pub fn new(adverbs: Vec<String>, adjectives: Vec<String>) -> Result<Self, DescriptorError> {
        if adverbs.is_empty() {
            return Err(DescriptorError::EmptyTable("adverbs"));
        }
        if adjectives.is_empty() {
            return Err(DescriptorError::EmptyTable("adjectives"));
        }
        Ok(Self {
            adverbs,
            adjectives,
        })
    }

    /// Load a word table from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, DescriptorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a word table from a RON string of the form
    /// `(adverbs: [..], adjectives: [..])`.
    pub fn parse_ron(input: &str) -> Result<Self, DescriptorError> {
        let raw: WordTableDescriptors = ron::from_str(input)?;
        Self::new(raw.adverbs, raw.adjectives)
    }

    /// The embedded default word table.
    pub fn embedded() -> Result<Self, DescriptorError> {
        Self::parse_ron(DEFAULT_DESCRIPTOR_TABLE)
    }

    pub fn adverbs(&self) -> &[String] {
        &self.adverbs
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }
}

impl DescriptorRoller for WordTableDescriptors {
    fn roll_descriptors(&mut self, dice: &mut Dice) -> Descriptors {
        let adverb = pick_ref(&self.adverbs, dice.roll(DESCRIPTOR_DIE)).clone();
        let adjective = pick_ref(&self.adjectives, dice.roll(DESCRIPTOR_DIE)).clone();
        Descriptors {
            description: format!("{} {}", adverb, adjective),
            adverb,
            adjective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn embedded_table_covers_every_face() {
        let table = WordTableDescriptors::embedded().unwrap();
        assert_eq!(table.adverbs().len(), DESCRIPTOR_DIE as usize);
        assert_eq!(table.adjectives().len(), DESCRIPTOR_DIE as usize);
    }

    #[test]
    fn embedded_rolls_are_not_piled_on_one_word() {
        let mut table = WordTableDescriptors::embedded().unwrap();
        let mut dice = Dice::seeded(99);
        let mut adverbs: HashMap<String, u32> = HashMap::new();
        let mut adjectives: HashMap<String, u32> = HashMap::new();
        for _ in 0..10_000 {
            let descriptors = table.roll_descriptors(&mut dice);
            *adverbs.entry(descriptors.adverb).or_default() += 1;
            *adjectives.entry(descriptors.adjective).or_default() += 1;
        }
        // a fair d100 gives each word about 100 hits
        assert!(adverbs.values().all(|n| *n < 250));
        assert!(adjectives.values().all(|n| *n < 250));
        assert!(adverbs.len() > 90);
        assert!(adjectives.len() > 90);
    }

    #[test]
    fn parse_small_table() {
        let table = WordTableDescriptors::parse_ron(
            r#"(adverbs: ["Quietly", "Boldly"], adjectives: ["Old", "New"])"#,
        )
        .unwrap();
        assert_eq!(table.adverbs().len(), 2);
        assert_eq!(table.adjectives()[1], "New");
    }

    #[test]
    fn empty_lists_are_rejected() {
        let err = WordTableDescriptors::parse_ron(r#"(adverbs: [], adjectives: ["Old"])"#)
            .unwrap_err();
        assert!(matches!(err, DescriptorError::EmptyTable("adverbs")));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let err = WordTableDescriptors::parse_ron("(adverbs: [").unwrap_err();
        assert!(matches!(err, DescriptorError::Ron(_)));
    }

    #[test]
    fn rolls_clamp_to_last_word() {
        let mut table = WordTableDescriptors::new(
            vec!["Quietly".to_string(), "Boldly".to_string()],
            vec!["Old".to_string()],
        )
        .unwrap();
        let mut dice = Dice::from_fn(|sides| sides);
        let descriptors = table.roll_descriptors(&mut dice);
        assert_eq!(descriptors.adverb, "Boldly");
        assert_eq!(descriptors.adjective, "Old");
        assert_eq!(descriptors.description, "Boldly Old");
    }
}
