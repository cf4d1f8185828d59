//! Steading Engine: procedural settlement generation for tabletop games.
//!
//! Produces fully populated, internally consistent settlement records
//! (hamlets, villages, cities, castles, wizard towers and abbeys) by
//! rolling dice against weighted tables. All randomness flows through an
//! injectable [`crate::core::dice::Dice`], so every record is reproducible from a
//! seed or a scripted roll source.

pub mod archetypes;
pub mod core;
pub mod schema;
