//! Archetype generators, one module per settlement schema.
//!
//! Every generator is a function of a [`GenerationContext`] and returns a
//! finished record; the orchestrator dispatches through
//! [`ARCHETYPE_BUILDERS`].

pub mod abbey;
pub mod castle;
pub mod city;
pub mod hamlet;
pub mod tower;
pub mod village;

use tracing::trace;

use crate::core::descriptors::DescriptorRoller;
use crate::core::dice::Dice;
use crate::core::table::pick;
use crate::schema::common::{Descriptors, Disposition, EventTiming, Layout, SettlementEvent};
use crate::schema::settlement::{SettlementBase, SettlementRecord, SettlementType};

/// Everything a generator consumes: dice and a descriptor source.
pub struct GenerationContext<'a> {
    pub dice: &'a mut Dice,
    pub descriptors: &'a mut dyn DescriptorRoller,
}

impl<'a> GenerationContext<'a> {
    pub fn new(dice: &'a mut Dice, descriptors: &'a mut dyn DescriptorRoller) -> Self {
        Self { dice, descriptors }
    }

    /// Ask the descriptor source for one flavor triple.
    pub fn roll_descriptors(&mut self) -> Descriptors {
        self.descriptors.roll_descriptors(self.dice)
    }
}

/// Builds one archetype's record.
pub type BuildFn = fn(&mut GenerationContext<'_>) -> SettlementRecord;

/// Archetype builders keyed by settlement type.
pub const ARCHETYPE_BUILDERS: [(SettlementType, BuildFn); 6] = [
    (SettlementType::Hamlet, hamlet::build),
    (SettlementType::Village, village::build),
    (SettlementType::City, city::build),
    (SettlementType::Castle, castle::build),
    (SettlementType::Tower, tower::build),
    (SettlementType::Abbey, abbey::build),
];

/// Look up the builder for `settlement_type`.
pub fn builder_for(settlement_type: SettlementType) -> BuildFn {
    ARCHETYPE_BUILDERS
        .iter()
        .find(|(t, _)| *t == settlement_type)
        .map(|(_, build)| *build)
        .unwrap_or(hamlet::build)
}

pub(crate) fn base(
    settlement_type: SettlementType,
    name: String,
    name_variations: Vec<String>,
    disposition: Disposition,
) -> SettlementBase {
    SettlementBase {
        category: settlement_type.category(),
        name,
        name_variations,
        disposition,
    }
}

/// Street layout, `d3`.
pub(crate) fn roll_layout(dice: &mut Dice) -> Layout {
    pick(&Layout::ALL, dice.d3())
}

/// A `1-in-6` event: timing from a `d6`, the event itself from a `d12`
/// on the archetype's event table.
pub(crate) fn roll_event(dice: &mut Dice, events: &[&str]) -> Option<SettlementEvent> {
    if !dice.one_in(6) {
        return None;
    }
    let timing = EventTiming::from_d6(dice.d6());
    let event = pick(events, dice.d12()).to_string();
    trace!(?timing, %event, "settlement event");
    Some(SettlementEvent { timing, event })
}

pub(crate) fn owned(values: impl IntoIterator<Item = &'static str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
