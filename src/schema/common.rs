use serde::{Deserialize, Serialize};
use std::fmt;

/// How the inhabitants of a steading (or its ruler) greet strangers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Disposition {
    AttackOnSight,
    Hostile,
    Neutral,
    Welcoming,
    Enthusiastic,
}

impl Disposition {
    pub const ALL: [Disposition; 5] = [
        Self::AttackOnSight,
        Self::Hostile,
        Self::Neutral,
        Self::Welcoming,
        Self::Enthusiastic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AttackOnSight => "Attack on sight",
            Self::Hostile => "Hostile",
            Self::Neutral => "Neutral",
            Self::Welcoming => "Welcoming",
            Self::Enthusiastic => "Enthusiastic",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrative flavor triple supplied by a descriptor roller.
///
/// The engine never interprets these strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptors {
    pub adverb: String,
    pub adjective: String,
    pub description: String,
}

/// When a settlement event takes place relative to the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventTiming {
    Past,
    Present,
    Future,
}

impl EventTiming {
    pub const ALL: [EventTiming; 3] = [Self::Past, Self::Present, Self::Future];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Past => "Ended earlier",
            Self::Present => "Is happening now",
            Self::Future => "Will take place in the future",
        }
    }

    /// Bucket a `d6`: 1 past, 2-4 present, 5-6 future.
    pub fn from_d6(roll: u32) -> Self {
        match roll {
            0 | 1 => Self::Past,
            2..=4 => Self::Present,
            _ => Self::Future,
        }
    }
}

/// An event affecting a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementEvent {
    pub timing: EventTiming,
    pub event: String,
}

/// Size tier of a village or city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SizeTier {
    Small,
    Medium,
    Big,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [Self::Small, Self::Medium, Self::Big];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Big => "Big",
        }
    }
}

/// Street layout of a hamlet or village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Layout {
    Heap,
    Round,
    Row,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Self::Heap, Self::Round, Self::Row];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Heap => "Heap",
            Self::Round => "Round",
            Self::Row => "Row",
        }
    }
}

label_strings!(Disposition, EventTiming, SizeTier, Layout);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_serializes_as_label() {
        for disposition in Disposition::ALL {
            let json = serde_json::to_string(&disposition).unwrap();
            assert_eq!(json, format!("\"{}\"", disposition.label()));
        }
    }

    #[test]
    fn timing_buckets() {
        assert_eq!(EventTiming::from_d6(1), EventTiming::Past);
        assert_eq!(EventTiming::from_d6(2), EventTiming::Present);
        assert_eq!(EventTiming::from_d6(4), EventTiming::Present);
        assert_eq!(EventTiming::from_d6(5), EventTiming::Future);
        assert_eq!(EventTiming::from_d6(6), EventTiming::Future);
    }

    #[test]
    fn timing_serializes_as_phrase() {
        let event = SettlementEvent {
            timing: EventTiming::Present,
            event: "Market day".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Is happening now"));
    }

    #[test]
    fn labels_survive_ron() {
        for disposition in Disposition::ALL {
            let text = ron::to_string(&disposition).unwrap();
            assert_eq!(text, format!("\"{}\"", disposition.label()));
            assert_eq!(ron::from_str::<Disposition>(&text).unwrap(), disposition);
        }
        for timing in EventTiming::ALL {
            let event = SettlementEvent {
                timing,
                event: "Flood".to_string(),
            };
            let text = ron::to_string(&event).unwrap();
            assert_eq!(ron::from_str::<SettlementEvent>(&text).unwrap(), event);
        }
        for layout in Layout::ALL {
            let text = ron::to_string(&layout).unwrap();
            assert_eq!(ron::from_str::<Layout>(&text).unwrap(), layout);
        }
        for size in SizeTier::ALL {
            let text = ron::to_string(&size).unwrap();
            assert_eq!(ron::from_str::<SizeTier>(&text).unwrap(), size);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_json::from_str::<Disposition>("\"AttackOnSight\"").is_err());
        assert!(serde_json::from_str::<EventTiming>("\"Past\"").is_err());
        assert_eq!(
            serde_json::from_str::<Disposition>("\"Attack on sight\"").unwrap(),
            Disposition::AttackOnSight
        );
    }
}
