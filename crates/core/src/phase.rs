//! Lesson Phases
//!
//! A lesson is always built from the same six phases, in the same order. This
//! module holds the closed `Phase` enumeration and the static table that gives
//! each phase its baseline duration, its acceptable range, and its share of the
//! total lesson time.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// One of the six fixed stages of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Introduction,
    ContentDelivery,
    InteractiveGame,
    Application,
    CreativeExploration,
    Summary,
}

impl Phase {
    /// All phases in canonical lesson order.
    pub const ALL: [Phase; 6] = [
        Phase::Introduction,
        Phase::ContentDelivery,
        Phase::InteractiveGame,
        Phase::Application,
        Phase::CreativeExploration,
        Phase::Summary,
    ];

    /// Position of this phase in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The timing entry for this phase.
    pub fn spec(self) -> &'static PhaseSpec {
        &PHASE_TABLE[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Introduction => "introduction",
            Phase::ContentDelivery => "content-delivery",
            Phase::InteractiveGame => "interactive-game",
            Phase::Application => "application",
            Phase::CreativeExploration => "creative-exploration",
            Phase::Summary => "summary",
        }
    }

    /// Human-readable label used in activity titles.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Introduction => "Introduction",
            Phase::ContentDelivery => "Learn",
            Phase::InteractiveGame => "Game Time",
            Phase::Application => "Apply It",
            Phase::CreativeExploration => "Create",
            Phase::Summary => "Wrap-Up",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing constraints for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    pub phase: Phase,
    /// Duration of the phase in the 1350 s baseline lesson.
    pub base_seconds: u32,
    pub min_seconds: u32,
    pub max_seconds: u32,
    /// Share of the total lesson time, in whole percent.
    pub percentage_of_total: u32,
}

impl PhaseSpec {
    /// Whether `seconds` lies inside this phase's acceptable range.
    pub fn accepts(&self, seconds: u32) -> bool {
        (self.min_seconds..=self.max_seconds).contains(&seconds)
    }
}

/// The phase timing table, indexed by `Phase::index`. Percentages sum to 100.
pub const PHASE_TABLE: [PhaseSpec; 6] = [
    PhaseSpec {
        phase: Phase::Introduction,
        base_seconds: 135,
        min_seconds: 90,
        max_seconds: 180,
        percentage_of_total: 10,
    },
    PhaseSpec {
        phase: Phase::ContentDelivery,
        base_seconds: 338,
        min_seconds: 240,
        max_seconds: 420,
        percentage_of_total: 25,
    },
    PhaseSpec {
        phase: Phase::InteractiveGame,
        base_seconds: 270,
        min_seconds: 180,
        max_seconds: 360,
        percentage_of_total: 20,
    },
    PhaseSpec {
        phase: Phase::Application,
        base_seconds: 270,
        min_seconds: 180,
        max_seconds: 360,
        percentage_of_total: 20,
    },
    PhaseSpec {
        phase: Phase::CreativeExploration,
        base_seconds: 202,
        min_seconds: 120,
        max_seconds: 300,
        percentage_of_total: 15,
    },
    PhaseSpec {
        phase: Phase::Summary,
        base_seconds: 135,
        min_seconds: 90,
        max_seconds: 180,
        percentage_of_total: 10,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let total: u32 = PHASE_TABLE.iter().map(|s| s.percentage_of_total).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_table_is_indexed_by_phase() {
        for phase in Phase::ALL {
            assert_eq!(phase.spec().phase, phase);
        }
    }

    #[test]
    fn test_base_durations_sit_inside_their_ranges() {
        for spec in PHASE_TABLE {
            assert!(spec.accepts(spec.base_seconds), "{:?}", spec.phase);
            assert!(spec.min_seconds < spec.max_seconds);
        }
    }

    #[test]
    fn test_phase_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Phase::CreativeExploration).unwrap();
        assert_eq!(json, "\"creative-exploration\"");
        assert_eq!(Phase::CreativeExploration.to_string(), "creative-exploration");
    }
}
