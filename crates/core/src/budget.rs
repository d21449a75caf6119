//! Duration Budget
//!
//! Turns a learning-style multiplier into a total lesson length and splits that
//! length across the phases by their fixed percentages.

use crate::phase::{PHASE_TABLE, Phase};

/// The canonical 22.5-minute baseline lesson.
pub const BASE_LESSON_SECONDS: u32 = 1350;
/// Shortest acceptable lesson (20 minutes).
pub const MIN_LESSON_SECONDS: u32 = 1200;
/// Longest acceptable lesson (25 minutes).
pub const MAX_LESSON_SECONDS: u32 = 1500;
/// Upper bound on seconds lost to per-phase flooring.
pub const MAX_FLOOR_DRIFT_SECONDS: u32 = 6;

/// Computes `floor(BASE_LESSON_SECONDS * multiplier)`, kept inside the
/// acceptable lesson window.
pub fn target_total(multiplier: f64) -> u32 {
    let raw = (f64::from(BASE_LESSON_SECONDS) * multiplier).floor();
    // `as` saturates, so NaN and negatives land on 0 before the clamp.
    (raw as u32).clamp(MIN_LESSON_SECONDS, MAX_LESSON_SECONDS)
}

/// Seconds allotted to a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAllocation {
    pub phase: Phase,
    pub seconds: u32,
}

/// Splits `target` across the six phases in canonical order.
///
/// Each share is `floor(percentage * target / 100)`; the remainder lost to
/// flooring is not redistributed.
pub fn allocate(target: u32) -> [PhaseAllocation; 6] {
    PHASE_TABLE.map(|spec| PhaseAllocation {
        phase: spec.phase,
        seconds: (u64::from(spec.percentage_of_total) * u64::from(target) / 100) as u32,
    })
}
