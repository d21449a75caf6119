//! Lesson Validator
//!
//! Checks a generated lesson against timing and structural rules and scores
//! it. Validation never fails; problems are reported as data for the caller to
//! act on.

use crate::{
    assembler::LessonResult,
    budget::{MAX_LESSON_SECONDS, MIN_LESSON_SECONDS},
    curriculum::MAX_GRADE_LEVEL,
    phase::Phase,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fewest phases a complete lesson may have.
pub const MIN_PHASE_COUNT: usize = 6;

const DURATION_WEIGHT: u8 = 25;
const SESSION_WEIGHT: u8 = 20;
const STYLE_WEIGHT: u8 = 25;
const CURRICULUM_WEIGHT: u8 = 20;
const PHASE_COUNT_WEIGHT: u8 = 10;

/// The outcome of validating one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationReport {
    /// `true` when there are no errors. Warnings do not affect validity.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// 0 to 100.
    pub quality_score: u8,
}

/// Validates `lesson` and computes its quality score.
///
/// Pure: validating the same lesson twice gives the same report.
pub fn validate(lesson: &LessonResult) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut score = 0u8;

    let total = lesson.total_duration_seconds;
    if (MIN_LESSON_SECONDS..=MAX_LESSON_SECONDS).contains(&total) {
        score += DURATION_WEIGHT;
    } else {
        errors.push(format!(
            "Total duration {total}s is outside the allowed range {}-{}s",
            MIN_LESSON_SECONDS, MAX_LESSON_SECONDS
        ));
    }

    // Durations come from callers unchecked, so sum wide enough not to wrap.
    let phase_sum: u64 = lesson
        .activities
        .iter()
        .map(|a| u64::from(a.duration_seconds))
        .sum();
    if phase_sum != u64::from(total) {
        errors.push(format!(
            "Declared total {total}s does not match the sum of phase durations {phase_sum}s"
        ));
    }

    if lesson.metadata.session_id.trim().is_empty() {
        warnings.push("No session id; content uniqueness cannot be tracked".to_string());
    } else {
        score += SESSION_WEIGHT;
    }

    if lesson
        .activities
        .iter()
        .any(|a| a.content.learning_style_adaptation.is_some())
    {
        score += STYLE_WEIGHT;
    } else {
        warnings.push("No phase carries learning-style adaptation metadata".to_string());
    }

    let has_curriculum = lesson.activities.iter().any(|a| a.content.curriculum.is_some());
    if lesson.metadata.grade_level <= MAX_GRADE_LEVEL && has_curriculum {
        score += CURRICULUM_WEIGHT;
    } else {
        warnings.push("Lesson is not aligned with a grade-level curriculum".to_string());
    }

    let count = lesson.activities.len();
    if count >= MIN_PHASE_COUNT {
        score += PHASE_COUNT_WEIGHT;
    } else {
        errors.push(format!(
            "Lesson has {count} phases; at least {MIN_PHASE_COUNT} are required"
        ));
    }

    for activity in &lesson.activities {
        let spec = activity.phase.spec();
        if !spec.accepts(activity.duration_seconds) {
            warnings.push(format!(
                "Phase '{}' lasts {}s, outside its {}-{}s range",
                activity.phase, activity.duration_seconds, spec.min_seconds, spec.max_seconds
            ));
        }
    }

    let in_order = lesson
        .activities
        .iter()
        .map(|a| a.phase)
        .eq(Phase::ALL.into_iter().take(count));
    if !in_order {
        warnings.push("Phases are not in canonical order".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        quality_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assembler::{LessonAssembler, LessonConfig},
        curriculum::{MockCurriculumSource, StaticCurriculum},
        style::LearningStyle,
        uniqueness::UniquenessTracker,
    };
    use std::sync::Arc;

    fn lesson() -> LessonResult {
        let mut assembler =
            LessonAssembler::new(UniquenessTracker::seeded(1), Arc::new(StaticCurriculum));
        assembler.generate(&LessonConfig {
            subject: "mathematics".to_string(),
            skill_area: "fractions".to_string(),
            grade_level: 3,
            learning_style: Some(LearningStyle::Visual),
            session_id: "s1".to_string(),
        })
    }

    #[test]
    fn test_generated_lesson_scores_full_marks() {
        let report = validate(&lesson());
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.quality_score, 100);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let lesson = lesson();
        let first = validate(&lesson);
        let second = validate(&lesson);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_outside_window_is_an_error() {
        let mut lesson = lesson();
        lesson.activities[1].duration_seconds += 100;
        lesson.total_duration_seconds += 100;

        let report = validate(&lesson);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("outside the allowed range"));
        assert_eq!(report.quality_score, 75);
    }

    #[test]
    fn test_phase_sum_mismatch_is_an_error() {
        let mut lesson = lesson();
        lesson.total_duration_seconds = 1485;

        let report = validate(&lesson);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("does not match"));
        // Consistency is diagnostic only.
        assert_eq!(report.quality_score, 100);
    }

    #[test]
    fn test_missing_session_is_a_warning() {
        let mut lesson = lesson();
        lesson.metadata.session_id = "  ".to_string();

        let report = validate(&lesson);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.quality_score, 80);
    }

    #[test]
    fn test_missing_metadata_lowers_the_score() {
        let mut source = MockCurriculumSource::new();
        source.expect_alignment().returning(|_, _| None);
        let mut assembler = LessonAssembler::new(UniquenessTracker::seeded(2), Arc::new(source));
        let mut lesson = assembler.generate(&LessonConfig {
            subject: "science".to_string(),
            skill_area: "plants".to_string(),
            grade_level: 1,
            learning_style: None,
            session_id: "s1".to_string(),
        });
        for activity in &mut lesson.activities {
            activity.content.learning_style_adaptation = None;
        }

        let report = validate(&lesson);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.quality_score, 25 + 20 + 10);
    }

    #[test]
    fn test_too_few_phases_is_an_error() {
        let mut lesson = lesson();
        let dropped = lesson.activities.pop().unwrap();
        lesson.total_duration_seconds -= dropped.duration_seconds;

        let report = validate(&lesson);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("5 phases")));
        assert_eq!(report.quality_score, 90);
    }

    #[test]
    fn test_out_of_range_phase_and_order_are_warnings() {
        let mut lesson = lesson();
        lesson.activities.swap(0, 5);
        lesson.activities[2].duration_seconds -= 150;
        lesson.activities[3].duration_seconds += 150;

        let report = validate(&lesson);
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(report.warnings.iter().any(|w| w.contains("interactive-game")));
        assert!(report.warnings.iter().any(|w| w.contains("canonical order")));
        assert_eq!(report.quality_score, 100);
    }

    #[test]
    fn test_huge_phase_durations_are_reported_not_wrapped() {
        let mut lesson = lesson();
        let total = lesson.total_duration_seconds;
        let rest: u32 = lesson.activities[2..].iter().map(|a| a.duration_seconds).sum();
        // In 32 bits these two would wrap back to exactly the declared total.
        lesson.activities[0].duration_seconds = u32::MAX;
        lesson.activities[1].duration_seconds = total + 1 - rest;

        let report = validate(&lesson);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("does not match")));
        assert!(report.warnings.iter().any(|w| w.contains("introduction")));
    }
}
