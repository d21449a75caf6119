//! Lesson Engine
//!
//! The object a host application wires up once and calls for every lesson. It
//! owns the session registry (through the tracker) and the assembler, and
//! exposes the engine's four operations.

use crate::{
    assembler::{LessonAssembler, LessonConfig, LessonResult},
    curriculum::{CurriculumSource, StaticCurriculum},
    uniqueness::{UniquenessTracker, UsageStats},
    validator::{self, ValidationReport},
};
use std::sync::Arc;

pub struct LessonEngine {
    assembler: LessonAssembler,
}

impl LessonEngine {
    pub fn new(tracker: UniquenessTracker, curriculum: Arc<dyn CurriculumSource>) -> Self {
        Self {
            assembler: LessonAssembler::new(tracker, curriculum),
        }
    }

    /// An engine with the built-in curriculum whose draws are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(UniquenessTracker::seeded(seed), Arc::new(StaticCurriculum))
    }

    /// Callers must not pass a blank subject; skip the call instead.
    pub fn generate_lesson(&mut self, config: &LessonConfig) -> LessonResult {
        self.assembler.generate(config)
    }

    pub fn validate_lesson(&self, lesson: &LessonResult) -> ValidationReport {
        validator::validate(lesson)
    }

    pub fn clear_session_history(&mut self, session_id: &str) {
        self.assembler.tracker_mut().clear_session_history(session_id);
    }

    pub fn usage_stats(&self) -> UsageStats {
        self.assembler.tracker().usage_stats()
    }
}

impl Default for LessonEngine {
    fn default() -> Self {
        Self::new(UniquenessTracker::default(), Arc::new(StaticCurriculum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LearningStyle;

    fn config(session: &str) -> LessonConfig {
        LessonConfig {
            subject: "english".to_string(),
            skill_area: "main idea".to_string(),
            grade_level: 4,
            learning_style: Some(LearningStyle::Auditory),
            session_id: session.to_string(),
        }
    }

    #[test]
    fn test_generate_then_validate() {
        let mut engine = LessonEngine::seeded(1);
        let lesson = engine.generate_lesson(&config("s1"));
        let report = engine.validate_lesson(&lesson);
        assert!(report.is_valid);
        assert_eq!(lesson.target_duration_seconds, 1350);
        assert_eq!(lesson.total_duration_seconds, 1349);
    }

    #[test]
    fn test_clear_history_allows_earlier_themes_again() {
        let mut engine = LessonEngine::seeded(2);
        engine.generate_lesson(&config("s1"));
        engine.generate_lesson(&config("s2"));
        engine.clear_session_history("s1");

        let stats = engine.usage_stats();
        assert_eq!(stats.total_sessions, 2);
        let s1 = stats.sessions.iter().find(|s| s.session_id == "s1").unwrap();
        assert_eq!(s1.themes_used, 0);
        assert_eq!(s1.generations, 0);
        let s2 = stats.sessions.iter().find(|s| s.session_id == "s2").unwrap();
        assert_eq!(s2.themes_used, 3);
    }

    #[test]
    fn test_seeded_engines_pick_the_same_content() {
        let mut a = LessonEngine::seeded(99);
        let mut b = LessonEngine::seeded(99);
        let left = a.generate_lesson(&config("s1"));
        let right = b.generate_lesson(&config("s1"));
        let themes = |l: &LessonResult| -> Vec<String> {
            l.activities.iter().map(|x| x.content.theme.clone()).collect()
        };
        assert_eq!(themes(&left), themes(&right));
    }
}
