//! Lesson Assembler
//!
//! Combines the phase table, the learning-style adjuster and the uniqueness
//! tracker into a complete, ordered lesson. Generation always succeeds: any
//! metadata that cannot be resolved is left out of the result.

use crate::{
    budget,
    content::{ContentContext, PhaseContent},
    curriculum::{CurriculumSource, GradeBand},
    phase::Phase,
    pool::Subject,
    style::LearningStyle,
    uniqueness::UniquenessTracker,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

/// A request for one lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonConfig {
    /// Matched case-insensitively; unknown subjects use the mathematics pool.
    pub subject: String,
    /// Display label only; it does not affect content selection.
    pub skill_area: String,
    pub grade_level: u8,
    /// Defaults to `mixed` when absent.
    #[serde(default)]
    pub learning_style: Option<LearningStyle>,
    /// Partition key for content history.
    pub session_id: String,
}

/// One timed activity of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedActivity {
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    pub phase: Phase,
    pub phase_index: usize,
    pub title: String,
    pub duration_seconds: u32,
    pub content: PhaseContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonMetadata {
    /// The subject exactly as requested.
    pub subject: String,
    /// The subject whose content pool was used.
    pub content_subject: Subject,
    pub skill_area: String,
    pub grade_level: u8,
    pub learning_style: LearningStyle,
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
}

/// A generated lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonResult {
    /// In canonical phase order.
    pub activities: Vec<GeneratedActivity>,
    /// Sum of the activity durations.
    pub total_duration_seconds: u32,
    /// The budget before per-phase flooring.
    pub target_duration_seconds: u32,
    pub metadata: LessonMetadata,
}

/// Builds lessons from a uniqueness tracker and a curriculum source.
pub struct LessonAssembler {
    tracker: UniquenessTracker,
    curriculum: Arc<dyn CurriculumSource>,
}

impl LessonAssembler {
    pub fn new(tracker: UniquenessTracker, curriculum: Arc<dyn CurriculumSource>) -> Self {
        Self {
            tracker,
            curriculum,
        }
    }

    pub fn tracker(&self) -> &UniquenessTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut UniquenessTracker {
        &mut self.tracker
    }

    /// Generates a lesson for `config`.
    ///
    /// The declared total is the sum of the floored phase durations, which may
    /// sit a few seconds under the target. That drift is kept as is.
    #[instrument(
        name = "generate_lesson",
        skip_all,
        fields(subject = %config.subject, session_id = %config.session_id)
    )]
    pub fn generate(&mut self, config: &LessonConfig) -> LessonResult {
        let subject = Subject::resolve(&config.subject);
        let bundle = self.tracker.unique_content_for(subject, &config.session_id);

        let style = config.learning_style.unwrap_or_default();
        let target = budget::target_total(style.profile().duration_multiplier);
        let allocations = budget::allocate(target);

        let curriculum = self.curriculum.alignment(config.grade_level, subject);
        let ctx = ContentContext {
            bundle: &bundle,
            skill_area: &config.skill_area,
            subject,
            style,
            grade_band: GradeBand::from_grade(config.grade_level),
            curriculum: curriculum.as_ref(),
        };

        let activities: Vec<GeneratedActivity> = allocations
            .iter()
            .enumerate()
            .map(|(index, allocation)| {
                let content = ctx.build(allocation.phase, index);
                GeneratedActivity {
                    id: Uuid::new_v4(),
                    phase: allocation.phase,
                    phase_index: index,
                    title: format!("{}: {}", allocation.phase.label(), content.theme),
                    duration_seconds: allocation.seconds,
                    content,
                }
            })
            .collect();

        let total: u32 = activities.iter().map(|a| a.duration_seconds).sum();
        info!(
            %style,
            content_subject = %subject,
            grade_level = config.grade_level,
            target_seconds = target,
            total_seconds = total,
            "Lesson generated"
        );

        LessonResult {
            activities,
            total_duration_seconds: total,
            target_duration_seconds: target,
            metadata: LessonMetadata {
                subject: config.subject.clone(),
                content_subject: subject,
                skill_area: config.skill_area.clone(),
                grade_level: config.grade_level,
                learning_style: style,
                session_id: config.session_id.clone(),
                generated_at: Utc::now(),
            },
        }
    }
}
