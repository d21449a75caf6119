//! Lesson Generation Engine
//!
//! Builds timed K-12 lessons out of six fixed phases. The engine budgets a
//! lesson's duration by learning style, draws session-unique thematic content
//! from per-subject pools, and validates the result against timing and
//! structural rules.

pub mod assembler;
pub mod budget;
pub mod content;
pub mod curriculum;
pub mod engine;
pub mod error;
pub mod phase;
pub mod pool;
pub mod style;
pub mod uniqueness;
pub mod validator;

pub use assembler::{GeneratedActivity, LessonConfig, LessonMetadata, LessonResult};
pub use engine::LessonEngine;
pub use error::TagError;
pub use pool::Subject;
pub use style::LearningStyle;
pub use uniqueness::UsageStats;
pub use validator::ValidationReport;
