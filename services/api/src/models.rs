//! API Models
//!
//! Request and response bodies specific to the HTTP surface. Lesson, report
//! and statistics bodies are the engine's own types.

use lesson_core::{LearningStyle, LessonConfig};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct GenerateLessonPayload {
    #[schema(example = "mathematics")]
    pub subject: String,
    #[schema(example = "fractions")]
    pub skill_area: String,
    #[schema(example = 3)]
    pub grade_level: u8,
    #[serde(default)]
    pub learning_style: Option<LearningStyle>,
    #[schema(example = "session-42")]
    pub session_id: String,
}

impl GenerateLessonPayload {
    /// Builds the engine request, filling in `default_style` when the payload
    /// names none.
    pub fn into_config(self, default_style: LearningStyle) -> LessonConfig {
        LessonConfig {
            subject: self.subject,
            skill_area: self.skill_area,
            grade_level: self.grade_level,
            learning_style: Some(self.learning_style.unwrap_or(default_style)),
            session_id: self.session_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_payload_deserialization() {
        let json = r#"{
            "subject": "Science",
            "skill_area": "plant life cycles",
            "grade_level": 2,
            "learning_style": "kinesthetic",
            "session_id": "abc"
        }"#;
        let payload: GenerateLessonPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.subject, "Science");
        assert_eq!(payload.grade_level, 2);
        assert_eq!(payload.learning_style, Some(LearningStyle::Kinesthetic));
    }

    #[test]
    fn test_generate_payload_style_is_optional() {
        let json = r#"{
            "subject": "math",
            "skill_area": "counting",
            "grade_level": 0,
            "session_id": "s"
        }"#;
        let payload: GenerateLessonPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.learning_style, None);

        let config = payload.into_config(LearningStyle::Visual);
        assert_eq!(config.learning_style, Some(LearningStyle::Visual));
        assert_eq!(config.subject, "math");
    }

    #[test]
    fn test_explicit_style_wins_over_default() {
        let payload = GenerateLessonPayload {
            subject: "english".to_string(),
            skill_area: "rhyme".to_string(),
            grade_level: 1,
            learning_style: Some(LearningStyle::Auditory),
            session_id: "s".to_string(),
        };
        let config = payload.into_config(LearningStyle::Visual);
        assert_eq!(config.learning_style, Some(LearningStyle::Auditory));
    }

    #[test]
    fn test_generate_payload_missing_field() {
        let json = r#"{"subject": "math"}"#;
        let result: Result<GenerateLessonPayload, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_learning_style_is_rejected() {
        let json = r#"{
            "subject": "math",
            "skill_area": "x",
            "grade_level": 1,
            "learning_style": "telepathic",
            "session_id": "s"
        }"#;
        let result: Result<GenerateLessonPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "subject is required".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        let expected = r#"{"message":"subject is required"}"#;
        assert_eq!(json, expected);
    }
}
