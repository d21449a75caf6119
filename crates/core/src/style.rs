//! Learning-Style Adjuster
//!
//! Each learning style stretches the lesson by a small multiplier and carries
//! descriptors that tell the renderer how to present content.

use crate::error::TagError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    #[default]
    Mixed,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
        LearningStyle::Mixed,
    ];

    /// The static profile for this style.
    pub fn profile(self) -> &'static LearningStyleProfile {
        &PROFILES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            "mixed" => Ok(LearningStyle::Mixed),
            _ => Err(TagError::UnknownLearningStyle(s.to_string())),
        }
    }
}

/// Duration and presentation settings for one learning style.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningStyleProfile {
    pub style: LearningStyle,
    /// Applied to the baseline lesson length. Always within 1.0..=1.2.
    pub duration_multiplier: f64,
    pub content_format: &'static str,
    pub activity_type: &'static str,
    pub tips: &'static [&'static str],
}

/// Indexed by `LearningStyle as usize`.
const PROFILES: [LearningStyleProfile; 4] = [
    LearningStyleProfile {
        style: LearningStyle::Visual,
        duration_multiplier: 1.1,
        content_format: "diagrams, charts and color-coded illustrations",
        activity_type: "drawing, sorting pictures and matching visuals",
        tips: &[
            "Pair every new idea with a picture",
            "Highlight key words in color",
            "Use graphic organizers to show relationships",
        ],
    },
    LearningStyleProfile {
        style: LearningStyle::Auditory,
        duration_multiplier: 1.0,
        content_format: "narrated explanations, rhymes and discussion",
        activity_type: "call-and-response, listening games and retelling",
        tips: &[
            "Read instructions aloud",
            "Use rhythm or rhyme to anchor facts",
            "Invite the learner to explain ideas back in their own words",
        ],
    },
    LearningStyleProfile {
        style: LearningStyle::Kinesthetic,
        duration_multiplier: 1.1,
        content_format: "hands-on manipulatives and movement cues",
        activity_type: "building, acting out and physical sorting",
        tips: &[
            "Let the learner touch or move objects",
            "Break work into short active bursts",
            "Turn practice into a movement game",
        ],
    },
    LearningStyleProfile {
        style: LearningStyle::Mixed,
        duration_multiplier: 1.05,
        content_format: "a blend of visuals, narration and hands-on practice",
        activity_type: "rotating stations across seeing, hearing and doing",
        tips: &[
            "Alternate between showing, telling and doing",
            "Offer a choice of how to respond",
        ],
    },
];

/// Style metadata attached to every generated phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LearningStyleAdaptation {
    pub style: LearningStyle,
    pub duration_multiplier: f64,
    pub content_format: String,
    pub activity_type: String,
    pub tips: Vec<String>,
}

impl From<&LearningStyleProfile> for LearningStyleAdaptation {
    fn from(profile: &LearningStyleProfile) -> Self {
        Self {
            style: profile.style,
            duration_multiplier: profile.duration_multiplier,
            content_format: profile.content_format.to_string(),
            activity_type: profile.activity_type.to_string(),
            tips: profile.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{MAX_LESSON_SECONDS, MIN_LESSON_SECONDS, target_total};
    use approx::assert_relative_eq;

    #[test]
    fn test_profiles_are_indexed_by_style() {
        for style in LearningStyle::ALL {
            assert_eq!(style.profile().style, style);
        }
    }

    #[test]
    fn test_multipliers_stay_in_range_and_inside_window() {
        for style in LearningStyle::ALL {
            let m = style.profile().duration_multiplier;
            assert!((1.0..=1.2).contains(&m), "{style} multiplier {m}");
            let raw = (1350.0 * m).floor() as u32;
            assert!((MIN_LESSON_SECONDS..=MAX_LESSON_SECONDS).contains(&raw));
            assert_eq!(target_total(m), raw);
        }
    }

    #[test]
    fn test_visual_multiplier() {
        assert_relative_eq!(LearningStyle::Visual.profile().duration_multiplier, 1.1);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("VISUAL".parse::<LearningStyle>(), Ok(LearningStyle::Visual));
        assert_eq!(" kinesthetic ".parse::<LearningStyle>(), Ok(LearningStyle::Kinesthetic));
        assert_eq!(
            "musical".parse::<LearningStyle>(),
            Err(TagError::UnknownLearningStyle("musical".to_string()))
        );
    }

    #[test]
    fn test_default_style_is_mixed() {
        assert_eq!(LearningStyle::default(), LearningStyle::Mixed);
    }

    #[test]
    fn test_adaptation_copies_profile_descriptors() {
        let adaptation = LearningStyleAdaptation::from(LearningStyle::Auditory.profile());
        assert_eq!(adaptation.style, LearningStyle::Auditory);
        assert_eq!(adaptation.content_format, LearningStyle::Auditory.profile().content_format);
        assert_eq!(adaptation.tips.len(), 3);
    }
}
