//! Curriculum Lookup
//!
//! Maps a grade level and subject to the curriculum standard a lesson is
//! aligned with. Lessons for combinations the source does not cover are simply
//! generated without alignment metadata.

use crate::pool::Subject;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Highest grade the engine recognises (kindergarten is grade 0).
pub const MAX_GRADE_LEVEL: u8 = 12;

/// Groups of adjacent grades that share content complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    /// Kindergarten through grade 2.
    EarlyElementary,
    /// Grades 3 to 5.
    UpperElementary,
    /// Grades 6 to 8.
    MiddleSchool,
    /// Grades 9 to 12.
    HighSchool,
}

impl GradeBand {
    /// The band containing `grade_level`, or `None` outside K-12.
    pub fn from_grade(grade_level: u8) -> Option<GradeBand> {
        match grade_level {
            0..=2 => Some(GradeBand::EarlyElementary),
            3..=5 => Some(GradeBand::UpperElementary),
            6..=8 => Some(GradeBand::MiddleSchool),
            9..=MAX_GRADE_LEVEL => Some(GradeBand::HighSchool),
            _ => None,
        }
    }

    /// Short code used in standard identifiers.
    pub fn code(self) -> &'static str {
        match self {
            GradeBand::EarlyElementary => "K-2",
            GradeBand::UpperElementary => "3-5",
            GradeBand::MiddleSchool => "6-8",
            GradeBand::HighSchool => "9-12",
        }
    }

    /// How much reading and abstraction generated copy may assume.
    pub fn vocabulary_level(self) -> &'static str {
        match self {
            GradeBand::EarlyElementary => "simple words, short sentences and picture support",
            GradeBand::UpperElementary => {
                "grade-level vocabulary with new terms defined in context"
            }
            GradeBand::MiddleSchool => "subject vocabulary and multi-step reasoning",
            GradeBand::HighSchool => "academic language, evidence and abstraction",
        }
    }
}

/// Curriculum metadata attached to a generated phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurriculumAlignment {
    pub standard_code: String,
    pub grade_level: u8,
    pub description: String,
    pub focus_skills: Vec<String>,
}

/// Defines the contract for anything that can align a lesson with a
/// curriculum.
///
/// The assembler only needs a lookup, so a source can be a static table, a
/// district-specific catalogue, or a test double.
#[cfg_attr(test, mockall::automock)]
pub trait CurriculumSource: Send + Sync {
    /// Returns the alignment for `(grade_level, subject)`, if the source has
    /// one.
    fn alignment(&self, grade_level: u8, subject: Subject) -> Option<CurriculumAlignment>;
}

/// The built-in curriculum table, one entry per grade band and subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCurriculum;

struct BandEntry {
    band: GradeBand,
    subject: Subject,
    description: &'static str,
    focus_skills: [&'static str; 3],
}

const TABLE: [BandEntry; 16] = [
    BandEntry {
        band: GradeBand::EarlyElementary,
        subject: Subject::Mathematics,
        description: "Count, compare and combine whole numbers; recognise shapes and patterns.",
        focus_skills: [
            "counting and cardinality",
            "addition and subtraction within 100",
            "basic shapes",
        ],
    },
    BandEntry {
        band: GradeBand::UpperElementary,
        subject: Subject::Mathematics,
        description: "Multiply and divide fluently, reason about fractions, measure with units.",
        focus_skills: [
            "multiplication and division",
            "fractions as numbers",
            "measurement and data",
        ],
    },
    BandEntry {
        band: GradeBand::MiddleSchool,
        subject: Subject::Mathematics,
        description: "Work with ratios, rational numbers and expressions; describe data.",
        focus_skills: [
            "ratios and proportional reasoning",
            "expressions and equations",
            "statistics",
        ],
    },
    BandEntry {
        band: GradeBand::HighSchool,
        subject: Subject::Mathematics,
        description: "Model with functions, reason algebraically, prove geometric relationships.",
        focus_skills: ["functions and modelling", "algebraic reasoning", "geometric proof"],
    },
    BandEntry {
        band: GradeBand::EarlyElementary,
        subject: Subject::Science,
        description: "Observe living things, weather and materials; ask questions about the world.",
        focus_skills: ["observation", "plants and animals", "weather patterns"],
    },
    BandEntry {
        band: GradeBand::UpperElementary,
        subject: Subject::Science,
        description: "Plan fair tests, describe energy and forces, and explain ecosystems.",
        focus_skills: ["fair testing", "energy and forces", "ecosystems"],
    },
    BandEntry {
        band: GradeBand::MiddleSchool,
        subject: Subject::Science,
        description: "Model matter, Earth systems and cells; analyse data from investigations.",
        focus_skills: ["structure of matter", "earth systems", "cells and organisms"],
    },
    BandEntry {
        band: GradeBand::HighSchool,
        subject: Subject::Science,
        description: "Use chemistry, physics and biology models to explain phenomena.",
        focus_skills: ["chemical reactions", "motion and energy", "heredity and evolution"],
    },
    BandEntry {
        band: GradeBand::EarlyElementary,
        subject: Subject::English,
        description: "Build phonics and fluency, retell stories, and write simple sentences.",
        focus_skills: ["phonics and word recognition", "retelling", "sentence writing"],
    },
    BandEntry {
        band: GradeBand::UpperElementary,
        subject: Subject::English,
        description: "Read closely for main idea and theme; write opinion and narrative pieces.",
        focus_skills: ["main idea and theme", "opinion writing", "vocabulary in context"],
    },
    BandEntry {
        band: GradeBand::MiddleSchool,
        subject: Subject::English,
        description: "Analyse arguments and author's craft; write with evidence from texts.",
        focus_skills: ["argument analysis", "author's craft", "evidence-based writing"],
    },
    BandEntry {
        band: GradeBand::HighSchool,
        subject: Subject::English,
        description: "Evaluate complex texts and rhetoric; produce research-backed writing.",
        focus_skills: ["rhetorical analysis", "research writing", "literary interpretation"],
    },
    BandEntry {
        band: GradeBand::EarlyElementary,
        subject: Subject::SocialStudies,
        description: "Explore families, communities, maps and the roles of community helpers.",
        focus_skills: ["community roles", "simple maps", "rules and responsibilities"],
    },
    BandEntry {
        band: GradeBand::UpperElementary,
        subject: Subject::SocialStudies,
        description: "Study regions, early history and how communities make economic choices.",
        focus_skills: ["geography of regions", "historical timelines", "needs, wants and trade"],
    },
    BandEntry {
        band: GradeBand::MiddleSchool,
        subject: Subject::SocialStudies,
        description: "Examine ancient civilisations, government structures and primary sources.",
        focus_skills: ["ancient civilisations", "forms of government", "primary sources"],
    },
    BandEntry {
        band: GradeBand::HighSchool,
        subject: Subject::SocialStudies,
        description: "Analyse historical causation, civic institutions and economic systems.",
        focus_skills: ["historical causation", "civic institutions", "economic systems"],
    },
];

impl CurriculumSource for StaticCurriculum {
    fn alignment(&self, grade_level: u8, subject: Subject) -> Option<CurriculumAlignment> {
        let band = GradeBand::from_grade(grade_level)?;
        let entry = TABLE
            .iter()
            .find(|e| e.band == band && e.subject == subject)?;

        Some(CurriculumAlignment {
            standard_code: format!(
                "{}.{}.G{}",
                subject.as_str().to_uppercase(),
                band.code(),
                grade_level
            ),
            grade_level,
            description: entry.description.to_string(),
            focus_skills: entry.focus_skills.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(GradeBand::from_grade(0), Some(GradeBand::EarlyElementary));
        assert_eq!(GradeBand::from_grade(3), Some(GradeBand::UpperElementary));
        assert_eq!(GradeBand::from_grade(8), Some(GradeBand::MiddleSchool));
        assert_eq!(GradeBand::from_grade(12), Some(GradeBand::HighSchool));
        assert_eq!(GradeBand::from_grade(13), None);
    }

    #[test]
    fn test_static_table_covers_every_grade_and_subject() {
        for grade in 0..=MAX_GRADE_LEVEL {
            for subject in Subject::ALL {
                let alignment = StaticCurriculum
                    .alignment(grade, subject)
                    .unwrap_or_else(|| panic!("missing grade {grade} {subject}"));
                assert_eq!(alignment.grade_level, grade);
                assert_eq!(alignment.focus_skills.len(), 3);
            }
        }
    }

    #[test]
    fn test_standard_code_format() {
        let alignment = StaticCurriculum.alignment(3, Subject::Mathematics).unwrap();
        assert_eq!(alignment.standard_code, "MATHEMATICS.3-5.G3");
        assert!(alignment.description.contains("fractions"));
    }

    #[test]
    fn test_out_of_range_grade_has_no_alignment() {
        assert!(StaticCurriculum.alignment(14, Subject::Science).is_none());
    }
}
