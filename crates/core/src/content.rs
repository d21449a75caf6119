//! Phase Content
//!
//! Every generated activity carries a payload with the items drawn for it, the
//! learning-style and curriculum metadata, and a phase-specific detail block.
//! The detail block is a tagged union, so each phase has its own fixed fields.

use crate::{
    curriculum::{CurriculumAlignment, GradeBand},
    phase::Phase,
    pool::{Category, ContentBundle, Subject},
    style::{LearningStyle, LearningStyleAdaptation},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The payload attached to one generated activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhaseContent {
    pub theme: String,
    pub scenario: String,
    pub activity: String,
    pub context: String,
    pub skill_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style_adaptation: Option<LearningStyleAdaptation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<CurriculumAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_band: Option<GradeBand>,
    pub detail: PhaseDetail,
}

/// Phase-specific fields, selected by the phase tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseDetail {
    Introduction(IntroductionContent),
    ContentDelivery(ContentDeliveryContent),
    InteractiveGame(InteractiveGameContent),
    Application(ApplicationContent),
    CreativeExploration(CreativeExplorationContent),
    Summary(SummaryContent),
}

impl PhaseDetail {
    /// The phase this detail block belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            PhaseDetail::Introduction(_) => Phase::Introduction,
            PhaseDetail::ContentDelivery(_) => Phase::ContentDelivery,
            PhaseDetail::InteractiveGame(_) => Phase::InteractiveGame,
            PhaseDetail::Application(_) => Phase::Application,
            PhaseDetail::CreativeExploration(_) => Phase::CreativeExploration,
            PhaseDetail::Summary(_) => Phase::Summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IntroductionContent {
    pub hook: String,
    pub objectives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentDeliveryContent {
    pub key_points: Vec<String>,
    pub worked_example: String,
    pub presentation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InteractiveGameContent {
    pub game_format: String,
    pub rounds: u8,
    pub challenge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationContent {
    pub tasks: Vec<String>,
    pub real_world_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreativeExplorationContent {
    pub prompt: String,
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryContent {
    pub recap: Vec<String>,
    pub reflection_question: String,
}

// --- Factory ---

/// Everything the factory needs to fill in one lesson's phases.
pub(crate) struct ContentContext<'a> {
    pub bundle: &'a ContentBundle,
    pub skill_area: &'a str,
    pub subject: Subject,
    pub style: LearningStyle,
    pub grade_band: Option<GradeBand>,
    pub curriculum: Option<&'a CurriculumAlignment>,
}

impl ContentContext<'_> {
    /// Builds the payload for the phase at `index` in canonical order.
    ///
    /// Bundle items rotate with the phase index, so neighbouring phases get
    /// different items from the same bundle.
    pub fn build(&self, phase: Phase, index: usize) -> PhaseContent {
        let items = RotatedItems {
            theme: self.bundle.rotating(Category::Themes, index),
            scenario: self.bundle.rotating(Category::Scenarios, index),
            activity: self.bundle.rotating(Category::Activities, index),
            context: self.bundle.rotating(Category::Contexts, index),
        };
        let detail = self.detail(phase, &items);

        PhaseContent {
            theme: items.theme,
            scenario: items.scenario,
            activity: items.activity,
            context: items.context,
            skill_area: self.skill_area.to_string(),
            learning_style_adaptation: Some(LearningStyleAdaptation::from(self.style.profile())),
            curriculum: self.curriculum.cloned(),
            grade_band: self.grade_band,
            detail,
        }
    }

    fn detail(&self, phase: Phase, items: &RotatedItems) -> PhaseDetail {
        let skill = self.skill_area;
        let profile = self.style.profile();
        let RotatedItems {
            theme,
            scenario,
            activity,
            context,
        } = items;

        match phase {
            Phase::Introduction => PhaseDetail::Introduction(IntroductionContent {
                hook: format!("Welcome to {theme}! Today we are {scenario} {context}."),
                objectives: vec![
                    format!("Understand {skill} through {theme}"),
                    format!("Practice {skill} with {activity}"),
                    format!("Explain one new idea about {skill} in your own words"),
                ],
            }),
            Phase::ContentDelivery => PhaseDetail::ContentDelivery(ContentDeliveryContent {
                key_points: vec![
                    format!("What {skill} means in {}", self.subject.display_name()),
                    format!("How {skill} helps when {scenario}"),
                    format!("Common mistakes to watch for with {skill}"),
                ],
                worked_example: format!("Step by step: {scenario} {context}."),
                presentation: match self.grade_band {
                    Some(band) => {
                        format!("{} using {}", profile.content_format, band.vocabulary_level())
                    }
                    None => profile.content_format.to_string(),
                },
            }),
            Phase::InteractiveGame => PhaseDetail::InteractiveGame(InteractiveGameContent {
                game_format: format!("{activity} ({})", profile.activity_type),
                rounds: rounds_for(self.grade_band),
                challenge: format!("Use {skill} to help with {scenario} before time runs out"),
            }),
            Phase::Application => PhaseDetail::Application(ApplicationContent {
                tasks: vec![
                    format!("Solve a {theme} problem about {scenario}"),
                    format!("Check your answer with a partner using {activity}"),
                    format!("Make up your own {skill} question set {context}"),
                ],
                real_world_link: format!("Where you might use {skill} {context}"),
            }),
            Phase::CreativeExploration => {
                PhaseDetail::CreativeExploration(CreativeExplorationContent {
                    prompt: format!("Invent something new for {theme} that shows {skill}"),
                    choices: creative_choices(self.style, theme),
                })
            }
            Phase::Summary => PhaseDetail::Summary(SummaryContent {
                recap: self
                    .bundle
                    .themes
                    .iter()
                    .map(|t| format!("In {t} we practised {skill}"))
                    .collect(),
                reflection_question: format!(
                    "What would you do differently next time you are {scenario}?"
                ),
            }),
        }
    }
}

struct RotatedItems {
    theme: String,
    scenario: String,
    activity: String,
    context: String,
}

fn rounds_for(band: Option<GradeBand>) -> u8 {
    match band {
        Some(GradeBand::EarlyElementary) => 3,
        Some(GradeBand::UpperElementary) | None => 4,
        Some(GradeBand::MiddleSchool) | Some(GradeBand::HighSchool) => 5,
    }
}

fn creative_choices(style: LearningStyle, theme: &str) -> Vec<String> {
    let draw = format!("Design a poster for {theme}");
    let tell = format!("Record a short story or song about {theme}");
    let build = format!("Build a model from {theme}");
    match style {
        LearningStyle::Visual => vec![draw, format!("Make a comic strip set in {theme}")],
        LearningStyle::Auditory => vec![tell, format!("Host a mini podcast about {theme}")],
        LearningStyle::Kinesthetic => vec![build, format!("Act out a scene from {theme}")],
        LearningStyle::Mixed => vec![draw, tell, build],
    }
}
