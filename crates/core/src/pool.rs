//! Content Pool Registry
//!
//! Static reference content for every known subject. Each subject owns four
//! parallel category lists that the uniqueness tracker draws from. The lists
//! are never mutated; sampling only ever copies items out of them.

use crate::error::TagError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::warn;
use utoipa::ToSchema;

// --- Subjects ---

/// The closed set of subjects with their own content pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Science,
    English,
    SocialStudies,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::SocialStudies,
    ];

    /// Resolves a caller-supplied subject, falling back to mathematics for
    /// anything unrecognised.
    pub fn resolve(raw: &str) -> Subject {
        raw.parse().unwrap_or_else(|_| {
            warn!(subject = %raw, "Unknown subject, falling back to mathematics content pool");
            Subject::Mathematics
        })
    }

    /// The content pool for this subject.
    pub fn pool(self) -> &'static ContentPool {
        match self {
            Subject::Mathematics => &MATHEMATICS,
            Subject::Science => &SCIENCE,
            Subject::English => &ENGLISH,
            Subject::SocialStudies => &SOCIAL_STUDIES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Science => "science",
            Subject::English => "english",
            Subject::SocialStudies => "social_studies",
        }
    }

    /// Display name used in generated copy.
    pub fn display_name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English Language Arts",
            Subject::SocialStudies => "Social Studies",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mathematics" | "math" | "maths" => Ok(Subject::Mathematics),
            "science" => Ok(Subject::Science),
            "english" | "ela" | "reading" | "language arts" | "language_arts" => {
                Ok(Subject::English)
            }
            "social studies" | "social_studies" | "social-studies" | "history" => {
                Ok(Subject::SocialStudies)
            }
            _ => Err(TagError::UnknownSubject(s.to_string())),
        }
    }
}

// --- Categories ---

/// The four parallel lists every pool carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Themes,
    Scenarios,
    Activities,
    Contexts,
}

/// Sampling rules for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPolicy {
    /// Items drawn per request.
    pub sample_size: usize,
    /// Recycling starts once fewer than this many unused items remain.
    pub recycle_below: usize,
    /// Most-recent history entries kept when recycling.
    pub keep_on_recycle: usize,
    /// Longest a session's used list may grow.
    pub history_cap: usize,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Themes,
        Category::Scenarios,
        Category::Activities,
        Category::Contexts,
    ];

    pub fn policy(self) -> &'static CategoryPolicy {
        &POLICIES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Themes => "themes",
            Category::Scenarios => "scenarios",
            Category::Activities => "activities",
            Category::Contexts => "contexts",
        }
    }
}

const POLICIES: [CategoryPolicy; 4] = [
    CategoryPolicy {
        sample_size: 3,
        recycle_below: 2,
        keep_on_recycle: 5,
        history_cap: 20,
    },
    CategoryPolicy {
        sample_size: 5,
        recycle_below: 3,
        keep_on_recycle: 10,
        history_cap: 30,
    },
    CategoryPolicy {
        sample_size: 5,
        recycle_below: 3,
        keep_on_recycle: 10,
        history_cap: 30,
    },
    CategoryPolicy {
        sample_size: 3,
        recycle_below: 3,
        keep_on_recycle: 8,
        history_cap: 20,
    },
];

// --- Pools ---

/// Immutable reference content for one subject.
#[derive(Debug)]
pub struct ContentPool {
    pub themes: &'static [&'static str],
    pub scenarios: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub contexts: &'static [&'static str],
}

impl ContentPool {
    pub fn items(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Themes => self.themes,
            Category::Scenarios => self.scenarios,
            Category::Activities => self.activities,
            Category::Contexts => self.contexts,
        }
    }
}

/// A per-request selection of items from each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentBundle {
    pub themes: Vec<String>,
    pub scenarios: Vec<String>,
    pub activities: Vec<String>,
    pub contexts: Vec<String>,
}

impl ContentBundle {
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Themes => &self.themes,
            Category::Scenarios => &self.scenarios,
            Category::Activities => &self.activities,
            Category::Contexts => &self.contexts,
        }
    }

    pub(crate) fn items_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Themes => &mut self.themes,
            Category::Scenarios => &mut self.scenarios,
            Category::Activities => &mut self.activities,
            Category::Contexts => &mut self.contexts,
        }
    }

    /// The item for `index`, wrapping around the category. Empty when the
    /// category drew nothing.
    pub fn rotating(&self, category: Category, index: usize) -> String {
        let items = self.items(category);
        if items.is_empty() {
            return String::new();
        }
        items[index % items.len()].clone()
    }
}

static MATHEMATICS: ContentPool = ContentPool {
    themes: &[
        "Pizza Party Fractions",
        "Space Station Supplies",
        "Farmers Market Math",
        "Dinosaur Dig Measurements",
        "Ocean Explorer Counting",
        "Toy Shop Money",
        "Garden Patterns",
        "Sports Day Scores",
        "Bakery Batches",
        "Treasure Map Coordinates",
        "Zoo Keeper Schedules",
        "Robot Factory Shapes",
        "Rainforest Expedition",
        "City Builder Blueprints",
        "Music Beats and Rhythm",
        "Camping Trip Planning",
        "Weather Station Data",
        "Art Gallery Symmetry",
        "Train Station Timetables",
        "Recycling Drive Tallies",
    ],
    scenarios: &[
        "sharing a pizza equally among friends",
        "packing crates for a rocket launch",
        "pricing fruit at a market stall",
        "measuring fossil bones at a dig site",
        "counting fish during a reef survey",
        "making change at a toy shop register",
        "planting rows of seeds in a garden bed",
        "keeping score at a relay race",
        "doubling a cookie recipe for a bake sale",
        "plotting a route to buried treasure",
        "planning feeding times at the zoo",
        "assembling robots from basic shapes",
        "rationing water on a jungle trek",
        "designing a park on grid paper",
        "counting beats in a drum pattern",
        "splitting camping gear between backpacks",
        "recording a week of temperatures",
        "hanging paintings so the wall is balanced",
        "working out when the next train arrives",
        "tallying cans collected by each class",
    ],
    activities: &[
        "fraction strip matching",
        "number line hop",
        "shape sorting challenge",
        "money counting relay",
        "pattern building with blocks",
        "measurement scavenger hunt",
        "estimation jar guess",
        "bar graph builder",
        "times table bingo",
        "clock matching cards",
        "symmetry mirror drawing",
        "dice addition race",
        "coordinate grid battleship",
        "place value pocket chart",
        "word problem detective",
        "array building with counters",
        "balance scale puzzles",
        "tangram rebuild",
        "skip counting hopscotch",
        "unit conversion card swap",
    ],
    contexts: &[
        "in the kitchen at home",
        "on the school playground",
        "at the grocery store",
        "on a family road trip",
        "at a birthday party",
        "in a science museum",
        "at the local library",
        "during a soccer match",
        "in a community garden",
        "at the city zoo",
        "on a rainy day indoors",
        "at a neighborhood bake sale",
    ],
};

static SCIENCE: ContentPool = ContentPool {
    themes: &[
        "Volcano Investigators",
        "Life in a Tide Pool",
        "Journey Through the Solar System",
        "Backyard Bug Safari",
        "The Water Cycle Adventure",
        "Magnet Mysteries",
        "Seeds to Sunflowers",
        "Weather Watchers",
        "Rock Collectors Club",
        "Light and Shadow Lab",
        "Sound Wave Studio",
        "Animal Habitats Tour",
        "Human Body Explorers",
        "Simple Machines Workshop",
        "States of Matter Kitchen",
        "Rainforest Food Webs",
        "Arctic Ice Expedition",
        "Dinosaur Detectives",
        "Recycling Scientists",
        "Electric Circuit Builders",
    ],
    scenarios: &[
        "predicting when a model volcano will erupt",
        "counting creatures left by the low tide",
        "plotting a flight path past the planets",
        "identifying insects under a log",
        "following a raindrop from cloud to river",
        "testing which objects a magnet picks up",
        "tracking a bean sprout for two weeks",
        "reading a rain gauge after a storm",
        "sorting rocks by how they formed",
        "measuring shadows at different times of day",
        "making a string telephone",
        "matching animals to the places they live",
        "measuring heart rate before and after jumping",
        "lifting a heavy box with a lever",
        "melting ice cubes in different spots",
        "drawing who eats whom in the rainforest",
        "keeping a polar research camp warm",
        "reconstructing a skeleton from fossil clues",
        "sorting a bin of mixed recycling",
        "lighting a bulb with a battery and wire",
    ],
    activities: &[
        "prediction and observation chart",
        "sink or float test",
        "habitat diorama",
        "magnifying glass field study",
        "weather journal",
        "life cycle sequencing cards",
        "mystery box guessing",
        "classification sort",
        "build a model",
        "fair test planning sheet",
        "label the diagram race",
        "cause and effect dominoes",
        "nature scavenger hunt",
        "vocabulary charades",
        "data table recording",
        "experiment station rotation",
        "compare and contrast Venn diagram",
        "question generation brainstorm",
        "ecosystem role play",
        "scientist interview",
    ],
    contexts: &[
        "in a backyard garden",
        "at the beach",
        "in a classroom laboratory",
        "on a nature trail",
        "at a planetarium",
        "in the kitchen",
        "at a city park",
        "on a farm",
        "beside a pond",
        "at a natural history museum",
        "during a thunderstorm",
        "on a snowy morning",
    ],
};

static ENGLISH: ContentPool = ContentPool {
    themes: &[
        "Fairy Tale Remix",
        "Mystery at the Library",
        "Poetry in the Park",
        "Letters to a Pen Pal",
        "Superhero Comic Creators",
        "Animal Fable Theater",
        "Newsroom Reporters",
        "Pirate Adventure Journals",
        "Word Wizard Academy",
        "Folktales Around the World",
        "Time Traveler Diaries",
        "Detective Notebook",
        "Recipe Book Writers",
        "Campfire Storytellers",
        "Picture Book Illustrators",
        "Debate Club Showdown",
        "Travel Brochure Designers",
        "Ocean Myth Makers",
        "Invention Pitch Day",
        "Friendship Story Circle",
    ],
    scenarios: &[
        "retelling a fairy tale from the villain's view",
        "solving a missing book mystery from clues",
        "writing a poem about the sounds in a park",
        "answering a letter from a faraway friend",
        "planning a comic strip with a twist ending",
        "acting out a fable and finding its lesson",
        "reporting a school event as breaking news",
        "logging a day aboard a pirate ship",
        "inventing new words from prefixes and suffixes",
        "comparing two versions of the same folktale",
        "writing a diary entry from another century",
        "describing a suspect using vivid adjectives",
        "writing clear steps for a favorite recipe",
        "telling a story that builds suspense",
        "pairing sentences with picture book pages",
        "arguing both sides of a class question",
        "persuading visitors to explore a new place",
        "explaining the sea with a made-up myth",
        "pitching an invention to a panel",
        "resolving a disagreement between characters",
    ],
    activities: &[
        "story map planning",
        "sight word bingo",
        "character trait web",
        "rhyming word relay",
        "sentence building blocks",
        "readers theater",
        "vocabulary picture cards",
        "punctuation hunt",
        "story sequencing strips",
        "compound word match",
        "think-pair-share discussion",
        "main idea detective",
        "syllable clapping game",
        "letter writing workshop",
        "descriptive writing gallery",
        "book talk presentation",
        "context clue challenge",
        "synonym and antonym sort",
        "guided read-aloud",
        "creative caption writing",
    ],
    contexts: &[
        "in a cozy reading corner",
        "at the public library",
        "around a campfire",
        "in a newsroom",
        "on a theater stage",
        "in a bookshop",
        "at a poetry festival",
        "in a writer's notebook",
        "on a rainy afternoon",
        "in a castle tower",
        "aboard a sailing ship",
        "at a school assembly",
    ],
};

static SOCIAL_STUDIES: ContentPool = ContentPool {
    themes: &[
        "Community Helpers",
        "Maps and Globes Quest",
        "Ancient Egypt Explorers",
        "Building a Classroom Government",
        "Market Day Economics",
        "Families Around the World",
        "Landmarks Road Trip",
        "Pioneer Trail Journey",
        "Holidays and Traditions",
        "Rivers That Shaped Cities",
        "Inventors Who Changed History",
        "Voting Day Decisions",
        "Neighborhood Planners",
        "Trade Routes and Caravans",
        "Castles and Kingdoms",
        "National Parks Rangers",
        "Immigration Stories",
        "Then and Now Timelines",
        "Global Food Festival",
        "Citizens Who Made a Difference",
    ],
    scenarios: &[
        "interviewing a firefighter about their day",
        "finding a hidden town using a compass rose",
        "decoding a message written in hieroglyphs",
        "writing rules everyone in class agrees on",
        "trading goods without using money",
        "comparing breakfast in three countries",
        "planning stops on a cross-country trip",
        "packing a wagon for a long journey west",
        "sharing how a family celebrates a holiday",
        "explaining why a city grew beside a river",
        "ranking inventions by how much they changed life",
        "running a class election",
        "deciding where a new playground should go",
        "moving spices along an ancient trade route",
        "describing daily life inside a castle",
        "protecting wildlife in a national park",
        "following one family's move to a new country",
        "ordering photos of a town from oldest to newest",
        "planning a menu with dishes from every continent",
        "writing a thank-you note to a local hero",
    ],
    activities: &[
        "map scavenger hunt",
        "timeline building",
        "role play interview",
        "community walk journal",
        "artifact guessing game",
        "class vote simulation",
        "compare cultures chart",
        "landmark matching cards",
        "supply and demand market game",
        "primary source detective",
        "build a model town",
        "passport stamp stations",
        "cause and effect chain",
        "biography trading cards",
        "needs and wants sort",
        "compass direction relay",
        "oral history recording",
        "flag design studio",
        "problem-solution town hall",
        "map key creation",
    ],
    contexts: &[
        "in the local neighborhood",
        "at a town hall meeting",
        "in a history museum",
        "on a world map",
        "at a farmers market",
        "along a river valley",
        "in an ancient city",
        "at a cultural festival",
        "inside a public library",
        "on a pioneer trail",
        "in a national park",
        "at a port city harbor",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_subject_parsing_is_case_insensitive() {
        assert_eq!("MATHEMATICS".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!("Math".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!("Language Arts".parse::<Subject>(), Ok(Subject::English));
        assert_eq!("social_studies".parse::<Subject>(), Ok(Subject::SocialStudies));
        assert!(matches!(
            "underwater basket weaving".parse::<Subject>(),
            Err(TagError::UnknownSubject(_))
        ));
    }

    #[test]
    fn test_unknown_subject_resolves_to_mathematics() {
        assert_eq!(Subject::resolve("astrology"), Subject::Mathematics);
        assert_eq!(Subject::resolve("Science"), Subject::Science);
    }

    #[test]
    fn test_every_pool_can_fill_a_bundle_without_repeats() {
        for subject in Subject::ALL {
            for category in Category::ALL {
                let items = subject.pool().items(category);
                let policy = category.policy();
                assert!(
                    items.len() >= policy.sample_size + policy.keep_on_recycle,
                    "{subject} {} pool too small",
                    category.as_str()
                );
                let distinct: HashSet<_> = items.iter().collect();
                assert_eq!(
                    distinct.len(),
                    items.len(),
                    "{subject} has duplicate {}",
                    category.as_str()
                );
            }
        }
    }

    #[test]
    fn test_policies_keep_recycle_slice_below_cap() {
        for category in Category::ALL {
            let policy = category.policy();
            assert!(policy.keep_on_recycle < policy.history_cap);
            assert!(policy.sample_size <= policy.history_cap);
        }
    }

    #[test]
    fn test_rotating_wraps_and_tolerates_empty_lists() {
        let bundle = ContentBundle {
            themes: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        };
        assert_eq!(bundle.rotating(Category::Themes, 0), "a");
        assert_eq!(bundle.rotating(Category::Themes, 4), "b");
        assert_eq!(bundle.rotating(Category::Contexts, 2), "");
    }
}
