use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Exact match against `easy`, `medium` or `hard`; anything else,
    /// including a missing value, is `Medium`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("easy") => Difficulty::Easy,
            Some("hard") => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a quiz topic came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicSource {
    /// Picked from the built-in topic table or named by the caller.
    Catalog,
    /// The caller's free-form request, quoted verbatim in the prompt.
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSpec {
    pub difficulty: Difficulty,
    pub topic: String,
    pub source: TopicSource,
}

impl QuizSpec {
    pub fn catalog(difficulty: Difficulty, topic: impl Into<String>) -> Self {
        Self {
            difficulty,
            topic: topic.into(),
            source: TopicSource::Catalog,
        }
    }

    pub fn custom(difficulty: Difficulty, request: impl Into<String>) -> Self {
        Self {
            difficulty,
            topic: request.into(),
            source: TopicSource::Custom,
        }
    }
}
