use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{ConversationTurn, Role};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "has_question"))]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    /// Older clients send the question as `query`.
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub history: Vec<HistoryEntry>,

    /// Text supplied by the caller, e.g. from an earlier `/upload`.
    #[serde(default)]
    pub context: Option<String>,
}

impl ChatRequest {
    /// `message` when present, otherwise `query`.
    pub fn question(&self) -> &str {
        [Some(self.message.as_str()), self.query.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .unwrap_or_default()
    }
}

fn has_question(request: &ChatRequest) -> Result<(), ValidationError> {
    not_blank(request.question()).map_err(|err| err.with_message("Message is required".into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryContent {
    Text(String),
    Parts(Vec<HistoryPart>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<HistoryContent>,
    #[serde(default)]
    pub parts: Option<Vec<HistoryPart>>,
}

impl From<HistoryEntry> for ConversationTurn {
    fn from(entry: HistoryEntry) -> Self {
        let role = Role::normalize(&entry.role);
        let parts = match (entry.parts, entry.content) {
            (Some(parts), _) => parts.into_iter().map(|part| part.text).collect(),
            (None, Some(HistoryContent::Parts(parts))) => {
                parts.into_iter().map(|part| part.text).collect()
            }
            (None, Some(HistoryContent::Text(text))) => vec![text],
            (None, None) => vec![String::new()],
        };
        ConversationTurn::new(role, parts)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomQuizRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Quiz request is required"))]
    pub request: String,

    #[serde(default)]
    pub difficulty: Option<String>,
}
