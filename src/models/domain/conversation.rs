use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Only the exact string `user` is a user turn; every other role
    /// (`assistant`, `bot`, empty) is treated as the model.
    pub fn normalize(raw: &str) -> Self {
        if raw == "user" {
            Role::User
        } else {
            Role::Model
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One prior exchange unit handed to the model ahead of the new message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub parts: Vec<String>,
}

impl ConversationTurn {
    pub fn new(role: Role, parts: Vec<String>) -> Self {
        Self { role, parts }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![text.into()])
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![text.into()])
    }
}
