use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who spoke a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Receptionist,
    System,
}

/// One line of a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn guest(text: impl Into<String>) -> Self {
        Self::new(Role::Guest, text)
    }

    pub fn receptionist(text: impl Into<String>) -> Self {
        Self::new(Role::Receptionist, text)
    }
}
