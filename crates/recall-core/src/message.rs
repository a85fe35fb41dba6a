use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

impl Role {
    /// Parse the speaker header used in transcript files (`Human`, `Assistant`).
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Human" => Some(Role::Human),
            "Assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    /// Label used when rendering extracted messages.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Human => "HUMAN",
            Role::Assistant => "CLAUDE",
        }
    }
}

/// A single text message recovered from a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// The message text cut to `max_chars` characters, with a trailing `...`
    /// when anything was removed.
    pub fn truncated_text(&self, max_chars: Option<usize>) -> String {
        match max_chars {
            Some(max) => truncate_chars(&self.text, max),
            None => self.text.clone(),
        }
    }

    /// Render as a `[ROLE]:` block.
    pub fn render(&self, max_chars: Option<usize>) -> String {
        format!("\n[{}]:\n{}\n", self.role.label(), self.truncated_text(max_chars))
    }
}

/// Cut `s` to `max` characters, appending `...` if anything was removed.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
