use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Reply style requested from the generation service.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Casual, Tone::Friendly];

    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
        }
    }

    /// Label shown in the tone selector.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tone::Professional => 0,
            Tone::Casual => 1,
            Tone::Friendly => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tone> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Tone {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Tone {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a single generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub email_content: String,
    pub tone: Tone,
}

impl ComposeRequest {
    pub fn new(email_content: impl Into<String>, tone: Tone) -> Self {
        Self {
            email_content: email_content.into(),
            tone,
        }
    }
}

/// Turn a response body into the reply text shown to the user.
///
/// A JSON string is unwrapped, any other JSON value is re-serialized
/// compactly, and a body that is not JSON at all is kept verbatim.
pub fn normalize_reply(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    }
}
