use serde::{Deserialize, Serialize};

use crate::reply::Tone;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Where and how to reach the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (e.g., "http://localhost:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
    /// Connection timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u32>,
}

/// Initial form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Tone selected when the form opens.
    #[serde(default)]
    pub tone: Tone,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
        }
    }
}

/// Values supplied on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub tone: Option<Tone>,
    pub timeout_seconds: Option<u32>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.service.base_url = base_url;
        }
        if let Some(tone) = overrides.tone {
            self.defaults.tone = tone;
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.service.timeout_seconds = Some(timeout);
        }
    }
}
