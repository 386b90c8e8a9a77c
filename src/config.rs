//! Configuration. Load once at startup, from env or built by hand.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_API_BASE: &str = "https://api.openai.iniad.org/api/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Token budget for free-form questions.
pub const ASK_MAX_TOKENS: u32 = 500;
/// Token budget for fix suggestions.
pub const FIX_MAX_TOKENS: u32 = 300;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the OpenAI-compatible endpoint, without a trailing slash.
    pub api_base: String,
    pub model: String,
    /// `None` until the user configures one.
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("CODEGPT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: std::env::var("CODEGPT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_key: std::env::var("CODEGPT_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            request_timeout: Duration::from_secs(
                std::env::var("CODEGPT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// Store a key. Blank input is refused rather than stored.
    pub fn set_api_key(&mut self, value: &str) -> Result<(), Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingCredential);
        }
        self.api_key = Some(trimmed.to_string());
        Ok(())
    }

    /// Clear the stored key.
    pub fn reset_api_key(&mut self) {
        self.api_key = None;
    }

    /// The configured key, or `MissingCredential` if none is usable.
    pub fn api_key(&self) -> Result<&str, Error> {
        match self.api_key.as_deref() {
            Some(k) if !k.trim().is_empty() => Ok(k),
            _ => Err(Error::MissingCredential),
        }
    }
}
