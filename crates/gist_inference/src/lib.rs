use std::fmt;

use gist_core::{Error, Result};

pub mod models;

pub use models::{create_model, ModelKind};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const MISSING_KEY_MESSAGE: &str = "OpenAI API key not configured, please set OPENAI_API_KEY";

/// Completion-model settings, usually read from the environment at startup.
#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Reads `OPENAI_API_KEY`, `OPENAI_MODEL` and `OPENAI_BASE_URL`. Empty
    /// values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_key: get("OPENAI_API_KEY"),
            model_name: get("OPENAI_MODEL"),
            base_url: get("OPENAI_BASE_URL"),
        }
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Configuration(MISSING_KEY_MESSAGE.to_string()))
    }

    pub fn base_url(&self) -> Result<String> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        url::Url::parse(raw)
            .map_err(|e| Error::Configuration(format!("Invalid base URL {}: {}", raw, e)))?;
        Ok(raw.trim_end_matches('/').to_string())
    }
}

pub mod prelude {
    pub use super::models::{create_model, ModelKind};
    pub use super::Config;
    pub use gist_core::{CompletionModel, Error, Result};
}
