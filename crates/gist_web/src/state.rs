use std::sync::Arc;

use gist_core::{Error, Result};
use gist_inference::MISSING_KEY_MESSAGE;
use gist_scraper::SummaryManager;

/// Shared handler state. Without a summarizer the service is unconfigured and
/// every request is refused with the stored reason.
#[derive(Clone)]
pub struct AppState {
    summarizer: std::result::Result<Arc<SummaryManager>, String>,
}

impl AppState {
    pub fn new(summarizer: SummaryManager) -> Self {
        Self {
            summarizer: Ok(Arc::new(summarizer)),
        }
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            summarizer: Err(reason.into()),
        }
    }

    /// Unconfigured state for a missing API key.
    pub fn missing_api_key() -> Self {
        Self::unconfigured(MISSING_KEY_MESSAGE)
    }

    pub fn summarizer(&self) -> Result<&SummaryManager> {
        match &self.summarizer {
            Ok(summarizer) => Ok(summarizer.as_ref()),
            Err(reason) => Err(Error::Configuration(reason.clone())),
        }
    }
}
