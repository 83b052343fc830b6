use std::str::FromStr;
use std::sync::Arc;

use gist_core::{CompletionModel, Error, Result};

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    OpenAi,
    Dummy,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ModelKind::OpenAi),
            "dummy" => Ok(ModelKind::Dummy),
            other => Err(format!(
                "Unknown model backend: {}. Available: openai, dummy",
                other
            )),
        }
    }
}

/// Builds the completion client for `kind`. The OpenAI backend needs an API
/// key and fails with a configuration error without one.
pub fn create_model(kind: ModelKind, config: &Config) -> Result<Arc<dyn CompletionModel>> {
    let model: Arc<dyn CompletionModel> = match kind {
        ModelKind::OpenAi => {
            let api_key = config.require_api_key()?;
            Arc::new(OpenAiModel::new(api_key, config.base_url()?))
        }
        ModelKind::Dummy => Arc::new(DummyModel::new()),
    };
    tracing::info!("🧠 Completion model initialized (using {})", model.name());
    Ok(model)
}

pub(crate) fn missing_choice() -> Error {
    Error::model("Completion response contained no choices")
}
