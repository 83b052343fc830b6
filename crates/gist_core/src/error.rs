use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    /// A completion-model failure. `status` and `body` are the upstream
    /// transport status and error payload when the service answered at all.
    #[error("Model error: {message}")]
    Model {
        status: Option<u16>,
        body: Option<serde_json::Value>,
        message: String,
    },

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    pub fn model(message: impl Into<String>) -> Self {
        Error::Model {
            status: None,
            body: None,
            message: message.into(),
        }
    }

    /// Upstream status and body to forward verbatim, if this error carries both.
    pub fn upstream_response(&self) -> Option<(u16, &serde_json::Value)> {
        match self {
            Error::Model {
                status: Some(status),
                body: Some(body),
                ..
            } => Some((*status, body)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
