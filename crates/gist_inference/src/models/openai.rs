use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use gist_core::{Completion, CompletionModel, CompletionRequest, CompletionUsage, Error, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct OpenAiModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl OpenAiModel {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Arc::new(client);
        self
    }
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl CompletionModel for OpenAiModel {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::model(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Forwarded to the caller as-is, so keep non-JSON bodies readable.
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| json!({ "error": { "message": text } }));
            tracing::warn!(status = status.as_u16(), "Completion service returned an error");
            return Err(Error::Model {
                status: Some(status.as_u16()),
                body: Some(body),
                message: format!("Completion service returned {}", status),
            });
        }

        let response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| Error::model(format!("Malformed completion response: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(super::missing_choice)?;

        Ok(Completion {
            text: choice.message.content.unwrap_or_default(),
            usage: response.usage.unwrap_or_default(),
        })
    }
}
