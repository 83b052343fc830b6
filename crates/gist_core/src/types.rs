use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

pub const VALIDATION_MESSAGE: &str = "Please provide a valid URL or array of URLs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in the sequence sent to the completion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTurn {
    pub role: Role,
    pub content: String,
}

impl PromptTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Raw output of the readability pass, before markdown conversion.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    pub title: String,
    pub content_html: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedArticle {
    pub title: String,
    pub prompt: Vec<PromptTurn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptTurn>,
    pub temperature: f32,
}

/// Token counters as reported by the completion model. Not verified locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionUsage {
    /// Price of `total_tokens` at `rate_per_1k` currency units per 1000 tokens.
    pub fn cost(&self, rate_per_1k: f64) -> f64 {
        f64::from(self.total_tokens) / 1000.0 * rate_per_1k
    }
}

impl Add for CompletionUsage {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            prompt_tokens: self.prompt_tokens.saturating_add(rhs.prompt_tokens),
            completion_tokens: self.completion_tokens.saturating_add(rhs.completion_tokens),
            total_tokens: self.total_tokens.saturating_add(rhs.total_tokens),
        }
    }
}

impl Sum for CompletionUsage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a CompletionUsage> for CompletionUsage {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: CompletionUsage,
}

/// Summary of a single URL. Serializes to the flat wire shape of one
/// `results` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlSummary {
    pub url: String,
    #[serde(rename = "result")]
    pub summary: String,
    #[serde(flatten)]
    pub usage: CompletionUsage,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResult {
    pub results: Vec<UrlSummary>,
}

impl BatchResult {
    pub fn total_usage(&self) -> CompletionUsage {
        self.results.iter().map(|r| &r.usage).sum()
    }
}

/// Normalized list of URLs submitted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    urls: Vec<String>,
}

impl SummarizationRequest {
    pub fn new(urls: Vec<String>) -> Result<Self> {
        if urls.is_empty() {
            return Err(Error::Validation(VALIDATION_MESSAGE.to_string()));
        }
        Ok(Self { urls })
    }

    /// Reads the `urls` field of a request body. Falsy values count as
    /// missing and a bare string becomes a one-element list.
    pub fn from_json(body: &Value) -> Result<Self> {
        let invalid = || Error::Validation(VALIDATION_MESSAGE.to_string());

        let urls = match body.get("urls") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Vec::new(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Vec::new(),
            Some(Value::String(s)) if s.is_empty() => Vec::new(),
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(invalid()),
        };

        Self::new(urls)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}
