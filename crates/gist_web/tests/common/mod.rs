#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, http::StatusCode, Router};
use gist_core::{
    ArticleExtractor, Completion, CompletionModel, CompletionRequest, CompletionUsage, Error,
    ExtractedArticle, PageFetcher, Result,
};
use gist_scraper::{ArticleResolver, SummaryManager};
use gist_web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Returns the URL itself as the page body.
#[derive(Default)]
pub struct EchoFetcher {
    pub calls: AtomicUsize,
}

#[async_trait]
impl PageFetcher for EchoFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(url.to_string())
    }
}

/// Fails on pages whose body mentions `no-article`.
pub struct KeywordExtractor;

impl ArticleExtractor for KeywordExtractor {
    fn extract(&self, html: &str, _url: &str) -> Result<ExtractedArticle> {
        if html.contains("no-article") {
            return Err(Error::Extraction("No readable article found".to_string()));
        }
        Ok(ExtractedArticle {
            title: format!("Article at {}", html),
            content_html: "<p>Some <a href=\"https://x.example\">linked</a> words</p>".to_string(),
        })
    }
}

/// Counts calls; refuses with 429 when the title mentions `rate-limit`.
#[derive(Debug, Default)]
pub struct StubModel {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CompletionModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.messages[3].content.contains("rate-limit") {
            return Err(Error::Model {
                status: Some(429),
                body: Some(json!({"error": {"message": "Rate limit reached", "type": "requests"}})),
                message: "rate limited".to_string(),
            });
        }
        Ok(Completion {
            text: format!("Docs for {}", request.messages[3].content),
            usage: CompletionUsage {
                prompt_tokens: 100,
                completion_tokens: 25,
                total_tokens: 125,
            },
        })
    }
}

pub struct Harness {
    pub app: Router,
    pub fetcher: Arc<EchoFetcher>,
    pub model: Arc<StubModel>,
}

pub fn harness() -> Harness {
    let fetcher = Arc::new(EchoFetcher::default());
    let model = Arc::new(StubModel::default());
    let resolver = ArticleResolver::new(fetcher.clone(), Arc::new(KeywordExtractor));
    let manager = SummaryManager::new(resolver, model.clone());
    Harness {
        app: create_app(AppState::new(manager)),
        fetcher,
        model,
    }
}

pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}
