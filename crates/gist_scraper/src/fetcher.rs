use async_trait::async_trait;
use gist_core::{Error, PageFetcher, Result};
use reqwest::Client;

/// Fetches pages over HTTP. Non-2xx responses are returned like any other
/// body; only transport failures are errors. No timeout is set.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to fetch {}: {}", url, e)))?;

        tracing::debug!(status = %response.status(), "Fetched page");

        response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body of {}: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability::ReadabilityExtractor;
    use crate::resolver::ArticleResolver;
    use crate::test_utils::ARTICLE_HTML;
    use axum::{http::StatusCode, response::Html, routing::get, Router};
    use std::sync::Arc;

    async fn spawn_not_found_site() -> String {
        let router = Router::new().route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, Html(ARTICLE_HTML)) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/gone", addr)
    }

    fn local_fetcher() -> HttpFetcher {
        HttpFetcher::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn test_fetch_returns_body_of_error_status() {
        let url = spawn_not_found_site().await;
        let html = local_fetcher().fetch(&url).await.unwrap();
        assert!(html.contains("Understanding Ownership"));
    }

    #[tokio::test]
    async fn test_resolve_page_served_with_error_status() {
        let url = spawn_not_found_site().await;
        let resolver = ArticleResolver::new(
            Arc::new(local_fetcher()),
            Arc::new(ReadabilityExtractor::new()),
        );

        let resolved = resolver.resolve(&url).await.unwrap();
        assert!(resolved.title.contains("Ownership"));
        assert!(resolved.prompt[4].content.contains("garbage collection"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_fetch_error() {
        let fetcher = HttpFetcher::new();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
