use std::sync::Arc;

use gist_core::{ArticleExtractor, PageFetcher, ResolvedArticle, Result};

use crate::fetcher::HttpFetcher;
use crate::prompt::build_prompt;
use crate::readability::ReadabilityExtractor;
use crate::text::{remove_links, truncate_to_budget, DEFAULT_TOKEN_BUDGET};

/// Turns a URL into a ready-to-send prompt: fetch, extract, convert to
/// markdown, strip links, truncate, build.
pub struct ArticleResolver {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ArticleExtractor>,
    token_budget: usize,
}

impl ArticleResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, extractor: Arc<dyn ArticleExtractor>) -> Self {
        Self {
            fetcher,
            extractor,
            token_budget: DEFAULT_TOKEN_BUDGET,
        }
    }

    /// Resolver backed by the HTTP fetcher and the readability extractor.
    pub fn http() -> Self {
        Self::new(
            Arc::new(HttpFetcher::new()),
            Arc::new(ReadabilityExtractor::new()),
        )
    }

    pub fn with_token_budget(mut self, token_budget: usize) -> Self {
        self.token_budget = token_budget;
        self
    }

    pub async fn resolve(&self, url: &str) -> Result<ResolvedArticle> {
        let html = self.fetcher.fetch(url).await?;
        tracing::debug!(bytes = html.len(), "Page fetched");

        let article = self.extractor.extract(&html, url)?;
        tracing::debug!(title = %article.title, "Article extracted");

        let markdown = html_to_markdown(&article.content_html);
        let body = truncate_to_budget(&remove_links(&markdown), self.token_budget);

        Ok(ResolvedArticle {
            prompt: build_prompt(&article.title, &body),
            title: article.title,
        })
    }
}

fn html_to_markdown(html: &str) -> String {
    html2md::rewrite_html(html, false)
}
