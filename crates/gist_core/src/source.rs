use async_trait::async_trait;
use crate::types::ExtractedArticle;
use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw HTML for `url`. Only transport failures are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ArticleExtractor: Send + Sync {
    /// Find the main readable article in `html`.
    fn extract(&self, html: &str, url: &str) -> Result<ExtractedArticle>;
}
