pub mod fetcher;
pub mod logging;
pub mod manager;
pub mod prompt;
pub mod readability;
pub mod resolver;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use fetcher::HttpFetcher;
pub use logging::init_logging;
pub use manager::{SummaryManager, DEFAULT_MODEL, SUMMARY_TEMPERATURE};
pub use readability::ReadabilityExtractor;
pub use resolver::ArticleResolver;

pub mod prelude {
    pub use super::manager::SummaryManager;
    pub use super::resolver::ArticleResolver;
    pub use gist_core::{BatchResult, Error, Result, SummarizationRequest, UrlSummary};
}
