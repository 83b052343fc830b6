pub mod error;
pub mod models;
pub mod source;
pub mod types;

pub use error::Error;
pub use models::CompletionModel;
pub use source::{ArticleExtractor, PageFetcher};
pub use types::{
    BatchResult, Completion, CompletionRequest, CompletionUsage, ExtractedArticle, PromptTurn,
    ResolvedArticle, Role, SummarizationRequest, UrlSummary, VALIDATION_MESSAGE,
};

pub type Result<T> = std::result::Result<T, Error>;
