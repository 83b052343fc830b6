use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use gist_core::{
    BatchResult, CompletionModel, CompletionRequest, Error, Result, SummarizationRequest,
    UrlSummary,
};
use tokio::sync::Semaphore;
use tracing::Instrument;

use crate::resolver::ArticleResolver;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const SUMMARY_TEMPERATURE: f32 = 0.4;

/// Fans a batch of URLs out to concurrent summarization tasks.
///
/// Every URL runs in its own tokio task. The batch fails as soon as any task
/// fails; tasks still in flight are detached and their results dropped.
pub struct SummaryManager {
    resolver: Arc<ArticleResolver>,
    model: Arc<dyn CompletionModel>,
    model_name: String,
    temperature: f32,
    semaphore: Option<Arc<Semaphore>>,
}

#[derive(Clone)]
struct UnitContext {
    resolver: Arc<ArticleResolver>,
    model: Arc<dyn CompletionModel>,
    model_name: String,
    temperature: f32,
    semaphore: Option<Arc<Semaphore>>,
}

impl SummaryManager {
    pub fn new(resolver: ArticleResolver, model: Arc<dyn CompletionModel>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            model,
            model_name: DEFAULT_MODEL.to_string(),
            temperature: SUMMARY_TEMPERATURE,
            semaphore: None,
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Caps how many URLs are processed at once. Unbounded by default.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.semaphore = Some(Arc::new(Semaphore::new(limit.max(1))));
        self
    }

    fn context(&self) -> UnitContext {
        UnitContext {
            resolver: self.resolver.clone(),
            model: self.model.clone(),
            model_name: self.model_name.clone(),
            temperature: self.temperature,
            semaphore: self.semaphore.clone(),
        }
    }

    /// Summarizes every URL of the request. Results keep input order.
    pub async fn summarize(&self, request: &SummarizationRequest) -> Result<BatchResult> {
        let urls = request.urls();

        if let Some(index) = urls.iter().position(|url| url.trim().is_empty()) {
            tracing::error!(index, "Blank URL in batch");
            return Err(Error::InvalidUrl("Invalid URL provided.".to_string()));
        }

        tracing::info!("📰 Summarizing {} url(s) with {}", urls.len(), self.model.name());

        let mut tasks: FuturesUnordered<_> = urls
            .iter()
            .enumerate()
            .map(|(index, url)| {
                let span = tracing::info_span!("summarize", url = %url);
                let handle = tokio::spawn(summarize_url(self.context(), url.clone()).instrument(span));
                async move { (index, handle.await) }
            })
            .collect();

        let mut slots: Vec<Option<UrlSummary>> = vec![None; urls.len()];
        while let Some((index, joined)) = tasks.next().await {
            let summary = joined.map_err(|e| Error::External(e.into()))??;
            slots[index] = Some(summary);
        }

        let batch = BatchResult {
            results: slots.into_iter().flatten().collect(),
        };
        tracing::info!("✅ Batch completed, {} total tokens", batch.total_usage().total_tokens);

        Ok(batch)
    }
}

async fn summarize_url(ctx: UnitContext, url: String) -> Result<UrlSummary> {
    let result = run_unit(&ctx, &url).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Summarization failed");
    }
    result
}

async fn run_unit(ctx: &UnitContext, url: &str) -> Result<UrlSummary> {
    let _permit = match &ctx.semaphore {
        Some(semaphore) => Some(
            semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| Error::External(e.into()))?,
        ),
        None => None,
    };

    let article = ctx.resolver.resolve(url.trim()).await?;
    tracing::info!("🤖 Requesting summary for: {}", article.title);

    let request = CompletionRequest {
        model: ctx.model_name.clone(),
        messages: article.prompt,
        temperature: ctx.temperature,
    };
    let completion = ctx.model.complete(&request).await?;
    tracing::info!(
        prompt_tokens = completion.usage.prompt_tokens,
        completion_tokens = completion.usage.completion_tokens,
        "✨ Summary generated"
    );

    Ok(UrlSummary {
        url: url.to_string(),
        summary: completion.text,
        usage: completion.usage,
        title: article.title,
    })
}
