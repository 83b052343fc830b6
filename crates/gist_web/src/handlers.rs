use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use gist_core::{BatchResult, Error, SummarizationRequest, VALIDATION_MESSAGE};
use serde_json::Value;

use crate::error::ApiError;
use crate::AppState;

/// `POST /api/generate`. Configuration is checked before the body is parsed.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BatchResult>, ApiError> {
    let summarizer = state.summarizer()?;

    let body: Value = serde_json::from_slice(&body)
        .map_err(|_| Error::Validation(VALIDATION_MESSAGE.to_string()))?;
    let request = SummarizationRequest::from_json(&body)?;

    let batch = summarizer.summarize(&request).await?;
    Ok(Json(batch))
}
