use std::fmt;

use async_trait::async_trait;
use crate::types::{Completion, CompletionRequest};
use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    /// Human readable backend name, used in logs
    fn name(&self) -> &str;

    /// Run one chat completion over the given prompt turns
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}
