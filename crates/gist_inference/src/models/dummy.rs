use std::fmt;

use gist_core::{Completion, CompletionModel, CompletionRequest, CompletionUsage, Result, Role};

/// Offline model: echoes the first words of the last user turn.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let last_user = request
            .messages
            .iter()
            .rev()
            .find(|turn| turn.role == Role::User)
            .ok_or_else(super::missing_choice)?;

        // Take first 20 words and join them
        let text = last_user
            .content
            .split_whitespace()
            .take(20)
            .collect::<Vec<_>>()
            .join(" ");

        let prompt_tokens = request
            .messages
            .iter()
            .map(|turn| turn.content.split_whitespace().count() as u32)
            .sum::<u32>();
        let completion_tokens = text.split_whitespace().count() as u32;

        Ok(Completion {
            text,
            usage: CompletionUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
        })
    }
}
