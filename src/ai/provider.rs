//! Provider trait
//!
//! The seam between the HTTP layer and completion backends. Implementations
//! return plain strings; normalization (e.g. lowercasing sentiment labels)
//! happens at the HTTP layer.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatMessage;

/// A completion backend.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Produces the next assistant turn for a conversation.
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<String>;

    /// Generates text from a prompt, optionally steered by a system prompt.
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        model: &str,
    ) -> Result<String>;

    /// Classifies sentiment; expected to answer positive, negative, or
    /// neutral, though real providers may add punctuation or casing.
    async fn sentiment(&self, text: &str) -> Result<String>;

    /// Summarizes text to approximately `max_length` characters.
    async fn summarize(&self, text: &str, max_length: usize) -> Result<String>;
}
