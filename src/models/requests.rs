//! Request DTOs for the AI endpoints
//!
//! Defines the structure of incoming HTTP request bodies. Each type carries
//! a `validate` returning an error message on the first violated bound,
//! mirroring the upstream schema limits.

use serde::{Deserialize, Serialize};

use crate::ai::SUPPORTED_MODELS;

const MAX_MESSAGES: usize = 50;
const MAX_CONTENT_CHARS: usize = 10_000;
const MAX_SYSTEM_PROMPT_CHARS: usize = 1_000;
const MAX_SENTIMENT_CHARS: usize = 5_000;
const MAX_SUMMARIZE_CHARS: usize = 50_000;
const MAX_SUMMARY_LENGTH: usize = 1_000;

// == Chat Message ==
/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced this message
    pub role: Role,
    /// Message text
    pub content: String,
}

/// Chat participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

// == Chat Request ==
/// Request body for POST /api/ai/chat.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Conversation so far, oldest first
    pub messages: Vec<ChatMessage>,
    /// Optional model override
    #[serde(default)]
    pub model: Option<String>,
    /// Optional sampling temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Optional completion token budget
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.messages.is_empty() {
            return Some("messages must contain at least 1 message".to_string());
        }
        if self.messages.len() > MAX_MESSAGES {
            return Some(format!("messages must contain at most {} messages", MAX_MESSAGES));
        }
        for message in &self.messages {
            if message.content.is_empty() {
                return Some("message content cannot be empty".to_string());
            }
            if message.content.chars().count() > MAX_CONTENT_CHARS {
                return Some(format!(
                    "message content exceeds maximum length of {} characters",
                    MAX_CONTENT_CHARS
                ));
            }
        }
        validate_model(self.model.as_deref())
            .or_else(|| validate_sampling(self.temperature, self.max_tokens))
    }
}

// == Generate Request ==
/// Request body for POST /api/ai/generate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// User prompt
    pub prompt: String,
    /// Optional system prompt prefixed to the conversation
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Optional model override
    #[serde(default)]
    pub model: Option<String>,
    /// Optional sampling temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Optional completion token budget
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.prompt.is_empty() {
            return Some("prompt cannot be empty".to_string());
        }
        if self.prompt.chars().count() > MAX_CONTENT_CHARS {
            return Some(format!(
                "prompt exceeds maximum length of {} characters",
                MAX_CONTENT_CHARS
            ));
        }
        if let Some(system_prompt) = &self.system_prompt {
            if system_prompt.chars().count() > MAX_SYSTEM_PROMPT_CHARS {
                return Some(format!(
                    "systemPrompt exceeds maximum length of {} characters",
                    MAX_SYSTEM_PROMPT_CHARS
                ));
            }
        }
        validate_model(self.model.as_deref())
            .or_else(|| validate_sampling(self.temperature, self.max_tokens))
    }
}

// == Sentiment Request ==
/// Request body for POST /api/ai/sentiment.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentRequest {
    /// Text to analyze
    pub text: String,
}

impl SentimentRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.text.is_empty() {
            return Some("text cannot be empty".to_string());
        }
        if self.text.chars().count() > MAX_SENTIMENT_CHARS {
            return Some(format!(
                "text exceeds maximum length of {} characters",
                MAX_SENTIMENT_CHARS
            ));
        }
        None
    }
}

// == Summarize Request ==
/// Request body for POST /api/ai/summarize.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// Text to summarize
    pub text: String,
    /// Target summary length in characters (default 100)
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl SummarizeRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.text.is_empty() {
            return Some("text cannot be empty".to_string());
        }
        if self.text.chars().count() > MAX_SUMMARIZE_CHARS {
            return Some(format!(
                "text exceeds maximum length of {} characters",
                MAX_SUMMARIZE_CHARS
            ));
        }
        if let Some(max_length) = self.max_length {
            if max_length == 0 || max_length > MAX_SUMMARY_LENGTH {
                return Some(format!("maxLength must be between 1 and {}", MAX_SUMMARY_LENGTH));
            }
        }
        None
    }
}

// == Shared Validators ==

fn validate_model(model: Option<&str>) -> Option<String> {
    match model {
        Some(model) if !SUPPORTED_MODELS.contains(&model) => Some(format!(
            "model must be one of: {}",
            SUPPORTED_MODELS.join(", ")
        )),
        _ => None,
    }
}

fn validate_sampling(temperature: Option<f64>, max_tokens: Option<u32>) -> Option<String> {
    if let Some(temperature) = temperature {
        if !(0.0..=2.0).contains(&temperature) {
            return Some("temperature must be between 0 and 2".to_string());
        }
    }
    if max_tokens == Some(0) {
        return Some("maxTokens must be positive".to_string());
    }
    None
}
