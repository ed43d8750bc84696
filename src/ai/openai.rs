//! OpenAI Provider
//!
//! Chat-completions client used when an API key is configured. Chat results
//! are cached read-through; the other operations are prompt rewrites
//! funneled into `chat`, so they share its cache.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::{sha256_hex, Provider, DEFAULT_MODEL};
use crate::cache::Cache;
use crate::error::Result;
use crate::models::{ChatMessage, Role};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const CHAT_CACHE_TTL_MS: u64 = 5 * 60 * 1000;
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

const SENTIMENT_SYSTEM_PROMPT: &str = "You are a sentiment analysis expert. Analyze the sentiment of the given text and respond with one word: positive, negative, or neutral.";

// == Wire Types ==

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// == OpenAI Provider ==
/// Client for the OpenAI chat-completions API with a read-through response
/// cache.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    cache: Cache<String>,
}

impl OpenAiProvider {
    /// Creates a provider that caches chat responses in `cache`.
    pub fn new(api_key: String, cache: Cache<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            cache,
        }
    }

    /// Cache key for a chat request; the model is part of the key so the
    /// same conversation against different models never collides.
    fn chat_cache_key(messages: &[ChatMessage], model: &str) -> String {
        let payload = serde_json::to_string(messages).unwrap_or_default();
        format!("chat:{}:{}", model, sha256_hex(&payload))
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> Result<String> {
        let cache_key = Self::chat_cache_key(messages, model);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let request = ChatCompletionRequest {
            model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatCompletionResponse = response.json().await?;
        let result = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| "No response generated".to_string());

        self.cache
            .set(cache_key, result.clone(), Some(CHAT_CACHE_TTL_MS))
            .await;

        Ok(result)
    }

    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        model: &str,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = system_prompt {
            messages.push(ChatMessage {
                role: Role::System,
                content: system_prompt.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: Role::User,
            content: prompt.to_string(),
        });

        self.chat(&messages, model).await
    }

    async fn sentiment(&self, text: &str) -> Result<String> {
        self.generate(text, Some(SENTIMENT_SYSTEM_PROMPT), DEFAULT_MODEL)
            .await
    }

    async fn summarize(&self, text: &str, max_length: usize) -> Result<String> {
        let system_prompt = format!(
            "You are a text summarization expert. Summarize the given text in approximately {} words.",
            max_length
        );
        let prompt = format!("Please summarize the following text:\n\n{}", text);

        self.generate(&prompt, Some(&system_prompt), DEFAULT_MODEL).await
    }
}
