//! AI Service
//!
//! Facade over the configured provider. Uses OpenAI when a key is present,
//! the mock otherwise, and falls back to the mock whenever the real
//! provider fails. Sentiment results are cached here so both backends
//! benefit.

use tracing::{info, warn};

use crate::ai::{sha256_hex, MockProvider, OpenAiProvider, Provider, DEFAULT_MODEL};
use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::models::ChatMessage;

const SENTIMENT_CACHE_TTL_MS: u64 = 10 * 60 * 1000;
const DEFAULT_SUMMARY_LENGTH: usize = 100;

// == AI Service ==
/// Entry point the HTTP handlers talk to.
pub struct AiService {
    backend: Option<OpenAiProvider>,
    mock: MockProvider,
    cache: Cache<String>,
}

impl AiService {
    /// Builds the service from configuration, sharing the gateway's
    /// response cache.
    pub fn new(config: &Config, cache: Cache<String>) -> Self {
        let backend = config
            .openai_api_key
            .clone()
            .map(|key| OpenAiProvider::new(key, cache.clone()));

        if backend.is_some() {
            info!("Using OpenAI provider");
        } else {
            info!("Using mock AI provider (no OpenAI API key configured)");
        }

        Self {
            backend,
            mock: MockProvider::default(),
            cache,
        }
    }

    /// Produces the next assistant turn for a conversation.
    pub async fn chat(&self, messages: &[ChatMessage], model: Option<&str>) -> Result<String> {
        let model = model.unwrap_or(DEFAULT_MODEL);
        match &self.backend {
            Some(backend) => match backend.chat(messages, model).await {
                Ok(response) => Ok(response),
                Err(err) => {
                    warn!("OpenAI request failed, falling back to mock provider: {}", err);
                    self.mock.chat(messages, model).await
                }
            },
            None => self.mock.chat(messages, model).await,
        }
    }

    /// Generates text from a prompt, optionally steered by a system prompt.
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        model: Option<&str>,
    ) -> Result<String> {
        let model = model.unwrap_or(DEFAULT_MODEL);
        match &self.backend {
            Some(backend) => match backend.generate(prompt, system_prompt, model).await {
                Ok(response) => Ok(response),
                Err(err) => {
                    warn!("OpenAI request failed, falling back to mock provider: {}", err);
                    self.mock.generate(prompt, system_prompt, model).await
                }
            },
            None => self.mock.generate(prompt, system_prompt, model).await,
        }
    }

    /// Classifies sentiment, serving repeated inputs from the cache
    /// regardless of which backend produced the original answer.
    pub async fn sentiment(&self, text: &str) -> Result<String> {
        let cache_key = format!("sentiment:{}", sha256_hex(text));
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let result = match &self.backend {
            Some(backend) => match backend.sentiment(text).await {
                Ok(response) => response,
                Err(err) => {
                    warn!("OpenAI request failed, falling back to mock provider: {}", err);
                    self.mock.sentiment(text).await?
                }
            },
            None => self.mock.sentiment(text).await?,
        };

        self.cache
            .set(cache_key, result.clone(), Some(SENTIMENT_CACHE_TTL_MS))
            .await;

        Ok(result)
    }

    /// Summarizes text to approximately `max_length` characters
    /// (default 100).
    pub async fn summarize(&self, text: &str, max_length: Option<usize>) -> Result<String> {
        let max_length = max_length.unwrap_or(DEFAULT_SUMMARY_LENGTH);
        match &self.backend {
            Some(backend) => match backend.summarize(text, max_length).await {
                Ok(response) => Ok(response),
                Err(err) => {
                    warn!("OpenAI request failed, falling back to mock provider: {}", err);
                    self.mock.summarize(text, max_length).await
                }
            },
            None => self.mock.summarize(text, max_length).await,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::time::Duration;

    fn mock_service() -> AiService {
        let cache = Cache::new(300_000, Duration::from_secs(60));
        AiService {
            backend: None,
            mock: MockProvider::with_delay(Duration::ZERO),
            cache,
        }
    }

    fn user_message(content: &str) -> ChatMessage {
        ChatMessage {
            role: Role::User,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_chat_uses_mock_without_key() {
        let service = mock_service();

        let response = service.chat(&[user_message("hello")], None).await.unwrap();

        assert_eq!(response, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn test_sentiment_is_cached_at_the_facade() {
        let service = mock_service();

        let first = service.sentiment("I love this great library").await.unwrap();
        let second = service.sentiment("I love this great library").await.unwrap();

        assert_eq!(first, "positive");
        assert_eq!(first, second);

        let stats = service.cache.stats().await;
        assert_eq!(stats.size, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);

        service.cache.destroy().await;
    }

    #[tokio::test]
    async fn test_distinct_texts_get_distinct_sentiment_entries() {
        let service = mock_service();

        service.sentiment("I love this").await.unwrap();
        service.sentiment("I hate this").await.unwrap();

        assert_eq!(service.cache.size().await, 2);

        service.cache.destroy().await;
    }

    #[tokio::test]
    async fn test_mock_chat_is_not_cached() {
        let service = mock_service();

        service.chat(&[user_message("hello")], None).await.unwrap();
        service.chat(&[user_message("hello")], None).await.unwrap();

        assert_eq!(service.cache.size().await, 0);

        service.cache.destroy().await;
    }

    #[tokio::test]
    async fn test_summarize_default_length() {
        let service = mock_service();

        let summary = service
            .summarize("One sentence here. Another one there. And a third.", None)
            .await
            .unwrap();

        assert!(summary.starts_with("One sentence here"));
    }
}
