//! Mock Provider
//!
//! Deterministic stand-in used when no OpenAI API key is configured, and as
//! the fallback when the real provider fails. Simulates provider latency so
//! the surrounding timeout/caching behavior is exercised realistically.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::ai::Provider;
use crate::error::Result;
use crate::models::ChatMessage;

const DEFAULT_DELAY: Duration = Duration::from_millis(300);
const PREVIEW_CHARS: usize = 100;

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "love", "great", "excellent", "amazing", "wonderful", "good", "happy", "pleased",
        "fantastic", "awesome", "brilliant", "perfect",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "hate", "terrible", "awful", "bad", "sad", "angry", "disappointed", "horrible",
        "worst", "hateful", "disgusting",
    ]
    .into_iter()
    .collect()
});

// == Mock Provider ==
/// Canned-response provider with simulated latency.
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self { delay: DEFAULT_DELAY }
    }
}

impl MockProvider {
    /// Provider with a custom simulated latency. Tests use zero.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_delay(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// First `max_chars` characters, with an ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn chat(&self, messages: &[ChatMessage], _model: &str) -> Result<String> {
        self.simulate_delay().await;

        let last_message = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        let lower = last_message.to_lowercase();

        if lower.contains("hello") || lower.contains("hi") {
            return Ok("Hello! How can I help you today?".to_string());
        }
        if lower.contains("help") {
            return Ok("I'm here to help! What would you like to know?".to_string());
        }
        if lower.contains("bye") || lower.contains("goodbye") {
            return Ok("Goodbye! Have a great day!".to_string());
        }

        Ok(format!(
            "I understand you said: \"{}\". This is a mock response. To use real AI, set OPENAI_API_KEY environment variable.",
            preview(last_message, PREVIEW_CHARS)
        ))
    }

    async fn generate(
        &self,
        prompt: &str,
        _system_prompt: Option<&str>,
        _model: &str,
    ) -> Result<String> {
        self.simulate_delay().await;

        let word_count = prompt.split_whitespace().count();
        Ok(format!(
            "Generated text based on your prompt ({} words): \"{}\". This is a mock response. Set OPENAI_API_KEY for real AI generation.",
            word_count,
            preview(prompt, PREVIEW_CHARS)
        ))
    }

    async fn sentiment(&self, text: &str) -> Result<String> {
        self.simulate_delay().await;

        let lower = text.to_lowercase();
        let mut positive = 0usize;
        let mut negative = 0usize;
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if POSITIVE_WORDS.contains(word) {
                positive += 1;
            }
            if NEGATIVE_WORDS.contains(word) {
                negative += 1;
            }
        }

        let label = if positive > negative {
            "positive"
        } else if negative > positive {
            "negative"
        } else {
            "neutral"
        };
        Ok(label.to_string())
    }

    async fn summarize(&self, text: &str, max_length: usize) -> Result<String> {
        self.simulate_delay().await;

        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            let words: Vec<&str> = text.split_whitespace().collect();
            let word_count = max_length.div_ceil(10).min(words.len());
            return Ok(format!("{}...", words[..word_count].join(" ")));
        }

        // First ~30% of sentences, at least one
        let target = ((sentences.len() as f64) * 0.3).ceil().max(1.0) as usize;
        let summary = sentences[..target].join(". ");

        if summary.chars().count() <= max_length * 3 / 2 {
            if summary.ends_with('.') {
                return Ok(summary);
            }
            return Ok(format!("{}.", summary));
        }

        let truncated: String = summary.chars().take(max_length).collect();
        Ok(format!("{}...", truncated.trim_end()))
    }
}
