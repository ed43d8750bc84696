//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{extract::State, Json};
use tracing::debug;

use crate::ai::AiService;
use crate::cache::{Cache, CacheStats};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ApiSuccess, ChatRequest, CompletionData, GenerateRequest, HealthResponse, SentimentData,
    SentimentRequest, SummarizeData, SummarizeRequest,
};
use crate::ratelimit::RateLimiter;

/// Application state shared across all handlers.
///
/// Owns the two stores (each with its own sweeper) and the AI service.
/// Cloning is cheap; all clones share the same underlying state.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: Cache<String>,
    /// Shared rate limiter
    pub limiter: RateLimiter,
    /// Provider facade
    pub ai: Arc<AiService>,
    /// Environment label reported by /health
    pub environment: String,
    started_at: Instant,
}

impl AppState {
    /// Creates the application state from configuration, starting both
    /// store sweepers.
    pub fn from_config(config: &Config) -> Self {
        let sweep_interval = Duration::from_millis(config.sweep_interval_ms);
        let cache = Cache::new(config.cache_default_ttl_ms, sweep_interval);
        let limiter = RateLimiter::new(
            config.rate_limit_window_ms,
            config.rate_limit_max_requests,
            sweep_interval,
        );
        let ai = Arc::new(AiService::new(config, cache.clone()));

        Self {
            cache,
            limiter,
            ai,
            environment: config.environment.clone(),
            started_at: Instant::now(),
        }
    }

    /// Seconds since this state was created.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Destroys both stores: stops their sweepers and clears all state.
    /// Called from the shutdown path; safe alongside in-flight requests.
    pub async fn destroy(&self) {
        self.limiter.destroy().await;
        self.cache.destroy().await;
    }
}

/// Handler for POST /api/ai/chat
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ApiSuccess<CompletionData>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    debug!("Chat request received: {} messages", req.messages.len());
    let response = state.ai.chat(&req.messages, req.model.as_deref()).await?;

    Ok(Json(ApiSuccess::new(
        CompletionData { response },
        "Chat completion successful",
    )))
}

/// Handler for POST /api/ai/generate
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<ApiSuccess<CompletionData>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    debug!("Text generation request received: {} chars", req.prompt.len());
    let response = state
        .ai
        .generate(&req.prompt, req.system_prompt.as_deref(), req.model.as_deref())
        .await?;

    Ok(Json(ApiSuccess::new(
        CompletionData { response },
        "Text generated successfully",
    )))
}

/// Handler for POST /api/ai/sentiment
pub async fn sentiment_handler(
    State(state): State<AppState>,
    Json(req): Json<SentimentRequest>,
) -> Result<Json<ApiSuccess<SentimentData>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    debug!("Sentiment analysis request received: {} chars", req.text.len());
    let sentiment = state.ai.sentiment(&req.text).await?;

    Ok(Json(ApiSuccess::new(
        SentimentData {
            // Real providers may answer with stray casing or punctuation
            sentiment: sentiment.trim().to_lowercase(),
        },
        "Sentiment analyzed successfully",
    )))
}

/// Handler for POST /api/ai/summarize
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<ApiSuccess<SummarizeData>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    debug!("Summarization request received: {} chars", req.text.len());
    let summary = state.ai.summarize(&req.text, req.max_length).await?;

    Ok(Json(ApiSuccess::new(
        SummarizeData {
            original_length: req.text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        },
        "Text summarized successfully",
    )))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(
    State(state): State<AppState>,
) -> Json<ApiSuccess<CacheStats>> {
    debug!("Cache stats request received");
    let stats = state.cache.stats().await;

    Json(ApiSuccess::new(
        stats,
        "Cache statistics retrieved successfully",
    ))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.uptime_secs(), &state.environment))
}
