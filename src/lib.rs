//! AI Gateway - a small AI-completion backend
//!
//! HTTP endpoints for chat, text generation, sentiment, and summarization,
//! backed by a mock or real provider, with an in-process TTL response cache
//! and fixed-window rate limiting.

pub mod ai;
pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod ratelimit;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::Cache;
pub use config::Config;
pub use ratelimit::RateLimiter;
