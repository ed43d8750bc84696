//! AI Provider Module
//!
//! Completion backends behind a common trait: a deterministic mock that is
//! always available, and an OpenAI client used when an API key is
//! configured. `AiService` picks between them and owns the response-cache
//! integration.

mod mock;
mod openai;
mod provider;
mod service;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;
pub use provider::Provider;
pub use service::AiService;

use sha2::{Digest, Sha256};

// == Supported Models ==
/// Model used when a request does not specify one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Models accepted by the chat/generate endpoints.
pub const SUPPORTED_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4", "gpt-4-turbo-preview"];

/// Lowercase hex SHA-256 of `input`, used to build cache keys so that
/// logically distinct request shapes never collide.
pub(crate) fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}
