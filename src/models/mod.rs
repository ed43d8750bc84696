//! Data Models Module
//!
//! Request and response DTOs for the HTTP API.

mod requests;
mod responses;

pub use requests::{ChatMessage, ChatRequest, GenerateRequest, Role, SentimentRequest, SummarizeRequest};
pub use responses::{ApiSuccess, CompletionData, HealthResponse, SentimentData, SummarizeData};
