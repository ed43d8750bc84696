//! Response DTOs for the gateway API
//!
//! All endpoints except `/health` wrap their payload in the standard
//! success envelope `{success, data, message, timestamp}`; failures use the
//! matching error envelope built in `error.rs`.

use serde::Serialize;

use crate::clock::iso_now;

// == Success Envelope ==
/// Standard success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    /// Always true for this envelope
    pub success: bool,
    /// Endpoint-specific payload
    pub data: T,
    /// Human-readable outcome description
    pub message: String,
    /// ISO-8601 response time
    pub timestamp: String,
}

impl<T> ApiSuccess<T> {
    /// Wraps a payload in the success envelope.
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            timestamp: iso_now(),
        }
    }
}

// == Endpoint Payloads ==

/// Payload for chat and text-generation responses.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionData {
    /// Provider output
    pub response: String,
}

/// Payload for sentiment responses.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentData {
    /// Normalized label: positive, negative, or neutral
    pub sentiment: String,
}

/// Payload for summarization responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeData {
    /// The produced summary
    pub summary: String,
    /// Character count of the input text
    pub original_length: usize,
    /// Character count of the summary
    pub summary_length: usize,
}

// == Health Response ==
/// Body for GET /health. Deliberately not enveloped.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Liveness indicator, always "ok"
    pub status: String,
    /// ISO-8601 current time
    pub timestamp: String,
    /// Seconds since process start
    pub uptime: u64,
    /// Deployment environment label
    pub environment: String,
}

impl HealthResponse {
    /// Creates a health body for the given uptime and environment.
    pub fn ok(uptime: u64, environment: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: iso_now(),
            uptime,
            environment: environment.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiSuccess::new(
            CompletionData {
                response: "hi there".to_string(),
            },
            "Chat completion successful",
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["response"], "hi there");
        assert_eq!(json["message"], "Chat completion successful");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_summarize_data_camel_case() {
        let data = SummarizeData {
            summary: "short".to_string(),
            original_length: 120,
            summary_length: 5,
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["originalLength"], 120);
        assert_eq!(json["summaryLength"], 5);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::ok(42, "test");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["uptime"], 42);
        assert_eq!(json["environment"], "test");
    }
}
