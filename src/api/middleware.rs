//! API Middleware
//!
//! Cross-cutting request handling: request IDs, per-request logging, and
//! rate limiting. Layered so that every request gets an ID first, is
//! logged, and is then checked against the rate limit before routing.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::api::handlers::AppState;
use crate::clock::to_iso8601;
use crate::error::ApiError;
use crate::ratelimit::RateLimitDecision;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID attached to request extensions for handlers and logging.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reuses an incoming X-Request-ID or generates a fresh UUID, and mirrors
/// it onto the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Logs one line per completed request with its ID, route, status, and
/// duration.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "[{}] {} {} {} - {}ms",
        request_id,
        method,
        uri,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Consults the rate limiter and attaches X-RateLimit-* headers to every
/// response; denials short-circuit into a 429 envelope.
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let identifier = client_identifier(&req);
    let decision = state.limiter.is_allowed(&identifier).await;

    let mut response = if decision.allowed {
        next.run(req).await
    } else {
        ApiError::RateLimited.into_response()
    };

    set_rate_limit_headers(
        response.headers_mut(),
        state.limiter.max_requests(),
        &decision,
    );
    response
}

/// Client identifier for rate limiting: first X-Forwarded-For hop, else the
/// peer address, else "unknown".
fn client_identifier(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first_hop) = forwarded.split(',').next() {
            let first_hop = first_hop.trim();
            if !first_hop.is_empty() {
                return first_hop.to_string();
            }
        }
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn set_rate_limit_headers(headers: &mut HeaderMap, limit: u64, decision: &RateLimitDecision) {
    headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(decision.remaining));
    if let Ok(value) = HeaderValue::from_str(&to_iso8601(decision.reset_time)) {
        headers.insert("x-ratelimit-reset", value);
    }
}
