//! API Module
//!
//! HTTP surface: routing, handlers, and middleware.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use middleware::{RequestId, REQUEST_ID_HEADER};
pub use routes::create_router;
