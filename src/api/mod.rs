//! Backend access: the two read-only endpoints the viewer consumes.

pub mod http;

use std::future::Future;
use std::pin::Pin;

use crate::model::{OrderDocument, OrderId, OrderSummary};

pub use http::HttpOrderApi;

/// Boxed future returned by [`OrderApi`] calls (sendable so iced can run it on tokio)
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// Non-2xx response; `body` is the response text, trimmed
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Trait for order backends (the HTTP client, or a stub in tests)
pub trait OrderApi: Send + Sync {
    /// `GET /api/order/{uid}`
    fn fetch_order(&self, id: &OrderId) -> ApiFuture<OrderDocument>;

    /// `GET /api/orders/recent`
    fn fetch_recent(&self) -> ApiFuture<Vec<OrderSummary>>;
}
