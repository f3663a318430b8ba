//! ==============================================================================
//! transport.rs - http seam
//! ==============================================================================
//!
//! purpose:
//!     the controller never talks to the network directly. the dashboard
//!     plugs in a gloo-net backed implementation; tests plug in a scripted
//!     one. futures are not Send because the browser event loop is
//!     single-threaded.
//!
//! ==============================================================================

use async_trait::async_trait;

use crate::error::TransportError;

/// status + body of a completed http exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, like `Response.ok` in the fetch api
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// POST `body` with `Content-Type: application/json`
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(429, "").is_success());
    }
}
