//! ==============================================================================
//! error.rs - client error taxonomy
//! ==============================================================================
//!
//! purpose:
//!     every failure the playground can hit, from input validation to the
//!     transport. none of them are fatal: each one maps to the title/message
//!     pair shown in the error banner and the ui returns to idle.
//!
//! ==============================================================================

use thiserror::Error;

/// which outbound call a transport failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Configure,
}

/// failures surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("prompt is empty")]
    EmptyInput,

    #[error("rate limit exceeded (429)")]
    RateLimited,

    #[error("server responded with status {0}")]
    Server(u16),

    #[error("configuration rejected with status {0}")]
    ConfigurationFailed(u16),

    #[error("network error during {operation:?}: {detail}")]
    Network { operation: Operation, detail: String },

    #[error("response body is not valid json: {0}")]
    InvalidResponse(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// errors raised by a `Transport` before an http status is available
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// title + message pair rendered by the error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub title: String,
    pub message: String,
}

impl ErrorBanner {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl ClientError {
    pub fn network(operation: Operation, err: TransportError) -> Self {
        ClientError::Network {
            operation,
            detail: err.to_string(),
        }
    }

    /// user-facing banner for this error
    pub fn banner(&self) -> ErrorBanner {
        match self {
            ClientError::EmptyInput => {
                ErrorBanner::new("Empty Input", "Please enter something first.")
            }
            ClientError::RateLimited => {
                ErrorBanner::new("Rate Limit Exceeded 🚦", "Please wait and try again.")
            }
            ClientError::Server(status) => {
                ErrorBanner::new("Server Error", format!("Status {}", status))
            }
            ClientError::ConfigurationFailed(status) => {
                ErrorBanner::new("Configuration Failed 💥", format!("Status {}", status))
            }
            ClientError::Network { operation: Operation::Query, .. } => {
                ErrorBanner::new("Network Error", "Unable to reach server.")
            }
            ClientError::Network { operation: Operation::Configure, .. } => {
                ErrorBanner::new("Network Error", "Could not reach backend.")
            }
            ClientError::InvalidResponse(_) => ErrorBanner::new(
                "Invalid Response",
                "The server sent a response that could not be read.",
            ),
            ClientError::Encode(_) => {
                ErrorBanner::new("Configuration Failed 💥", "Could not encode request.")
            }
            ClientError::InvalidUrl(url) => {
                ErrorBanner::new("Invalid Configuration", format!("Bad API address: {}", url))
            }
            ClientError::UnknownCategory(id) => {
                ErrorBanner::new("Unknown Category", format!("No endpoint named '{}'", id))
            }
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_banner_includes_status() {
        let banner = ClientError::Server(503).banner();
        assert_eq!(banner.title, "Server Error");
        assert_eq!(banner.message, "Status 503");
    }

    #[test]
    fn test_network_banner_depends_on_operation() {
        let err = TransportError::Request("Failed to fetch".into());
        let query = ClientError::network(Operation::Query, err.clone()).banner();
        let configure = ClientError::network(Operation::Configure, err).banner();
        assert_eq!(query.message, "Unable to reach server.");
        assert_eq!(configure.message, "Could not reach backend.");
    }

    #[test]
    fn test_network_error_keeps_detail() {
        let err = ClientError::network(
            Operation::Query,
            TransportError::Request("cors".into()),
        );
        assert!(err.to_string().contains("request failed: cors"));
    }
}
