//! Error handling for the gateway module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Failed to decode a JSON payload from the gateway
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The gateway answered with a non-success HTTP status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl GatewayError {
    pub async fn from_response(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        GatewayError::Http { status, message }
    }

    /// Log level a fetch failure of this kind should surface at.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Non-critical: temporary server issues
            GatewayError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            GatewayError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Client-side request errors mean the request itself is wrong
            GatewayError::Http { .. } => LogLevel::Error,

            // Network and decode issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_surface_as_warnings() {
        let error = GatewayError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(error.log_level(), LogLevel::Warn);
    }

    #[test]
    fn client_errors_surface_as_errors() {
        let error = GatewayError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(error.log_level(), LogLevel::Error);
    }

    #[test]
    fn rate_limiting_is_quiet() {
        let error = GatewayError::Http {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(error.log_level(), LogLevel::Debug);
    }
}
