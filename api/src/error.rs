//! Failure classification for backend calls.
//!
//! Screens branch on these variants to decide what to show: a message the
//! server wrote for the user is surfaced verbatim, everything else falls back
//! to a generic notice.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, strum::EnumIs)]
pub enum ApiError {
    /// The server replied with an explicit user-facing message.
    #[error("{0}")]
    Api(String),

    /// The server reported failure without saying why.
    #[error("the server could not complete the request")]
    Rejected,

    /// Non-success HTTP status with no parseable error body.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The request never completed. Offline, DNS failure, refused
    /// connection, CORS rejection and friends all land here.
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-authored message, if this failure carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_api_errors() {
        let api = ApiError::Api("No matching donors found".to_string());
        assert_eq!(api.server_message(), Some("No matching donors found"));

        assert_eq!(ApiError::Rejected.server_message(), None);
        assert_eq!(ApiError::Status(500).server_message(), None);
        assert_eq!(ApiError::Network("timed out".to_string()).server_message(), None);
        assert_eq!(ApiError::Decode("eof".to_string()).server_message(), None);
    }

    #[test]
    fn api_error_displays_the_message_verbatim() {
        let error = ApiError::Api("City is required".to_string());
        assert_eq!(error.to_string(), "City is required");
    }

    #[test]
    fn network_classification() {
        assert!(ApiError::Network("connection refused".to_string()).is_network());
        assert!(!ApiError::Status(404).is_network());
        assert!(!ApiError::Rejected.is_network());
    }
}
