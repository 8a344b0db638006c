//! Failures surfaced by the REST gateway.
//!
//! Every failure is flattened into one of three kinds so the manager can turn
//! it into an inline message: no response at all, a non-2xx response, or a
//! 2xx response whose body did not have the expected shape.

use serde::Deserialize;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx but the body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Error envelope used by the backend: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds a status error, preferring the body's `detail` string.
    ///
    /// Validation failures carry `detail` as a list of objects rather than a
    /// string; those fall back to the generic message as well.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_becomes_the_message() {
        let err = ApiError::from_status(409, r#"{"detail":"Mission name already exists"}"#);
        assert_eq!(err.to_string(), "Mission name already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        assert_eq!(
            ApiError::from_status(500, "Internal Server Error").to_string(),
            "HTTP error! status: 500"
        );
        assert_eq!(
            ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#)
                .to_string(),
            "HTTP error! status: 422"
        );
    }

    #[test]
    fn not_found_is_detected_by_status() {
        assert!(ApiError::from_status(404, "{}").is_not_found());
        assert!(!ApiError::Transport("offline".into()).is_not_found());
    }
}
