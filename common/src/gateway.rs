//! Transport contract between the managers and the REST API.
//!
//! Managers build `ApiRequest`s with paths relative to the backend origin and
//! hand them to a `Gateway`. The browser implementation attaches the origin
//! and the JSON content type; tests script responses in memory.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the backend origin, e.g. `/missions/5`.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Raw response: status code and the body as text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns non-2xx responses into `ApiError::Status`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.body))
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub trait Gateway {
    /// Issues one request. No retries: a failure is reported as-is.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Sends a request and fails on non-2xx statuses.
pub async fn send_checked<G: Gateway>(gateway: &G, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let method = request.method;
    let path = request.path.clone();
    log::debug!("{} {}", method, path);

    let outcome = match gateway.send(request).await {
        Ok(response) => response.error_for_status(),
        Err(err) => Err(err),
    };
    if let Err(err) = &outcome {
        log::warn!("{} {} failed: {}", method, path, err);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_counts_as_success() {
        assert!(ApiResponse::new(200, "[]").is_success());
        assert!(ApiResponse::new(201, "{}").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }

    #[test]
    fn error_for_status_uses_the_detail_message() {
        let err = ApiResponse::new(404, r#"{"detail":"Mission not found"}"#)
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.to_string(), "Mission not found");
    }

    #[test]
    fn undecodable_body_is_a_decode_error() {
        let err = ApiResponse::new(200, "<html>").json::<Vec<u32>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
