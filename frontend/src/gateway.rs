//! Browser implementation of the REST gateway.

use std::future::Future;

use common::config::GatewayConfig;
use common::error::ApiError;
use common::gateway::{ApiRequest, ApiResponse, Gateway, Method};
use gloo_net::http::Request;

/// Sends requests with `fetch`, against the configured origin, as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpGateway {
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl Gateway for HttpGateway {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let url = self.config.url(&request.path);
        async move {
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Content-Type", "application/json");

            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(transport)?;

            let response = prepared.send().await.map_err(transport)?;
            let status = response.status();
            let body = response.text().await.map_err(transport)?;
            Ok(ApiResponse::new(status, body))
        }
    }
}
