//! Scripted in-memory gateway for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{Future, ready};

use serde_json::Value;

use crate::error::ApiError;
use crate::gateway::{ApiRequest, ApiResponse, Gateway, Method};

/// Replies to requests in the order they were scripted and records every
/// request it receives.
#[derive(Default)]
pub struct FakeGateway {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    pub fn reply_text(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of every request, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests.borrow().iter().map(|r| (r.method, r.path.clone())).collect()
    }
}

impl Gateway for FakeGateway {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())));
        ready(reply)
    }
}
