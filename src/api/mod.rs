//! REST API Client
//!
//! Frontend bindings to the backend HTTP endpoints, organized by domain.
//! Every call is a single round trip: no retry, no timeout, no cancellation.

mod items;
mod jobs;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// One request, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::DELETE, path: path.into(), body: None }
    }

    pub fn with_json(method: Method, path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method, path: path.into(), body: Some(body) }
    }
}

/// Status and raw body of a completed round trip
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Map a 2xx JSON body to `T`, anything else to an error for `action`
    pub fn json<T: DeserializeOwned>(&self, action: &'static str) -> ApiResult<T> {
        self.ensure_success(action)?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode {
            action,
            message: e.to_string(),
        })
    }

    pub fn ensure_success(&self, action: &'static str) -> ApiResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { action, status: self.status })
        }
    }
}

/// Seam between the typed client and the network
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// `fetch`-backed transport (reqwest's wasm client)
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url(&request.path);
        log::debug!("[API] {} {}", request.method, url);

        let mut builder = self.client.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// Typed client over any transport
#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.transport.send(request).await
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned responses and records every request
    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<ApiResult<ApiResponse>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Network(message.to_string())));
            self
        }

        pub fn last_request(&self) -> ApiRequest {
            self.requests.borrow().last().cloned().expect("no request was sent")
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no canned response left")
        }
    }
}
