//! API utilities for frontend-backend communication
//!
//! Provides URL helpers relative to the application context path, the
//! `HttpClient` seam used by the record controllers, and its `gloo-net`
//! implementation.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::form_payload::FormPayload;

/// Context path the backend is mounted under
///
/// The server-rendered page exposes it as `window.contextPath`; a missing or
/// non-string value means the application is served from the root.
pub fn context_path() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    js_sys::Reflect::get(&window, &"contextPath".into())
        .ok()
        .and_then(|v| v.as_string())
        .map(|p| p.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&context_path(), "/users/getUser/42");
/// ```
pub fn api_url(context_path: &str, path: &str) -> String {
    format!("{}{}", context_path, path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(FormPayload),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: RequestBody::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// Transport used by every controller; injected so pages can be driven
/// without a browser.
pub trait HttpClient {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>>;
}

/// GET a JSON document; non-2xx responses are errors.
pub async fn get_json<T: DeserializeOwned>(
    http: &dyn HttpClient,
    url: String,
) -> Result<T, ApiError> {
    let response = http.send(ApiRequest::get(url)).await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body,
        });
    }
    response.json()
}

/// `HttpClient` over `gloo-net` fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

impl GlooHttpClient {
    async fn dispatch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::{Request, RequestBuilder};

        let builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
        };
        let prepared = match request.body {
            RequestBody::Empty => builder.header("Accept", "application/json").build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(payload) => {
                let form_data = payload.to_form_data()?;
                builder.body(form_data)
            }
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

impl HttpClient for GlooHttpClient {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        Self::dispatch(request).boxed_local()
    }
}
