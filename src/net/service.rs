//! HTTP service layer for the blog REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call fails with
//! [`ApiError::Unavailable`] since the API is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are structured [`ApiError`] values carrying the HTTP status, so
//! callers branch on `is_forbidden()` instead of inspecting error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/usuarios/logar";

/// HTTP status the API uses for an expired or rejected token.
pub const STATUS_FORBIDDEN: u16 = 403;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No browser runtime is available to perform the call.
    #[error("API not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the API responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API rejected the session token.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(STATUS_FORBIDDEN)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Per-request options; currently only extra headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Options carrying `Authorization: <token>`.
    pub fn authorized(token: &str) -> Self {
        Self { headers: vec![("Authorization".to_owned(), token.to_owned())] }
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .map(|(_, value)| value.as_str())
    }
}

/// A fully described API call, as emitted by the view flows.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub options: RequestOptions,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, options: RequestOptions) -> Self {
        Self { method: Method::Get, path: path.into(), body: None, options }
    }

    pub fn delete(path: impl Into<String>, options: RequestOptions) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None, options }
    }

    pub fn post(path: impl Into<String>, body: Value, options: RequestOptions) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body), options }
    }

    pub fn put(path: impl Into<String>, body: Value, options: RequestOptions) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body), options }
    }
}

/// `GET` a resource and hand the decoded payload to `set_dados`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body does not decode as `T`.
pub async fn buscar<T, F>(config: &ApiConfig, path: &str, set_dados: F, options: &RequestOptions) -> Result<(), ApiError>
where
    T: DeserializeOwned,
    F: FnOnce(T),
{
    let body = execute(config, Method::Get, path, None, options).await?;
    set_dados(decode(body)?);
    Ok(())
}

/// `POST` a new resource and hand the created payload to `set_dados`.
///
/// # Errors
///
/// Returns an [`ApiError`] on encode, transport, status, or decode failure.
pub async fn cadastrar<B, T, F>(
    config: &ApiConfig,
    path: &str,
    dados: &B,
    set_dados: F,
    options: &RequestOptions,
) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
    F: FnOnce(T),
{
    let payload = encode(dados)?;
    let body = execute(config, Method::Post, path, Some(&payload), options).await?;
    set_dados(decode(body)?);
    Ok(())
}

/// `PUT` an updated resource and hand the stored payload to `set_dados`.
///
/// # Errors
///
/// Returns an [`ApiError`] on encode, transport, status, or decode failure.
pub async fn atualizar<B, T, F>(
    config: &ApiConfig,
    path: &str,
    dados: &B,
    set_dados: F,
    options: &RequestOptions,
) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
    F: FnOnce(T),
{
    let payload = encode(dados)?;
    let body = execute(config, Method::Put, path, Some(&payload), options).await?;
    set_dados(decode(body)?);
    Ok(())
}

/// `DELETE` a resource. Any response body is ignored.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is not 2xx.
pub async fn deletar(config: &ApiConfig, path: &str, options: &RequestOptions) -> Result<(), ApiError> {
    execute(config, Method::Delete, path, None, options).await?;
    Ok(())
}

/// Perform a flow-described request through the typed helpers, returning the
/// raw JSON payload (`Null` for `DELETE`).
///
/// # Errors
///
/// Propagates the [`ApiError`] of the underlying helper.
pub async fn send(config: &ApiConfig, request: &ApiRequest) -> Result<Value, ApiError> {
    let mut out = Value::Null;
    let body = request.body.as_ref().unwrap_or(&Value::Null);
    match request.method {
        Method::Get => buscar(config, &request.path, |v| out = v, &request.options).await?,
        Method::Post => cadastrar(config, &request.path, body, |v| out = v, &request.options).await?,
        Method::Put => atualizar(config, &request.path, body, |v| out = v, &request.options).await?,
        Method::Delete => deletar(config, &request.path, &request.options).await?,
    }
    Ok(out)
}

fn encode<B: Serialize + ?Sized>(dados: &B) -> Result<Value, ApiError> {
    serde_json::to_value(dados).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Parse a response body; an empty body is `Null`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn execute(
    config: &ApiConfig,
    method: Method,
    path: &str,
    body: Option<&Value>,
    options: &RequestOptions,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = config.url(path);
        log::debug!("{} {url}", method.as_str());
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }
        let request = match body {
            Some(payload) => builder.json(payload).map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("{} {url} -> {status}", method.as_str());
            return Err(ApiError::Status { status, body: text });
        }
        parse_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, method, path, body, options);
        Err(ApiError::Unavailable)
    }
}
