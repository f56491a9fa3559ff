//! HTTP client for the admin backend and the companion services.
//!
//! Every call goes through [`ApiClient`], which joins paths onto a configured
//! base URL, sends JSON and turns non-2xx answers into [`ApiError`] with the
//! message the server put in the body.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Message used when a failed response carries nothing readable
pub const GENERIC_SERVER_ERROR: &str = "Server Error";

/// Get the default base URL for the admin backend
///
/// Constructs the URL from the current window location, using port 3000 for
/// the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    with_credentials: bool,
}

impl ApiClient {
    /// Client for the session-authenticated admin backend
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()),
            with_credentials: true,
        }
    }

    /// Client for services that do not share the admin session
    pub fn without_credentials(base_url: impl Into<String>) -> Self {
        Self {
            with_credentials: false,
            ..Self::new(base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.builder(Method::Get, path).send().await;
        self.read_json(Method::Get, path, response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Post, path, body).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Put, path, body).await
    }

    /// DELETE; whatever the server answers on success is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.builder(Method::Delete, path).send().await;
        let response = self.check(Method::Delete, path, response).await?;
        let _ = response.text().await;
        Ok(())
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await;
        self.read_json(method, path, response).await
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method.as_str(), url);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");
        if self.with_credentials {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        }
    }

    async fn check(
        &self,
        method: Method,
        path: &str,
        response: Result<Response, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let response = response.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            ApiError::Network(e.to_string())
        })?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        log::warn!("{} {} -> {}: {}", method.as_str(), path, status, message);
        Err(ApiError::Server { status, message })
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        response: Result<Response, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let response = self.check(method, path, response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&text)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>` work.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract a human-readable message from an error response body.
pub fn server_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return GENERIC_SERVER_ERROR.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|value| match value {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Ok(_) => GENERIC_SERVER_ERROR.to_string(),
        Err(_) if body.starts_with('<') => GENERIC_SERVER_ERROR.to_string(),
        Err(_) => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_message_then_error() {
        assert_eq!(
            server_message(r#"{"message": "Category already exists"}"#),
            "Category already exists"
        );
        assert_eq!(server_message(r#"{"error": "Not authorised"}"#), "Not authorised");
        assert_eq!(
            server_message(r#"{"message": "", "error": "Bad payload"}"#),
            "Bad payload"
        );
    }

    #[test]
    fn test_server_message_falls_back() {
        assert_eq!(server_message(""), GENERIC_SERVER_ERROR);
        assert_eq!(server_message(r#"{"code": 500}"#), GENERIC_SERVER_ERROR);
        assert_eq!(server_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(server_message("Product not found"), "Product not found");
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/products"), "http://localhost:3000/products");
        assert_eq!(client.url("admin"), "http://localhost:3000/admin");
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let unit: Result<(), ApiError> = decode_body("");
        assert!(unit.is_ok());
        let bad: Result<Vec<i64>, ApiError> = decode_body("{");
        assert!(matches!(bad, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_server_error_displays_message() {
        let err = ApiError::Server {
            status: 404,
            message: "Order not found".into(),
        };
        assert_eq!(err.to_string(), "Order not found");
        assert_eq!(err.status(), Some(404));
    }
}
