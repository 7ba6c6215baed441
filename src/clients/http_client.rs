//! HTTP client for Flare API communication.
//!
//! This module provides the [`HttpClient`] type, the transport every resource
//! operation goes through: one request in, one status and JSON body out.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, FlareConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Flare API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`content-type`, `accept`, `user-agent`)
/// - JSON body serialization and response parsing
///
/// It performs no retries and no authentication. Any status other than 200 is
/// returned as [`HttpError::Response`].
///
/// # Example
///
/// ```rust,ignore
/// use flare_sdk::{BaseUrl, FlareConfig, HttpClient};
///
/// let config = FlareConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:1234").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let response = client.get("environments/E1/zones/Z1", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &FlareConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}Flare SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers.insert("content-type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Flare API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The status is anything but 200 (`Response`)
    /// - A 200 body is not valid JSON (`UnexpectedBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.to_lowercase(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "sending Flare request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(method = %request.http_method, url = %url, status = code, "received Flare response");

        let response = HttpResponse::new(code, res_headers, Value::Null);
        if !response.is_ok() {
            tracing::warn!(
                "Flare request {} {} failed with status {}",
                request.http_method,
                request.path,
                code
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
            }));
        }

        let body = Self::parse_body(&body_text)?;
        Ok(HttpResponse { body, ..response })
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = Self::with_query(HttpRequest::builder(HttpMethod::Get, path), query).build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(
        &self,
        path: &str,
        body: Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::builder(HttpMethod::Put, path).body(body);
        let request = Self::with_query(builder, query).build()?;
        self.request(request).await
    }

    fn with_query(
        builder: HttpRequestBuilder,
        query: Option<HashMap<String, String>>,
    ) -> HttpRequestBuilder {
        query
            .into_iter()
            .flatten()
            .fold(builder, |b, (key, value)| b.query_param(key, value))
    }

    /// Parses a 200 body. An empty body reads as `{}`.
    fn parse_body(body_text: &str) -> Result<Value, HttpError> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        serde_json::from_str(body_text).map_err(|e| HttpError::UnexpectedBody {
            reason: format!("invalid JSON: {e}"),
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(prefix: Option<&str>) -> FlareConfig {
        let mut builder =
            FlareConfig::builder().base_url(BaseUrl::new("http://localhost:1234").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(client.base_url().as_ref(), "http://localhost:1234/");
    }

    #[test]
    fn test_content_type_header_is_json() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(
            client.default_headers().get("content-type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let user_agent = client.default_headers().get("user-agent").unwrap();
        assert!(user_agent.starts_with("Flare SDK v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&create_test_config(Some("MyApp/1.0"))).unwrap();
        let user_agent = client.default_headers().get("user-agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Flare SDK"));
    }

    #[test]
    fn test_parse_body_accepts_empty_text() {
        assert_eq!(HttpClient::parse_body("").unwrap(), serde_json::json!({}));
        assert_eq!(HttpClient::parse_body("  ").unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_parse_body_rejects_invalid_json() {
        let result = HttpClient::parse_body("<html>oops</html>");
        assert!(matches!(result, Err(HttpError::UnexpectedBody { .. })));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
