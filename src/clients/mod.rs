//! HTTP client types for Flare API communication.
//!
//! This module provides the transport layer every resource operation goes
//! through. It handles request construction, JSON encoding and decoding, and
//! collapses every non-200 response into an error.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Methods used by the API (GET, POST, PUT)
//! - [`HttpError`]: Unified transport error
//!
//! # Example
//!
//! ```rust,ignore
//! use flare_sdk::{BaseUrl, FlareConfig};
//! use flare_sdk::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = FlareConfig::from_env()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "environments/E1/zones/Z1")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. A failed request is surfaced to the caller immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, SUCCESS_STATUS};
