//! HTTP response types for the Flare SDK.

use std::collections::HashMap;

/// The only status code the Flare API uses to signal success.
pub const SUCCESS_STATUS: u16 = 200;

/// An HTTP response from the Flare API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is exactly 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == SUCCESS_STATUS
    }

    /// Returns a top-level field of the body, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.get(key)
    }
}
