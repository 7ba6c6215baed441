//! Path building infrastructure for scoped resources.
//!
//! Every Flare resource is addressed through its ancestors:
//!
//! ```text
//! environments/{environment_id}/zones/{zone_id}
//! environments/{environment_id}/zones/{zone_id}/things
//! environments/{environment_id}/devices/{device_id}/data
//! ```
//!
//! Each resource kind declares a table of [`ResourcePath`]s, one per
//! operation. [`get_path`] picks the most specific entry whose required
//! identifiers are available and [`build_path`] interpolates them.
//!
//! # Example
//!
//! ```rust
//! use flare_sdk::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use flare_sdk::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[ResourcePath::new(
//!     HttpMethod::Get,
//!     ResourceOperation::Find,
//!     &["environment_id", "zone_id"],
//!     "environments/{environment_id}/zones/{zone_id}",
//! )];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["environment_id", "zone_id"]).unwrap();
//! let url = build_path(path.template, &[("environment_id", "E1"), ("zone_id", "Z 1")]);
//! assert_eq!(url, "environments/E1/zones/Z%201");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a scoped resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a resource under its parent (POST).
    Create,
    /// Replace a resource's fields (PUT).
    Update,
    /// Read a resource's remote representation (GET).
    Find,
    /// Read a resource's auxiliary data mapping (GET).
    Data,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Find => "find",
            Self::Data => "data",
        }
    }
}

/// A path configuration for a resource operation.
///
/// Templates use `{id_name}` placeholders for identifier interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required identifier names (e.g., `["environment_id", "zone_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow path tables to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required identifiers for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required identifiers are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters by operation, keeps the paths whose required identifiers are all
/// available, and returns the one requiring the most identifiers.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating identifiers.
///
/// Each value is percent-encoded, so an identifier can never add or remove
/// path segments. Placeholders without a value are left untouched.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(&format!("{{{key}}}"), &urlencoding::encode(value))
    })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
