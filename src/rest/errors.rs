//! Resource-level error types.
//!
//! Every resource operation fails with a [`ResourceError`], which carries the
//! structured `(error_code, error_detail)` pair the Flare API clients share:
//!
//! | Variant | `error_code()` | Raised when |
//! |---|---|---|
//! | [`ResourceError::InvalidParameter`] | `Invalid_Parameter` | an identifier is missing, before any request |
//! | [`ResourceError::HttpFailure`] | `http_failure` | the transport fails or answers anything but 200 |
//! | [`ResourceError::NoZoneEnvironmentAvailable`] | `no_zone_environment_available` | a zone without identifiers is asked to create a child |
//!
//! # Example
//!
//! ```rust,ignore
//! use flare_sdk::rest::ResourceError;
//! use flare_sdk::rest::resources::Zone;
//!
//! match Zone::fetch(&client, "E1", "Z1").await {
//!     Ok(zone) => println!("{zone}"),
//!     Err(e @ ResourceError::HttpFailure { .. }) => {
//!         println!("{}: {} (status {:?})", e.error_code(), e.error_detail(), e.status());
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required identifier or parameter was missing or empty.
    ///
    /// Raised before any network call is made. Never retried.
    #[error("{detail}")]
    InvalidParameter {
        /// Which parameter was rejected and why.
        detail: String,
    },

    /// The remote call did not succeed.
    ///
    /// Network failures, 4xx, 5xx, any other non-200 status and unusable
    /// 200 bodies all collapse into this variant.
    #[error("{detail}")]
    HttpFailure {
        /// What the SDK was trying to do.
        detail: String,
        /// The underlying transport error.
        #[source]
        source: HttpError,
    },

    /// A zone was asked to create a child without holding both identifiers.
    #[error("The current zone instance has either not environmentId or no zoneId")]
    NoZoneEnvironmentAvailable,
}

impl ResourceError {
    /// Creates an [`ResourceError::InvalidParameter`].
    #[must_use]
    pub fn invalid_parameter(detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            detail: detail.into(),
        }
    }

    /// Creates an [`ResourceError::HttpFailure`] wrapping a transport error.
    #[must_use]
    pub fn http_failure(detail: impl Into<String>, source: HttpError) -> Self {
        Self::HttpFailure {
            detail: detail.into(),
            source,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "Invalid_Parameter",
            Self::HttpFailure { .. } => "http_failure",
            Self::NoZoneEnvironmentAvailable => "no_zone_environment_available",
        }
    }

    /// Returns the human-readable error detail.
    #[must_use]
    pub fn error_detail(&self) -> String {
        self.to_string()
    }

    /// Returns the HTTP status code behind an `HttpFailure`, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpFailure { source, .. } => source.status(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
