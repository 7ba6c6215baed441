//! # Flare SDK
//!
//! A Rust client for the Flare spatial IoT service. Flare models the
//! physical world as environments divided into zones, with devices and
//! things placed inside zones.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FlareConfig`] and [`FlareConfigBuilder`]
//! - A validated [`BaseUrl`] newtype for the service endpoint
//! - An async HTTP client that treats only status 200 as success
//! - [`Zone`], [`Device`] and [`Thing`] resources that mirror their fields
//!   locally and report failures as structured [`ResourceError`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use flare_sdk::{BaseUrl, FlareConfig, HttpClient};
//!
//! let config = FlareConfig::builder()
//!     .base_url(BaseUrl::new("https://flare.example.com/api").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config).unwrap();
//! assert_eq!(client.base_url().as_ref(), "https://flare.example.com/api/");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use flare_sdk::{HttpClient, FlareConfig, Zone};
//! use flare_sdk::rest::{ItemDetails, ZoneDetails};
//!
//! let client = HttpClient::new(&FlareConfig::from_env()?)?;
//!
//! let zone = Zone::create(&client, "E1", ZoneDetails {
//!     name: Some("Lobby".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! let thing = zone.create_thing(&client, ItemDetails {
//!     name: Some("Forklift".to_string()),
//!     x_parameter: Some(2.5),
//!     y_parameter: Some(7.0),
//!     ..Default::default()
//! }).await?;
//!
//! println!("{} lives in zone {}", thing.thing_id(), thing.zone_id());
//! ```
//!
//! ## Error Handling
//!
//! Resource operations fail with [`ResourceError`]. Missing identifiers are
//! rejected before any request is sent; every transport failure and every
//! non-200 status becomes [`ResourceError::HttpFailure`]:
//!
//! ```rust,ignore
//! match Zone::fetch(&client, "E1", "Z1").await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) => eprintln!("{}: {}", e.error_code(), e.error_detail()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Identifiers and newtypes validate before any I/O
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, FlareConfig, FlareConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use rest::{Device, ResourceError, Thing, Zone};
