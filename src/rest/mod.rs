//! Resource layer for the Flare API.
//!
//! This module builds on [`crate::clients`] to expose the Flare spatial
//! resources:
//!
//! - **[`ScopedResource`]**: the shared lifecycle (create, update, get,
//!   get data) parameterised by a [`ResourceKind`]
//! - **[`ResourceRecord`]**: the local mirror of a resource's fields
//! - **Path building**: per-kind path tables resolved with [`get_path`]
//! - **[`ResourceError`]**: the structured `(error_code, error_detail)` error
//!
//! # Example
//!
//! ```rust,ignore
//! use flare_sdk::{FlareConfig, HttpClient};
//! use flare_sdk::rest::{ItemDetails, ZoneDetails};
//! use flare_sdk::rest::resources::Zone;
//!
//! let client = HttpClient::new(&FlareConfig::from_env()?)?;
//!
//! let mut zone = Zone::create(&client, "E1", ZoneDetails {
//!     name: Some("Lobby".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! zone.update(&client, ZoneDetails {
//!     name: Some("Main lobby".to_string()),
//!     width: Some(20.0),
//!     height: Some(10.0),
//!     ..Default::default()
//! }).await?;
//!
//! let data = zone.get_data(&client).await?;
//! ```

mod errors;
mod path;
mod record;
mod resource;
pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use record::{DataMap, Extent, ItemDetails, Position, ResourceRecord, ZoneDetails};
pub use resource::{
    ResourceIdentity, ResourceKind, ResourceScope, ScopedResource, ENVIRONMENT_ID, ZONE_ID,
};
pub use resources::{Device, Thing, Zone};
