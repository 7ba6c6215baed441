//! Flare resource implementations.
//!
//! Every resource is a [`ScopedResource`](crate::rest::ScopedResource)
//! specialised by a kind:
//!
//! | Resource | Parent | Created with |
//! |---|---|---|
//! | [`Zone`] | environment | [`Zone::create`] |
//! | [`Device`] | zone | [`Device::create`], [`Zone::create_device`] |
//! | [`Thing`] | zone | [`Thing::create`], [`Zone::create_thing`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use flare_sdk::rest::ItemDetails;
//! use flare_sdk::rest::resources::{Device, Zone};
//!
//! let zone = Zone::fetch(&client, "E1", "Z1").await?;
//!
//! let mut device = Device::create(&client, "E1", "Z1", ItemDetails {
//!     name: Some("Beacon".to_string()),
//!     x_parameter: Some(3.0),
//!     y_parameter: Some(4.0),
//!     ..Default::default()
//! }).await?;
//!
//! device.update(&client, ItemDetails {
//!     name: Some("Beacon 2".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

mod device;
mod thing;
mod zone;

use serde::Serialize;
use serde_json::Value;

use crate::rest::record::{DataMap, Position, ResourceRecord};
use crate::rest::resource::{encode_body, ResourceIdentity, ResourceScope};
use crate::rest::ResourceError;

pub use device::{Device, DeviceKind, DEVICE_ID};
pub use thing::{Thing, ThingKind, THING_ID};
pub use zone::{Zone, ZoneKind};

/// Request body shared by devices and things.
#[derive(Serialize)]
struct ItemBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a DataMap>,
    environment: &'a str,
    zone: &'a str,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    position: Position,
}

fn item_create_body(
    resource: &str,
    scope: &ResourceScope,
    record: &ResourceRecord,
) -> Result<Value, ResourceError> {
    encode_body(
        resource,
        &ItemBody {
            name: record.name.as_deref(),
            description: record.description.as_deref(),
            data: record.data.as_ref(),
            environment: scope.environment_id(),
            zone: scope.zone_id().unwrap_or_default(),
            id: None,
            position: record.position,
        },
    )
}

// The service expects `_id` to carry the environment identifier on update.
fn item_update_body(
    resource: &str,
    identity: &ResourceIdentity,
    record: &ResourceRecord,
) -> Result<Value, ResourceError> {
    encode_body(
        resource,
        &ItemBody {
            name: record.name.as_deref(),
            description: record.description.as_deref(),
            data: record.data.as_ref(),
            environment: identity.environment_id(),
            zone: identity.parent_zone_id().unwrap_or_default(),
            id: Some(identity.environment_id()),
            position: record.position,
        },
    )
}
