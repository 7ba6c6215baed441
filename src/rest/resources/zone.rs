//! Zone resource implementation.
//!
//! A zone is a rectangular region inside an environment. Devices and things
//! are created under a zone, so a [`Zone`] also acts as a factory for them.
//!
//! # Example
//!
//! ```rust,ignore
//! use flare_sdk::rest::{ItemDetails, ZoneDetails};
//! use flare_sdk::rest::resources::Zone;
//!
//! let zone = Zone::create(&client, "E1", ZoneDetails {
//!     name: Some("Lobby".to_string()),
//!     x_parameter: Some(0.0),
//!     y_parameter: Some(0.0),
//!     width: Some(12.0),
//!     height: Some(8.0),
//!     ..Default::default()
//! }).await?;
//!
//! let sensor = zone.create_thing(&client, ItemDetails {
//!     name: Some("Door sensor".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::record::{DataMap, Position, ResourceRecord, ZoneDetails};
use crate::rest::resource::{
    encode_body, find, find_data, ResourceIdentity, ResourceKind, ResourceScope,
    ScopedResource, ENVIRONMENT_ID, ZONE_ID,
};
use crate::rest::resources::{Device, Thing};
use crate::rest::{ItemDetails, ResourceError, ResourceOperation, ResourcePath};
use crate::HttpMethod;

/// Marker type describing zones.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneKind;

/// A zone inside an environment.
pub type Zone = ScopedResource<ZoneKind>;

// Data reads use the plain zone path; there is no `/data` suffix for zones.
const ZONE_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Create,
        &[ENVIRONMENT_ID],
        "environments/{environment_id}/zones",
    ),
    ResourcePath::new(
        HttpMethod::Put,
        ResourceOperation::Update,
        &[ENVIRONMENT_ID, ZONE_ID],
        "environments/{environment_id}/zones/{zone_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        &[ENVIRONMENT_ID, ZONE_ID],
        "environments/{environment_id}/zones/{zone_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Data,
        &[ENVIRONMENT_ID, ZONE_ID],
        "environments/{environment_id}/zones/{zone_id}",
    ),
];

#[derive(Serialize)]
struct ZoneCreateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a DataMap>,
    environment: &'a str,
    position: Position,
}

#[derive(Serialize)]
struct ZoneUpdateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a DataMap>,
    environment: &'a str,
    perimeter: Perimeter,
}

#[derive(Serialize)]
struct Perimeter {
    origin: Position,
    size: PerimeterSize,
}

// The API labels are crossed: `height` carries the zone width and `width`
// carries the zone height.
#[derive(Serialize)]
struct PerimeterSize {
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
}

impl ResourceKind for ZoneKind {
    type Details = ZoneDetails;

    const NAME: &'static str = "Zone";
    const ID_NAME: &'static str = ZONE_ID;
    const PATHS: &'static [ResourcePath] = ZONE_PATHS;

    fn create_body(scope: &ResourceScope, record: &ResourceRecord) -> Result<Value, ResourceError> {
        encode_body(
            Self::NAME,
            &ZoneCreateBody {
                name: record.name.as_deref(),
                description: record.description.as_deref(),
                data: record.data.as_ref(),
                environment: scope.environment_id(),
                position: record.position,
            },
        )
    }

    fn update_body(
        identity: &ResourceIdentity,
        record: &ResourceRecord,
    ) -> Result<Value, ResourceError> {
        let extent = record.extent.unwrap_or_default();
        encode_body(
            Self::NAME,
            &ZoneUpdateBody {
                name: record.name.as_deref(),
                description: record.description.as_deref(),
                data: record.data.as_ref(),
                environment: identity.environment_id(),
                perimeter: Perimeter {
                    origin: record.position,
                    size: PerimeterSize {
                        height: extent.width,
                        width: extent.height,
                    },
                },
            },
        )
    }

    fn failure_detail(operation: ResourceOperation) -> &'static str {
        match operation {
            ResourceOperation::Create => "Unable to create FlareZone",
            ResourceOperation::Update => "Unable to update zone",
            ResourceOperation::Find => "Unable to getZone",
            ResourceOperation::Data => "Unable to get Zone Data",
        }
    }
}

impl Zone {
    /// Creates a zone in `environment_id`.
    ///
    /// Width and height are kept locally but not sent; the server learns
    /// the zone's size on the first [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `environment_id` is
    /// empty, or [`ResourceError::HttpFailure`] if the server does not answer
    /// 200 with an `_id`.
    pub async fn create(
        client: &HttpClient,
        environment_id: &str,
        details: ZoneDetails,
    ) -> Result<Self, ResourceError> {
        Self::create_in(client, ResourceScope::environment(environment_id), details).await
    }

    /// Reads a zone by identifiers, without a local handle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if an identifier is empty,
    /// or [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn fetch(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
    ) -> Result<Value, ResourceError> {
        find::<ZoneKind>(client, &[(ENVIRONMENT_ID, environment_id), (ZONE_ID, zone_id)]).await
    }

    /// Reads a zone's data mapping by identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`Zone::fetch`].
    pub async fn fetch_data(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
    ) -> Result<DataMap, ResourceError> {
        find_data::<ZoneKind>(client, &[(ENVIRONMENT_ID, environment_id), (ZONE_ID, zone_id)])
            .await
    }

    /// Creates a thing inside this zone.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoZoneEnvironmentAvailable`] if this zone
    /// lacks an identifier, otherwise the errors of [`Thing::create`].
    pub async fn create_thing(
        &self,
        client: &HttpClient,
        details: ItemDetails,
    ) -> Result<Thing, ResourceError> {
        let (environment_id, zone_id) = self.parent_ids()?;
        Thing::create(client, environment_id, zone_id, details).await
    }

    /// Creates a device inside this zone.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoZoneEnvironmentAvailable`] if this zone
    /// lacks an identifier, otherwise the errors of [`Device::create`].
    pub async fn create_device(
        &self,
        client: &HttpClient,
        details: ItemDetails,
    ) -> Result<Device, ResourceError> {
        let (environment_id, zone_id) = self.parent_ids()?;
        Device::create(client, environment_id, zone_id, details).await
    }

    fn parent_ids(&self) -> Result<(&str, &str), ResourceError> {
        let environment_id = self.environment_id();
        let zone_id = self.resource_id();
        if environment_id.is_empty() || zone_id.is_empty() {
            return Err(ResourceError::NoZoneEnvironmentAvailable);
        }
        Ok((environment_id, zone_id))
    }
}

// Verify Zone is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Zone>();
};
