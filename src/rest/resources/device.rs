//! Device resource implementation.
//!
//! A device is a piece of hardware placed in a zone. It is usually created
//! through [`Zone::create_device`](crate::rest::resources::Zone::create_device).

use serde_json::Value;

use crate::clients::HttpClient;
use crate::rest::record::{DataMap, ItemDetails, ResourceRecord};
use crate::rest::resource::{
    find, find_data, ResourceIdentity, ResourceKind, ResourceScope, ScopedResource,
    ENVIRONMENT_ID, ZONE_ID,
};
use crate::rest::resources::{item_create_body, item_update_body};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath};
use crate::HttpMethod;

/// Name of the device identifier.
pub const DEVICE_ID: &str = "device_id";

/// Marker type describing devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceKind;

/// A device placed in a zone.
pub type Device = ScopedResource<DeviceKind>;

// Devices are created under `zones/devices` without the zone identifier,
// and addressed afterwards directly under the environment.
const DEVICE_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Create,
        &[ENVIRONMENT_ID],
        "environments/{environment_id}/zones/devices",
    ),
    ResourcePath::new(
        HttpMethod::Put,
        ResourceOperation::Update,
        &[ENVIRONMENT_ID, DEVICE_ID],
        "environments/{environment_id}/devices/{device_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        &[ENVIRONMENT_ID, DEVICE_ID],
        "environments/{environment_id}/devices/{device_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Data,
        &[ENVIRONMENT_ID, DEVICE_ID],
        "environments/{environment_id}/devices/{device_id}/data",
    ),
];

impl ResourceKind for DeviceKind {
    type Details = ItemDetails;

    const NAME: &'static str = "Device";
    const ID_NAME: &'static str = DEVICE_ID;
    const PATHS: &'static [ResourcePath] = DEVICE_PATHS;

    fn create_body(scope: &ResourceScope, record: &ResourceRecord) -> Result<Value, ResourceError> {
        item_create_body(Self::NAME, scope, record)
    }

    fn update_body(
        identity: &ResourceIdentity,
        record: &ResourceRecord,
    ) -> Result<Value, ResourceError> {
        item_update_body(Self::NAME, identity, record)
    }

    fn failure_detail(operation: ResourceOperation) -> &'static str {
        match operation {
            ResourceOperation::Create => "Unable to create FlareDevice",
            ResourceOperation::Update => "Unable to update device",
            ResourceOperation::Find => "Unable to getDevice",
            ResourceOperation::Data => "Unable to get device Data",
        }
    }
}

impl Device {
    /// Creates a device in zone `zone_id` of `environment_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if either identifier is
    /// empty, or [`ResourceError::HttpFailure`] if the server does not answer
    /// 200 with an `_id`.
    pub async fn create(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
        details: ItemDetails,
    ) -> Result<Self, ResourceError> {
        Self::create_in(client, ResourceScope::zone(environment_id, zone_id), details).await
    }

    /// Reads a device by identifiers, without a local handle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if an identifier is empty,
    /// or [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn fetch(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
        device_id: &str,
    ) -> Result<Value, ResourceError> {
        find::<DeviceKind>(
            client,
            &[
                (ENVIRONMENT_ID, environment_id),
                (ZONE_ID, zone_id),
                (DEVICE_ID, device_id),
            ],
        )
        .await
    }

    /// Reads a device's data mapping by identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`Device::fetch`].
    pub async fn fetch_data(
        client: &HttpClient,
        environment_id: &str,
        device_id: &str,
    ) -> Result<DataMap, ResourceError> {
        find_data::<DeviceKind>(
            client,
            &[(ENVIRONMENT_ID, environment_id), (DEVICE_ID, device_id)],
        )
        .await
    }

    /// Returns the server-assigned device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.resource_id()
    }
}
