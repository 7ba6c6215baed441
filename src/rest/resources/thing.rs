//! Thing resource implementation.
//!
//! A thing is a tracked object in a zone (a person, an asset, a tag).

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

/// Name of the thing identifier.
pub const THING_ID: &str = "thing_id";

/// Marker type describing things.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThingKind;

/// A thing tracked in a zone.
pub type Thing = ScopedResource<ThingKind>;

// Existing things sit directly under the zone, without a `things` segment.
const THING_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Create,
        &[ENVIRONMENT_ID, ZONE_ID],
        "environments/{environment_id}/zones/{zone_id}/things",
    ),
    ResourcePath::new(
        HttpMethod::Put,
        ResourceOperation::Update,
        &[ENVIRONMENT_ID, ZONE_ID, THING_ID],
        "environments/{environment_id}/zones/{zone_id}/{thing_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        &[ENVIRONMENT_ID, ZONE_ID, THING_ID],
        "environments/{environment_id}/zones/{zone_id}/{thing_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Data,
        &[ENVIRONMENT_ID, ZONE_ID, THING_ID],
        "environments/{environment_id}/zones/{zone_id}/{thing_id}/data",
    ),
];

impl ResourceKind for ThingKind {
    type Details = ItemDetails;

    const NAME: &'static str = "Thing";
    const ID_NAME: &'static str = THING_ID;
    const PATHS: &'static [ResourcePath] = THING_PATHS;

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
            ResourceOperation::Create => "Unable to create FlareThing",
            ResourceOperation::Update => "Unable to update thing",
            ResourceOperation::Find => "Unable to getThing",
            ResourceOperation::Data => "Unable to get thing Data",
        }
    }
}

impl Thing {
    /// Creates a thing in zone `zone_id` of `environment_id`.
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

    /// Reads a thing by identifiers, without a local handle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if an identifier is empty,
    /// or [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn fetch(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
        thing_id: &str,
    ) -> Result<Value, ResourceError> {
        find::<ThingKind>(
            client,
            &[
                (ENVIRONMENT_ID, environment_id),
                (ZONE_ID, zone_id),
                (THING_ID, thing_id),
            ],
        )
        .await
    }

    /// Reads a thing's data mapping by identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`Thing::fetch`].
    pub async fn fetch_data(
        client: &HttpClient,
        environment_id: &str,
        zone_id: &str,
        thing_id: &str,
    ) -> Result<DataMap, ResourceError> {
        find_data::<ThingKind>(
            client,
            &[
                (ENVIRONMENT_ID, environment_id),
                (ZONE_ID, zone_id),
                (THING_ID, thing_id),
            ],
        )
        .await
    }

    /// Returns the server-assigned thing identifier.
    #[must_use]
    pub fn thing_id(&self) -> &str {
        self.resource_id()
    }
}
