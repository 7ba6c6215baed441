//! The generic scoped resource shared by zones, devices and things.
//!
//! Zones, devices and things follow one lifecycle:
//!
//! 1. Creation validates the parent identifiers, POSTs the caller's fields
//!    and keeps the `_id` the server assigns. The local [`ResourceRecord`] is
//!    filled from the caller's input, not from the response.
//! 2. [`ScopedResource::update`] PUTs new fields and, only after a 200,
//!    replaces the local record with them.
//! 3. [`ScopedResource::get`] and [`ScopedResource::get_data`] read the remote
//!    representation without touching local state.
//!
//! What differs between kinds (path table, request bodies, error wording) is
//! supplied by a [`ResourceKind`] implementation. The concrete kinds live in
//! [`crate::rest::resources`].
//!
//! # Implementing a Kind
//!
//! ```rust,ignore
//! pub struct BeaconKind;
//!
//! impl ResourceKind for BeaconKind {
//!     type Details = ItemDetails;
//!
//!     const NAME: &'static str = "Beacon";
//!     const ID_NAME: &'static str = "beacon_id";
//!     const PATHS: &'static [ResourcePath] = &[/* ... */];
//!
//!     fn create_body(scope: &ResourceScope, record: &ResourceRecord) -> Result<Value, ResourceError> { /* ... */ }
//!     fn update_body(identity: &ResourceIdentity, record: &ResourceRecord) -> Result<Value, ResourceError> { /* ... */ }
//!     fn failure_detail(operation: ResourceOperation) -> &'static str { /* ... */ }
//! }
//!
//! pub type Beacon = ScopedResource<BeaconKind>;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::record::{DataMap, Extent, Position, ResourceRecord};
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// Identifier name of the environment every resource lives in.
pub const ENVIRONMENT_ID: &str = "environment_id";

/// Identifier name of the zone that scopes devices and things.
pub const ZONE_ID: &str = "zone_id";

/// The parent address a resource is created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceScope {
    environment_id: String,
    zone_id: Option<String>,
}

impl ResourceScope {
    /// A scope directly under an environment (where zones live).
    #[must_use]
    pub fn environment(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            zone_id: None,
        }
    }

    /// A scope under a zone (where devices and things live).
    #[must_use]
    pub fn zone(environment_id: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            zone_id: Some(zone_id.into()),
        }
    }

    /// Returns the environment identifier.
    #[must_use]
    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Returns the zone identifier, for zone-scoped resources.
    #[must_use]
    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    fn ids(&self) -> Vec<(&'static str, &str)> {
        let mut ids = vec![(ENVIRONMENT_ID, self.environment_id.as_str())];
        if let Some(zone_id) = &self.zone_id {
            ids.push((ZONE_ID, zone_id.as_str()));
        }
        ids
    }
}

/// The full address of a created resource: its scope plus the
/// server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    scope: ResourceScope,
    resource_id: String,
}

impl ResourceIdentity {
    pub(crate) fn new(scope: ResourceScope, resource_id: impl Into<String>) -> Self {
        Self {
            scope,
            resource_id: resource_id.into(),
        }
    }

    /// Returns the environment identifier.
    #[must_use]
    pub fn environment_id(&self) -> &str {
        self.scope.environment_id()
    }

    /// Returns the parent zone identifier, for zone-scoped resources.
    #[must_use]
    pub fn parent_zone_id(&self) -> Option<&str> {
        self.scope.zone_id()
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn ids(&self, id_name: &'static str) -> Vec<(&'static str, &str)> {
        let mut ids = self.scope.ids();
        ids.push((id_name, self.resource_id.as_str()));
        ids
    }
}

/// What distinguishes one kind of scoped resource from another.
pub trait ResourceKind: Send + Sync + 'static {
    /// The caller-supplied fields accepted on create and update.
    type Details: Into<ResourceRecord>;

    /// The resource name used in log and error messages (e.g., "Zone").
    const NAME: &'static str;

    /// The name of the resource's own identifier (e.g., `zone_id`).
    ///
    /// Also used as the query parameter sent with updates and reads.
    const ID_NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Builds the POST body for a new resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the record cannot be encoded.
    fn create_body(scope: &ResourceScope, record: &ResourceRecord) -> Result<Value, ResourceError>;

    /// Builds the PUT body for an existing resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the record cannot be encoded.
    fn update_body(
        identity: &ResourceIdentity,
        record: &ResourceRecord,
    ) -> Result<Value, ResourceError>;

    /// The `HttpFailure` detail reported when an operation fails.
    fn failure_detail(operation: ResourceOperation) -> &'static str;
}

/// A remote resource together with the local mirror of its fields.
///
/// Instances only exist after the server accepted the creation, so the
/// identity is always complete. Use the kind aliases
/// [`Zone`](crate::rest::resources::Zone),
/// [`Device`](crate::rest::resources::Device) and
/// [`Thing`](crate::rest::resources::Thing) rather than naming this type.
pub struct ScopedResource<K: ResourceKind> {
    identity: ResourceIdentity,
    record: ResourceRecord,
    kind: PhantomData<K>,
}

impl<K: ResourceKind> ScopedResource<K> {
    /// Creates the resource remotely and returns its local handle.
    pub(crate) async fn create_in(
        client: &HttpClient,
        scope: ResourceScope,
        details: K::Details,
    ) -> Result<Self, ResourceError> {
        let ids = scope.ids();
        require_ids(K::NAME, &ids)?;

        let record: ResourceRecord = details.into();
        let body = K::create_body(&scope, &record)?;
        let response = send::<K>(client, ResourceOperation::Create, &ids, Some(body)).await?;

        let resource_id = extract_id(&response)
            .map_err(|e| ResourceError::http_failure(K::failure_detail(ResourceOperation::Create), e))?;

        tracing::info!(
            resource = K::NAME,
            environment_id = %scope.environment_id(),
            id = %resource_id,
            "{} was instantiated successfully",
            K::NAME
        );

        Ok(Self {
            identity: ResourceIdentity::new(scope, resource_id),
            record,
            kind: PhantomData,
        })
    }

    /// Updates the resource remotely and, on success, mirrors `details`
    /// into local state.
    ///
    /// Every local field is replaced, including ones left unset in `details`.
    /// On failure local state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if an identifier is empty, or
    /// [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn update(
        &mut self,
        client: &HttpClient,
        details: K::Details,
    ) -> Result<(), ResourceError> {
        let ids = self.identity.ids(K::ID_NAME);
        require_ids(K::NAME, &ids)?;

        let record: ResourceRecord = details.into();
        let body = K::update_body(&self.identity, &record)?;
        send::<K>(client, ResourceOperation::Update, &ids, Some(body)).await?;

        tracing::info!(
            resource = K::NAME,
            id = %self.identity.resource_id(),
            "{} updated",
            K::NAME
        );

        self.record = record;
        Ok(())
    }

    /// Reads the remote representation of this resource.
    ///
    /// The body is returned as parsed; local state is not updated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn get(&self, client: &HttpClient) -> Result<Value, ResourceError> {
        find::<K>(client, &self.identity.ids(K::ID_NAME)).await
    }

    /// Reads the auxiliary data mapping of this resource.
    ///
    /// Returns an empty mapping when the response has no `data` field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::HttpFailure`] if the server does not answer 200.
    pub async fn get_data(&self, client: &HttpClient) -> Result<DataMap, ResourceError> {
        find_data::<K>(client, &self.identity.ids(K::ID_NAME)).await
    }

    /// Returns the full identity of this resource.
    #[must_use]
    pub const fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    /// Returns the environment identifier.
    #[must_use]
    pub fn environment_id(&self) -> &str {
        self.identity.environment_id()
    }

    /// Returns the zone identifier: the parent zone for devices and things,
    /// the resource's own identifier for a zone.
    #[must_use]
    pub fn zone_id(&self) -> &str {
        self.identity
            .parent_zone_id()
            .unwrap_or_else(|| self.identity.resource_id())
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        self.identity.resource_id()
    }

    /// Returns the local record.
    #[must_use]
    pub const fn record(&self) -> &ResourceRecord {
        &self.record
    }

    /// Returns the locally mirrored name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    /// Returns the locally mirrored description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    /// Returns the locally mirrored data mapping.
    #[must_use]
    pub const fn data(&self) -> Option<&DataMap> {
        self.record.data.as_ref()
    }

    /// Returns the locally mirrored position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.record.position
    }

    /// Returns the locally mirrored extent (zones only).
    #[must_use]
    pub const fn extent(&self) -> Option<Extent> {
        self.record.extent
    }
}

impl<K: ResourceKind> fmt::Debug for ScopedResource<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("identity", &self.identity)
            .field("record", &self.record)
            .finish()
    }
}

impl<K: ResourceKind> Clone for ScopedResource<K> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            record: self.record.clone(),
            kind: PhantomData,
        }
    }
}

/// Rejects empty identifiers before any request is made.
pub(crate) fn require_ids(
    resource: &str,
    ids: &[(&'static str, &str)],
) -> Result<(), ResourceError> {
    let missing: Vec<&str> = ids
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ResourceError::invalid_parameter(format!(
            "{resource} - {} cannot be null or empty.",
            missing.join(", ")
        )))
    }
}

/// Reads a resource's remote representation by explicit identifiers.
pub(crate) async fn find<K: ResourceKind>(
    client: &HttpClient,
    ids: &[(&'static str, &str)],
) -> Result<Value, ResourceError> {
    require_ids(K::NAME, ids)?;
    let response = send::<K>(client, ResourceOperation::Find, ids, None).await?;

    tracing::info!(resource = K::NAME, ids = ?ids, "Successfully returned {}", K::NAME);
    Ok(response.body)
}

/// Reads a resource's `data` mapping by explicit identifiers.
pub(crate) async fn find_data<K: ResourceKind>(
    client: &HttpClient,
    ids: &[(&'static str, &str)],
) -> Result<DataMap, ResourceError> {
    require_ids(K::NAME, ids)?;
    let response = send::<K>(client, ResourceOperation::Data, ids, None).await?;

    let data = extract_data(response.body)
        .map_err(|e| ResourceError::http_failure(K::failure_detail(ResourceOperation::Data), e))?;

    tracing::info!(resource = K::NAME, ids = ?ids, "Successfully returned {} data", K::NAME);
    Ok(data)
}

/// Encodes a request body, reporting failures as invalid parameters.
pub(crate) fn encode_body<T: Serialize>(resource: &str, body: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(body).map_err(|e| {
        ResourceError::invalid_parameter(format!("{resource} - unable to encode parameters: {e}"))
    })
}

async fn send<K: ResourceKind>(
    client: &HttpClient,
    operation: ResourceOperation,
    ids: &[(&'static str, &str)],
    body: Option<Value>,
) -> Result<HttpResponse, ResourceError> {
    let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(K::PATHS, operation, &available_ids).ok_or_else(|| {
        ResourceError::invalid_parameter(format!(
            "{} - cannot resolve path for {} with identifiers {available_ids:?}",
            K::NAME,
            operation.as_str()
        ))
    })?;

    let mut builder = HttpRequest::builder(path.http_method, build_path(path.template, ids));
    if matches!(operation, ResourceOperation::Update | ResourceOperation::Find) {
        if let Some((name, value)) = ids.iter().find(|(name, _)| *name == K::ID_NAME) {
            builder = builder.query_param(*name, *value);
        }
    }
    if let Some(body) = body {
        builder = builder.body(body);
    }

    let failure = |e: HttpError| ResourceError::http_failure(K::failure_detail(operation), e);
    let request = builder.build().map_err(|e| failure(e.into()))?;
    client.request(request).await.map_err(failure)
}

fn extract_id(response: &HttpResponse) -> Result<String, HttpError> {
    response
        .get("_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| HttpError::UnexpectedBody {
            reason: "response has no string `_id`".to_string(),
        })
}

fn extract_data(body: Value) -> Result<DataMap, HttpError> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Object(data)) => Ok(data),
            Some(other) if is_truthy(&other) => Err(HttpError::UnexpectedBody {
                reason: format!("`data` is not an object: {other}"),
            }),
            _ => Ok(DataMap::new()),
        },
        _ => Ok(DataMap::new()),
    }
}

// `false`, `0`, `""` and `null` read as "no data".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_require_ids_accepts_populated_ids() {
        assert!(require_ids("Thing", &[(ENVIRONMENT_ID, "E1"), (ZONE_ID, "Z1")]).is_ok());
    }

    #[test]
    fn test_require_ids_names_every_missing_id() {
        let error = require_ids(
            "Thing",
            &[(ENVIRONMENT_ID, ""), (ZONE_ID, "Z1"), ("thing_id", "")],
        )
        .unwrap_err();

        assert_eq!(error.error_code(), "Invalid_Parameter");
        assert_eq!(
            error.error_detail(),
            "Thing - environment_id, thing_id cannot be null or empty."
        );
    }

    #[test]
    fn test_scope_ids_include_zone_only_when_scoped() {
        assert_eq!(
            ResourceScope::environment("E1").ids(),
            vec![(ENVIRONMENT_ID, "E1")]
        );
        assert_eq!(
            ResourceScope::zone("E1", "Z1").ids(),
            vec![(ENVIRONMENT_ID, "E1"), (ZONE_ID, "Z1")]
        );
    }

    #[test]
    fn test_identity_ids_append_own_id() {
        let identity = ResourceIdentity {
            scope: ResourceScope::zone("E1", "Z1"),
            resource_id: "D1".to_string(),
        };
        assert_eq!(
            identity.ids("device_id"),
            vec![(ENVIRONMENT_ID, "E1"), (ZONE_ID, "Z1"), ("device_id", "D1")]
        );
    }

    #[test]
    fn test_extract_id_requires_non_empty_string() {
        let ok = HttpResponse::new(200, HashMap::new(), json!({"_id": "X"}));
        assert_eq!(extract_id(&ok).unwrap(), "X");

        for body in [json!({}), json!({"_id": ""}), json!({"_id": 7})] {
            let response = HttpResponse::new(200, HashMap::new(), body);
            assert!(matches!(
                extract_id(&response),
                Err(HttpError::UnexpectedBody { .. })
            ));
        }
    }

    #[test]
    fn test_extract_data_defaults_to_empty_mapping() {
        assert!(extract_data(json!({})).unwrap().is_empty());
        assert!(extract_data(json!({"data": null})).unwrap().is_empty());
        assert!(extract_data(json!([])).unwrap().is_empty());

        let data = extract_data(json!({"data": {"temp": 21.5}})).unwrap();
        assert_eq!(data.get("temp"), Some(&json!(21.5)));

        for falsy in [json!(false), json!(0), json!(0.0), json!("")] {
            let data = extract_data(json!({"_id": "Z1", "data": falsy})).unwrap();
            assert!(data.is_empty(), "expected an empty mapping for {falsy}");
        }

        assert!(extract_data(json!({"data": "oops"})).is_err());
        assert!(extract_data(json!({"data": 7})).is_err());
        assert!(extract_data(json!({"data": true})).is_err());
        assert!(extract_data(json!({"data": [1]})).is_err());
    }
}
