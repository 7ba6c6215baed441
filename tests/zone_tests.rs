//! Integration tests for the Zone resource.
//!
//! These tests run zone operations against a mock Flare server and verify
//! the requests sent, the local state kept, and the errors reported.

use flare_sdk::rest::{DataMap, Extent, ItemDetails, Position, ResourceRecord, ZoneDetails};
use flare_sdk::{BaseUrl, FlareConfig, HttpClient, ResourceError, Zone};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> HttpClient {
    let config = FlareConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn lobby() -> ZoneDetails {
    ZoneDetails {
        name: Some("Lobby".to_string()),
        description: Some("Ground floor".to_string()),
        x_parameter: Some(1.0),
        y_parameter: Some(2.0),
        width: Some(10.0),
        height: Some(4.0),
        ..Default::default()
    }
}

/// Mounts a successful zone creation returning `Z1`.
async fn mount_create(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/environments/E1/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "Z1"})))
        .mount(server)
        .await;
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_fields_and_keeps_server_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/environments/E1/zones"))
        .and(body_json(json!({
            "name": "Lobby",
            "description": "Ground floor",
            "environment": "E1",
            "position": {"x": 1.0, "y": 2.0}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_id": "Z1", "name": "Renamed by server"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);

    assert_eq!(zone.environment_id(), "E1");
    assert_eq!(zone.zone_id(), "Z1");
    assert_eq!(zone.resource_id(), "Z1");
    // Local state mirrors the input, not the response.
    assert_eq!(zone.name(), Some("Lobby"));
    assert_eq!(zone.description(), Some("Ground floor"));
    assert_eq!(zone.position(), Position::new(1.0, 2.0));
    assert_eq!(
        zone.extent(),
        Some(Extent {
            width: Some(10.0),
            height: Some(4.0)
        })
    );
    assert_eq!(zone.record(), &ResourceRecord::from(lobby()));
}

#[tokio::test]
async fn test_create_with_empty_environment_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::create(&client, "", lobby()).await);

    assert!(matches!(error, ResourceError::InvalidParameter { .. }));
    assert_eq!(error.error_code(), "Invalid_Parameter");
    assert!(error.error_detail().contains("environment_id"));
}

#[tokio::test]
async fn test_create_server_error_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::create(&client, "E1", lobby()).await);

    assert_eq!(error.error_code(), "http_failure");
    assert_eq!(error.error_detail(), "Unable to create FlareZone");
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_create_without_id_in_response_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Lobby"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::create(&client, "E1", lobby()).await);

    assert_eq!(error.error_detail(), "Unable to create FlareZone");
    assert_eq!(error.status(), Some(200));
}

#[tokio::test]
async fn test_create_percent_encodes_environment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/environments/E%201/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "Z1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E 1", ZoneDetails::default()).await);
    assert_eq!(zone.environment_id(), "E 1");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_puts_perimeter_and_replaces_local_state() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("PUT"))
        .and(path("/environments/E1/zones/Z1"))
        .and(query_param("zone_id", "Z1"))
        .and(body_json(json!({
            "name": "Atrium",
            "environment": "E1",
            "perimeter": {
                "origin": {"x": 5.0, "y": 6.0},
                "size": {"height": 20.0, "width": 8.0}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);

    assert_ok!(
        zone.update(
            &client,
            ZoneDetails {
                name: Some("Atrium".to_string()),
                x_parameter: Some(5.0),
                y_parameter: Some(6.0),
                width: Some(20.0),
                height: Some(8.0),
                ..Default::default()
            },
        )
        .await
    );

    assert_eq!(zone.name(), Some("Atrium"));
    // Fields left unset in the update are cleared locally.
    assert_eq!(zone.description(), None);
    assert_eq!(zone.position(), Position::new(5.0, 6.0));
    assert_eq!(
        zone.extent(),
        Some(Extent {
            width: Some(20.0),
            height: Some(8.0)
        })
    );
}

#[tokio::test]
async fn test_failed_update_keeps_local_state() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);

    let error = assert_err!(
        zone.update(
            &client,
            ZoneDetails {
                name: Some("Atrium".to_string()),
                ..Default::default()
            },
        )
        .await
    );

    assert_eq!(error.error_code(), "http_failure");
    assert_eq!(error.error_detail(), "Unable to update zone");
    assert_eq!(error.status(), Some(409));
    assert_eq!(zone.name(), Some("Lobby"));
    assert_eq!(zone.description(), Some("Ground floor"));
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_get_returns_remote_body_without_changing_local_state() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("GET"))
        .and(path("/environments/E1/zones/Z1"))
        .and(query_param("zone_id", "Z1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "Z1", "name": "Remote"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);
    let body = assert_ok!(zone.get(&client).await);

    assert_eq!(body["name"], json!("Remote"));
    assert_eq!(zone.name(), Some("Lobby"));
}

#[tokio::test]
async fn test_fetch_by_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environments/E1/zones/Z7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "Z7"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let body = assert_ok!(Zone::fetch(&client, "E1", "Z7").await);
    assert_eq!(body["_id"], json!("Z7"));
}

#[tokio::test]
async fn test_fetch_with_empty_zone_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::fetch(&client, "E1", "").await);
    assert_eq!(error.error_code(), "Invalid_Parameter");
}

#[tokio::test]
async fn test_fetch_not_found_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::fetch(&client, "E1", "Z1").await);
    assert_eq!(error.error_detail(), "Unable to getZone");
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_get_data_reads_plain_zone_path() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("GET"))
        .and(path("/environments/E1/zones/Z1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_id": "Z1", "data": {"occupancy": 12}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);
    let data = assert_ok!(zone.get_data(&client).await);

    assert_eq!(data.get("occupancy"), Some(&json!(12)));
}

#[tokio::test]
async fn test_fetch_data_without_data_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environments/E1/zones/Z1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "Z1"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let data = assert_ok!(Zone::fetch_data(&client, "E1", "Z1").await);
    assert_eq!(data, DataMap::new());
}

#[tokio::test]
async fn test_fetch_data_with_false_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environments/E1/zones/Z1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "Z1", "data": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let data = assert_ok!(Zone::fetch_data(&client, "E1", "Z1").await);
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_fetch_data_failure_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = assert_err!(Zone::fetch_data(&client, "E1", "Z1").await);
    assert_eq!(error.error_detail(), "Unable to get Zone Data");
}

// ============================================================================
// Factory Tests
// ============================================================================

#[tokio::test]
async fn test_create_thing_uses_zone_ids() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("POST"))
        .and(path("/environments/E1/zones/Z1/things"))
        .and(body_json(json!({
            "name": "Forklift",
            "environment": "E1",
            "zone": "Z1",
            "position": {"x": 3.0, "y": 4.0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "T1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);
    let thing = assert_ok!(
        zone.create_thing(
            &client,
            ItemDetails {
                name: Some("Forklift".to_string()),
                x_parameter: Some(3.0),
                y_parameter: Some(4.0),
                ..Default::default()
            },
        )
        .await
    );

    assert_eq!(thing.thing_id(), "T1");
    assert_eq!(thing.zone_id(), "Z1");
    assert_eq!(thing.environment_id(), "E1");
}

#[tokio::test]
async fn test_create_device_uses_zone_ids() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("POST"))
        .and(path("/environments/E1/zones/devices"))
        .and(body_json(json!({
            "name": "Beacon",
            "environment": "E1",
            "zone": "Z1",
            "position": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "D1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);
    let device = assert_ok!(
        zone.create_device(
            &client,
            ItemDetails {
                name: Some("Beacon".to_string()),
                ..Default::default()
            },
        )
        .await
    );

    assert_eq!(device.device_id(), "D1");
    assert_eq!(device.zone_id(), "Z1");
}

#[tokio::test]
async fn test_factory_failure_is_reported_by_child() {
    let server = MockServer::start().await;
    mount_create(&server).await;
    Mock::given(method("POST"))
        .and(path("/environments/E1/zones/Z1/things"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let zone = assert_ok!(Zone::create(&client, "E1", lobby()).await);
    let error = assert_err!(zone.create_thing(&client, ItemDetails::default()).await);

    assert_eq!(error.error_detail(), "Unable to create FlareThing");
}

#[test]
fn test_zone_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Zone>();
}
