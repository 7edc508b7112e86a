//! Tests for resource data and the sub-account handlers

use super::*;
use crate::error::Error;
use crate::http::HttpClientConfig;
use crate::mailjet::MailjetClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_key_json(id: i64, active: bool, acl: &str) -> serde_json::Value {
    json!({
        "ACL": acl,
        "APIKey": "6b0e7f4c9a",
        "CreatedAt": "2024-03-01T10:15:00Z",
        "ID": id,
        "IsActive": active,
        "IsMaster": false,
        "Name": "marketing",
        "QuarantineValue": 0,
        "Runlevel": "Normal",
        "SecretKey": "d3adb33f",
        "TrackHost": "r.mailjet.com",
        "UserID": 77
    })
}

fn envelope(record: serde_json::Value) -> serde_json::Value {
    json!({ "Count": 1, "Data": [record], "Total": 1 })
}

fn client_for(server: &MockServer) -> MailjetClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    MailjetClient::with_config("public", "private", config).unwrap()
}

fn planned(values: serde_json::Value) -> ResourceData {
    ResourceData::new(values.as_object().unwrap().clone())
}

// ============================================================================
// ResourceData
// ============================================================================

#[test]
fn test_resource_data_accessors() {
    let mut data = planned(json!({
        "name": "marketing",
        "active": false,
        "acl": null,
        "user_id": 12
    }));

    assert_eq!(data.id(), None);
    assert_eq!(data.get_string("name").as_deref(), Some("marketing"));
    assert_eq!(data.get_bool("active"), Some(false));
    assert_eq!(data.get_string("acl"), None);
    assert_eq!(data.get("user_id"), Some(&json!(12)));
    assert_eq!(data.get_bool("name"), None);

    data.set("acl", "campaigns");
    assert_eq!(data.get_string("acl").as_deref(), Some("campaigns"));
}

#[test]
fn test_resource_data_state_conversion() {
    let data = planned(json!({ "name": "x" }));
    assert!(data.clone().into_state().is_none());

    let mut data = data;
    data.set_id("");
    assert!(data.id().is_none());
    assert!(data.clone().into_state().is_none());

    data.set_id("42");
    let state = data.into_state().unwrap();
    assert_eq!(state.id, "42");

    let data = ResourceData::from(state);
    assert_eq!(data.id(), Some("42"));
}

#[test]
fn test_resource_data_merge() {
    let mut data = planned(json!({ "name": "x", "active": true, "api_key": "k" }));
    data.merge(json!({ "active": false }).as_object().unwrap().clone());

    assert_eq!(data.get_bool("active"), Some(false));
    assert_eq!(data.get_string("api_key").as_deref(), Some("k"));
}

// ============================================================================
// Sub-account schema
// ============================================================================

#[test]
fn test_subaccount_schema() {
    let schema = SubaccountResource.schema();

    let name = schema.attribute("name").unwrap();
    assert!(name.required);
    assert!(name.create_only);

    let active = schema.attribute("active").unwrap();
    assert!(active.optional);
    assert_eq!(active.default, Some(json!(true)));

    assert!(schema.attribute("acl").unwrap().optional);
    assert!(schema.attribute("secret_key").unwrap().sensitive);

    let computed: Vec<&str> = schema
        .attributes
        .iter()
        .filter(|(_, attr)| attr.computed && !attr.is_configurable())
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(
        computed,
        vec![
            "api_key",
            "created_at",
            "primary",
            "quarantine_value",
            "run_level",
            "secret_key",
            "track_host",
            "user_id"
        ]
    );
    assert_eq!(SubaccountResource.type_name(), "mailjet_subaccount");
}

// ============================================================================
// Handlers
// ============================================================================

#[tokio::test]
async fn test_create_sets_id_and_reads_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apikey"))
        .and(body_json(json!({
            "Name": "marketing",
            "IsActive": true,
            "ACL": "campaigns"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(api_key_json(42, true, "campaigns"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/apikey/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(api_key_json(42, true, "campaigns"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = planned(json!({ "name": "marketing", "active": true, "acl": "campaigns" }));
    assert!(data.get("created_at").is_none());

    SubaccountResource.create(&mut data, &client).await.unwrap();

    assert_eq!(data.id(), Some("42"));
    assert_eq!(data.get_string("created_at").as_deref(), Some("2024-03-01T10:15:00Z"));
    assert_eq!(data.get_string("api_key").as_deref(), Some("6b0e7f4c9a"));
    assert_eq!(data.get_string("secret_key").as_deref(), Some("d3adb33f"));
    assert_eq!(data.get_bool("primary"), Some(false));
    assert_eq!(data.get("quarantine_value"), Some(&json!(0)));
    assert_eq!(data.get_string("run_level").as_deref(), Some("Normal"));
    assert_eq!(data.get_string("track_host").as_deref(), Some("r.mailjet.com"));
    assert_eq!(data.get("user_id"), Some(&json!(77)));
}

#[tokio::test]
async fn test_create_failure_leaves_no_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apikey"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ErrorInfo": "",
            "ErrorMessage": "Name is required",
            "StatusCode": 400
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = planned(json!({ "name": "marketing" }));

    let err = SubaccountResource.create(&mut data, &client).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 400, .. }));
    assert_eq!(data.id(), None);
}

#[tokio::test]
async fn test_create_omits_empty_acl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apikey"))
        .and(body_json(json!({ "Name": "marketing", "IsActive": true })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(api_key_json(8, true, ""))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/apikey/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(api_key_json(8, true, ""))))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = planned(json!({ "name": "marketing", "acl": "" }));
    SubaccountResource.create(&mut data, &client).await.unwrap();

    assert_eq!(data.get("acl"), None);
}

#[tokio::test]
async fn test_read_with_malformed_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = ResourceData::default();
    data.set_id("not-a-number");

    let err = SubaccountResource.read(&mut data, &client).await.unwrap_err();
    assert!(matches!(err, Error::InvalidId { .. }));

    let err = SubaccountResource
        .read(&mut ResourceData::default(), &client)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingId));
}

#[tokio::test]
async fn test_read_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apikey/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "ErrorInfo": "",
            "ErrorMessage": "Object not found",
            "StatusCode": 404
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = ResourceData::default();
    data.set_id("999");

    let err = SubaccountResource.read(&mut data, &client).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_update_sends_only_mutable_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/apikey/42"))
        .and(body_json(json!({ "IsActive": false, "ACL": "campaigns" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/apikey/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(api_key_json(42, false, "campaigns"))),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = planned(json!({ "name": "renamed", "active": false, "acl": "campaigns" }));
    data.set_id("42");

    SubaccountResource.update(&mut data, &client).await.unwrap();

    assert_eq!(data.get_bool("active"), Some(false));
    assert_eq!(data.get_string("name").as_deref(), Some("marketing"));
}

#[tokio::test]
async fn test_delete_is_not_implemented() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut data = planned(json!({ "name": "marketing" }));
    data.set_id("42");

    let err = SubaccountResource.delete(&mut data, &client).await.unwrap_err();

    assert!(matches!(err, Error::NotImplemented));
    assert_eq!(data.id(), Some("42"));
}

#[tokio::test]
async fn test_import_reads_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apikey/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(api_key_json(42, true, "campaigns"))),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = SubaccountResource.import("42", &client).await.unwrap();

    assert_eq!(data.id(), Some("42"));
    assert_eq!(data.get_string("name").as_deref(), Some("marketing"));
    assert_eq!(data.get_string("acl").as_deref(), Some("campaigns"));
}
