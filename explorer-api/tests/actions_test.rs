// Integration tests for the instance action endpoints.

use axum::Router;
use axum_test::TestServer;
use explorer_api::routes;
use explorer_api::AppState;
use explorer_providers::config::ProvidersConfig;
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_server(config: ProvidersConfig) -> TestServer {
    let state = AppState::new(&config);
    let app = Router::new().merge(routes::create_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn action_validation_fails_in_fixed_order() {
    let server = test_server(ProvidersConfig::default());

    let response = server.post("/ec2-action").json(&json!({})).await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Instance id is required");

    // instance_id present but action missing
    let response = server
        .post("/ec2-action")
        .json(&json!({"instance_id": "i-0abc", "region": "us-east-1"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Action is required");

    let response = server
        .post("/ec2-action")
        .json(&json!({"instance_id": "i-0abc", "action": "terminate", "region": "us-east-1"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid action. Must be start, stop, or reboot");

    let response = server
        .post("/ec2-action")
        .json(&json!({"instance_id": "i-0abc", "action": "stop"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Region/Location is required");
}

#[tokio::test]
async fn rds_action_without_endpoint_is_404() {
    let server = test_server(ProvidersConfig::default());

    let response = server
        .post("/rds-action")
        .json(&json!({"instance_id": "orders-db", "action": "stop", "region": "us-east-1"}))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "AWS RDS Action API endpoint not configured");
}

#[tokio::test]
async fn gcp_action_without_endpoint_is_404() {
    let server = test_server(ProvidersConfig::default());

    let response = server
        .post("/gcp-action")
        .json(&json!({"instance_id": "web-1", "action": "start", "region": "us-east4-a"}))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "GCP Compute Engine Action API endpoint not configured"
    );
}

#[tokio::test]
async fn rds_action_forwards_payload_and_message() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rds/action"))
        .and(bearer_token("rds-secret"))
        .and(body_json(json!({
            "region": "us-east-1",
            "instance_id": "orders-db",
            "action": "reboot",
            "userId": "jdoe"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "reboot scheduled"})),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let mut config = ProvidersConfig::default();
    config.aws.rds.action_url = Some(format!("{}/rds/action", upstream.uri()));
    config.aws.rds.auth_token = Some("rds-secret".to_string());
    let server = test_server(config);

    let response = server
        .post("/rds-action")
        .json(&json!({
            "instance_id": "orders-db",
            "action": "reboot",
            "region": "us-east-1",
            "userId": "jdoe"
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "reboot scheduled");
}

#[tokio::test]
async fn gcp_stop_targets_the_derived_verb_url() {
    let upstream = MockServer::start().await;

    // base .../instance-action + action stop → .../stop
    Mock::given(method("POST"))
        .and(path("/compute/stop"))
        .and(body_json(json!({
            "project_id": "analytics-prod",
            "zone": "us-east4-a",
            "instance_id": "web-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "stopping"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let mut config = ProvidersConfig::default();
    config.gcp.compute.action_url = Some(format!("{}/compute/instance-action", upstream.uri()));
    let server = test_server(config);

    let response = server
        .post("/gcp-action")
        .json(&json!({
            "instance_id": "web-1",
            "action": "stop",
            "region": "us-east4-a",
            "project": "analytics-prod"
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "stopping");
}

#[tokio::test]
async fn gcp_action_upstream_error_maps_to_500() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_string("instance busy"))
        .mount(&upstream)
        .await;

    let mut config = ProvidersConfig::default();
    config.gcp.compute.action_url = Some(format!("{}/compute/instance-action", upstream.uri()));
    let server = test_server(config);

    let response = server
        .post("/gcp-action")
        .json(&json!({
            "instance_id": "web-1",
            "action": "start",
            "region": "us-east4-a",
            "project": "analytics-prod"
        }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(
        error.contains("GCP Compute Engine Action API returned 409"),
        "{}",
        error
    );
    assert!(error.contains("instance busy"), "{}", error);
}
