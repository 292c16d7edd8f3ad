use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::app::AppState;
use crate::dispatch::ProviderService;
use crate::error;
use crate::validate::{self, OperationKind};
use explorer_common::{ExplorerError, ResourceRequest, ResourceResponse};

#[utoipa::path(
    get,
    path = "/health",
    tag = "Explorer",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<serde_json::Value> {
    tracing::info!("Health check endpoint called");
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/resources",
    tag = "Explorer",
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Instance listing", body = ResourceResponse),
        (status = 400, description = "Invalid request", body = ResourceResponse),
        (status = 404, description = "No handler or endpoint configured", body = ResourceResponse),
        (status = 500, description = "Upstream failure", body = ResourceResponse)
    )
)]
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResourceRequest>,
) -> (StatusCode, Json<ResourceResponse>) {
    let correlation_id = Uuid::new_v4();
    tracing::info!(
        %correlation_id,
        provider = request.provider_str(),
        service = request.service_str(),
        region = request.region_str(),
        "Fetching resources"
    );

    let result = list_flow(&state, &request).await;
    respond(correlation_id, "resources", result)
}

#[utoipa::path(
    post,
    path = "/ec2-action",
    tag = "Explorer",
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Action accepted", body = ResourceResponse),
        (status = 400, description = "Invalid request", body = ResourceResponse),
        (status = 500, description = "Upstream failure", body = ResourceResponse)
    )
)]
pub async fn ec2_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResourceRequest>,
) -> (StatusCode, Json<ResourceResponse>) {
    action_route(&state, ProviderService::AwsEc2, "ec2-action", &request).await
}

#[utoipa::path(
    post,
    path = "/rds-action",
    tag = "Explorer",
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Action accepted", body = ResourceResponse),
        (status = 400, description = "Invalid request", body = ResourceResponse),
        (status = 404, description = "Action endpoint not configured", body = ResourceResponse),
        (status = 500, description = "Upstream failure", body = ResourceResponse)
    )
)]
pub async fn rds_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResourceRequest>,
) -> (StatusCode, Json<ResourceResponse>) {
    action_route(&state, ProviderService::AwsRds, "rds-action", &request).await
}

#[utoipa::path(
    post,
    path = "/gcp-action",
    tag = "Explorer",
    request_body = ResourceRequest,
    responses(
        (status = 200, description = "Action accepted", body = ResourceResponse),
        (status = 400, description = "Invalid request", body = ResourceResponse),
        (status = 404, description = "Action endpoint not configured", body = ResourceResponse),
        (status = 500, description = "Upstream failure", body = ResourceResponse)
    )
)]
pub async fn gcp_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResourceRequest>,
) -> (StatusCode, Json<ResourceResponse>) {
    action_route(&state, ProviderService::GcpCompute, "gcp-action", &request).await
}

async fn list_flow(
    state: &AppState,
    request: &ResourceRequest,
) -> Result<ResourceResponse, ExplorerError> {
    validate::validate(request, OperationKind::List)?;
    state.dispatcher.dispatch_list(request).await
}

async fn action_route(
    state: &AppState,
    target: ProviderService,
    route: &str,
    request: &ResourceRequest,
) -> (StatusCode, Json<ResourceResponse>) {
    let correlation_id = Uuid::new_v4();
    tracing::info!(
        %correlation_id,
        route,
        instance_id = request.instance_id.as_deref().unwrap_or_default(),
        action = request.action.as_deref().unwrap_or_default(),
        region = request.region_str(),
        "Performing instance action"
    );

    let result = action_flow(state, target, request).await;
    respond(correlation_id, route, result)
}

async fn action_flow(
    state: &AppState,
    target: ProviderService,
    request: &ResourceRequest,
) -> Result<ResourceResponse, ExplorerError> {
    validate::validate(request, OperationKind::Action)?;
    state.dispatcher.dispatch_action(target, request).await
}

fn respond(
    correlation_id: Uuid,
    route: &str,
    result: Result<ResourceResponse, ExplorerError>,
) -> (StatusCode, Json<ResourceResponse>) {
    match result {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => {
            tracing::error!(%correlation_id, route, error = %err, "Error processing request");
            let (status, envelope) = error::to_envelope(&err);
            (status, Json(envelope))
        }
    }
}
