use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EndpointConfig;
use crate::{http, normalize, ResourceAdapter};
use explorer_common::{ExplorerError, InstanceAction, ResourceRequest, ResourceResponse};

/// Suffix the configured action URL carries; the action verb replaces it as
/// the final path segment.
const ACTION_URL_SUFFIX: &str = "/instance-action";

/// GCP Compute Engine integration through the configured management
/// endpoint. Bearer auth applies to both operations when a token is set.
pub struct GcpComputeAdapter {
    client: Client,
    config: EndpointConfig,
}

#[derive(Serialize)]
struct ListPayload<'a> {
    project_id: Option<&'a str>,
    location: &'a str,
}

#[derive(Serialize)]
struct ActionPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
    // The region field carries the instance's zone for actions, e.g. us-east4-a.
    zone: &'a str,
    instance_id: Option<&'a str>,
}

impl GcpComputeAdapter {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: http::build_client(config.timeout()),
            config,
        }
    }

    /// Derive the per-verb action URL: `.../instance-action` + `stop`
    /// becomes `.../stop`.
    fn action_target(action_url: &str, action: InstanceAction) -> String {
        let base = action_url.strip_suffix(ACTION_URL_SUFFIX).unwrap_or(action_url);
        format!("{}/{}", base, action)
    }
}

#[async_trait]
impl ResourceAdapter for GcpComputeAdapter {
    async fn list(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        let url = self.config.base_url.as_deref().ok_or_else(|| {
            ExplorerError::not_found("GCP Compute Engine API endpoint not configured")
        })?;

        let payload = ListPayload {
            project_id: request.project.as_deref(),
            location: request.region_str(),
        };
        tracing::info!(url, project = payload.project_id.unwrap_or_default(), "Calling GCP Compute Engine API");

        let body = http::post_json(
            &self.client,
            "GCP Compute Engine API",
            url,
            self.config.auth_token.as_deref(),
            &payload,
        )
        .await?;

        let instances = normalize::gcp_instances(&body);
        tracing::info!(count = instances.len(), "Successfully fetched GCP Compute Engine instances");
        Ok(ResourceResponse::with_data(instances))
    }

    async fn act(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        let action_url = self.config.action_url.as_deref().ok_or_else(|| {
            ExplorerError::not_found("GCP Compute Engine Action API endpoint not configured")
        })?;
        let action = request
            .action
            .as_deref()
            .and_then(InstanceAction::parse)
            .ok_or_else(|| {
                ExplorerError::input("Invalid action. Must be start, stop, or reboot")
            })?;

        let target = Self::action_target(action_url, action);
        let payload = ActionPayload {
            project_id: request.project.as_deref(),
            zone: request.region_str(),
            instance_id: request.instance_id.as_deref(),
        };
        tracing::info!(url = %target, %action, "Calling GCP Compute Engine Action API");

        let body = http::post_json(
            &self.client,
            "GCP Compute Engine Action API",
            &target,
            self.config.auth_token.as_deref(),
            &payload,
        )
        .await?;

        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Action completed successfully");
        Ok(ResourceResponse::with_message(message))
    }
}
