use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::EndpointConfig;
use crate::{http, normalize, ResourceAdapter};
use explorer_common::{ExplorerError, ResourceRequest, ResourceResponse};

/// AWS RDS integration. Both operations go through the configured
/// management endpoint rather than the AWS SDK.
pub struct RdsAdapter {
    client: Client,
    config: EndpointConfig,
}

#[derive(Serialize)]
struct ListPayload<'a> {
    region: &'a str,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

#[derive(Serialize)]
struct ActionPayload<'a> {
    region: &'a str,
    instance_id: Option<&'a str>,
    action: Option<&'a str>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

impl RdsAdapter {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: http::build_client(config.timeout()),
            config,
        }
    }
}

#[async_trait]
impl ResourceAdapter for RdsAdapter {
    async fn list(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        let url = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| ExplorerError::not_found("AWS RDS API endpoint not configured"))?;

        let payload = ListPayload {
            region: request.region_str(),
            user_id: request.user_id.as_deref(),
        };
        tracing::info!(url, "Calling AWS RDS API");

        let body = http::post_json(&self.client, "AWS RDS API", url, None, &payload).await?;
        let instances = normalize::rds_instances(&body);
        tracing::info!(count = instances.len(), "Successfully fetched RDS instances");
        Ok(ResourceResponse::with_data(instances))
    }

    async fn act(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        let url = self.config.action_url.as_deref().ok_or_else(|| {
            ExplorerError::not_found("AWS RDS Action API endpoint not configured")
        })?;

        let payload = ActionPayload {
            region: request.region_str(),
            instance_id: request.instance_id.as_deref(),
            action: request.action.as_deref(),
            user_id: request.user_id.as_deref(),
        };
        tracing::info!(url, action = request.action.as_deref().unwrap_or_default(), "Calling AWS RDS Action API");

        let body = http::post_json(
            &self.client,
            "AWS RDS Action API",
            url,
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
