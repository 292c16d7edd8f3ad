use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::{Credentials, Region};
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::Client;
use std::time::Duration;

use crate::config::AwsSettings;
use crate::normalize;
use crate::ResourceAdapter;
use explorer_common::{ExplorerError, InstanceAction, ResourceRequest, ResourceResponse};

/// AWS EC2 integration. Unlike the HTTP-endpoint adapters this one talks to
/// AWS through the native SDK, with the static credentials from
/// configuration.
pub struct Ec2Adapter {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    region: Option<String>,
    timeout: Duration,
}

impl Ec2Adapter {
    pub fn new(aws: &AwsSettings) -> Self {
        Self {
            access_key_id: aws.access_key_id.clone(),
            secret_access_key: aws.secret_access_key.clone(),
            region: aws.region.clone(),
            timeout: aws.ec2.timeout(),
        }
    }

    /// Build an SDK client for the given region, applying the configured
    /// static credentials when both halves are present. Otherwise the SDK's
    /// default provider chain applies.
    async fn client(&self, region: &str) -> Client {
        let region_provider =
            RegionProviderChain::first_try(Region::new(region.to_string())).or_default_provider();
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let (Some(key), Some(secret)) = (&self.access_key_id, &self.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key.clone(),
                secret.clone(),
                None,
                None,
                "explorer-config",
            ));
        }
        Client::new(&loader.load().await)
    }

    async fn bounded<F, T, E>(&self, label: &str, call: F) -> Result<T, ExplorerError>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                ExplorerError::Upstream(format!(
                    "{} timed out after {}ms",
                    label,
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| {
                ExplorerError::Upstream(format!("{} failed: {}", label, DisplayErrorContext(&e)))
            })
    }
}

#[async_trait]
impl ResourceAdapter for Ec2Adapter {
    async fn list(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        // The configured region wins for listing; the request region is the
        // fallback.
        let region = self
            .region
            .as_deref()
            .unwrap_or_else(|| request.region_str());
        tracing::info!(region, "Listing EC2 instances using the AWS SDK");
        if self.access_key_id.is_none() || self.secret_access_key.is_none() {
            tracing::error!("AWS credentials are missing from configuration");
        }

        let client = self.client(region).await;
        let result = self
            .bounded("AWS EC2 DescribeInstances", client.describe_instances().send())
            .await?;

        let instances = normalize::ec2_instances(&result);
        tracing::info!(count = instances.len(), "Successfully fetched EC2 instances");
        Ok(ResourceResponse::with_data(instances))
    }

    async fn act(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        let instance_id = request
            .instance_id
            .as_deref()
            .ok_or_else(|| ExplorerError::input("Instance id is required"))?;
        let action = request
            .action
            .as_deref()
            .and_then(InstanceAction::parse)
            .ok_or_else(|| {
                ExplorerError::input("Invalid action. Must be start, stop, or reboot")
            })?;
        let region = request.region_str();
        tracing::info!(%action, instance_id, region, "Performing EC2 action");

        let client = self.client(region).await;
        match action {
            InstanceAction::Start => {
                self.bounded(
                    "AWS EC2 StartInstances",
                    client.start_instances().instance_ids(instance_id).send(),
                )
                .await?;
            }
            InstanceAction::Stop => {
                self.bounded(
                    "AWS EC2 StopInstances",
                    client.stop_instances().instance_ids(instance_id).send(),
                )
                .await?;
            }
            InstanceAction::Reboot => {
                self.bounded(
                    "AWS EC2 RebootInstances",
                    client.reboot_instances().instance_ids(instance_id).send(),
                )
                .await?;
            }
        }

        Ok(ResourceResponse::with_message(format!(
            "EC2 action '{}' executed successfully",
            action
        )))
    }
}
