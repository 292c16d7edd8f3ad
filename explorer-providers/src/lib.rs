use async_trait::async_trait;
use explorer_common::{ExplorerError, ResourceRequest, ResourceResponse};

pub mod azure;
pub mod config;
pub mod ec2;
pub mod gcp;
mod http;
pub mod normalize;
pub mod rds;

/// One provider/service integration: knows how to reach its upstream and
/// hand back the uniform response envelope.
///
/// Requests arrive already validated; adapters only deal with configuration
/// lookups and upstream transport.
#[async_trait]
pub trait ResourceAdapter: Send + Sync {
    /// Enumerate instances for the requesting scope.
    async fn list(&self, request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError>;

    // Optional: start/stop/reboot one instance.
    // Default covers adapters with no action surface.
    async fn act(&self, _request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        Err(ExplorerError::not_found(
            "No action handler configured for this service",
        ))
    }
}
