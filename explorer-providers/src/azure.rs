use async_trait::async_trait;

use crate::ResourceAdapter;
use explorer_common::{ExplorerError, ResourceRequest, ResourceResponse};

/// Azure VM placeholder. Listing reports "coming soon" inside a 200
/// envelope rather than failing: not implemented is not an error. No action
/// route exists for Azure, so the trait default covers `act`.
pub struct AzureVmAdapter;

#[async_trait]
impl ResourceAdapter for AzureVmAdapter {
    async fn list(&self, _request: &ResourceRequest) -> Result<ResourceResponse, ExplorerError> {
        tracing::warn!("Azure VM API integration not yet implemented");
        Ok(ResourceResponse {
            success: false,
            data: None,
            message: Some("This feature is under development".to_string()),
            error: Some("Azure VM integration coming soon".to_string()),
        })
    }
}
