use explorer_common::{ExplorerError, ResourceRequest, ResourceResponse};
use explorer_providers::azure::AzureVmAdapter;
use explorer_providers::config::ProvidersConfig;
use explorer_providers::ec2::Ec2Adapter;
use explorer_providers::gcp::GcpComputeAdapter;
use explorer_providers::rds::RdsAdapter;
use explorer_providers::ResourceAdapter;

/// The closed set of provider/service pairs this backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderService {
    AwsEc2,
    AwsRds,
    AzureVm,
    GcpCompute,
}

impl ProviderService {
    /// Map the wire strings onto a handler target. Anything outside the
    /// fixed table is unmapped.
    pub fn resolve(provider: &str, service: &str) -> Option<Self> {
        match (provider, service) {
            ("AWS", "EC2") => Some(Self::AwsEc2),
            ("AWS", "RDS") => Some(Self::AwsRds),
            ("Azure", "VM") => Some(Self::AzureVm),
            ("GCP", "Compute Engine (VM)") => Some(Self::GcpCompute),
            _ => None,
        }
    }
}

/// Owns the four adapters and routes validated requests to them. Performs
/// no upstream I/O itself.
pub struct Dispatcher {
    ec2: Ec2Adapter,
    rds: RdsAdapter,
    azure: AzureVmAdapter,
    gcp: GcpComputeAdapter,
}

impl Dispatcher {
    pub fn new(config: &ProvidersConfig) -> Self {
        Self {
            ec2: Ec2Adapter::new(&config.aws),
            rds: RdsAdapter::new(config.aws.rds.clone()),
            azure: AzureVmAdapter,
            gcp: GcpComputeAdapter::new(config.gcp.compute.clone()),
        }
    }

    // Adding a ProviderService variant forces a row here.
    fn adapter(&self, target: ProviderService) -> &dyn ResourceAdapter {
        match target {
            ProviderService::AwsEc2 => &self.ec2,
            ProviderService::AwsRds => &self.rds,
            ProviderService::AzureVm => &self.azure,
            ProviderService::GcpCompute => &self.gcp,
        }
    }

    pub async fn dispatch_list(
        &self,
        request: &ResourceRequest,
    ) -> Result<ResourceResponse, ExplorerError> {
        let target = ProviderService::resolve(request.provider_str(), request.service_str())
            .ok_or_else(|| {
                ExplorerError::not_found(format!(
                    "No handler configured for {} {}",
                    request.provider_str(),
                    request.service_str()
                ))
            })?;
        self.adapter(target).list(request).await
    }

    /// Action routes name their target directly, so resolution is already
    /// done by the route table.
    pub async fn dispatch_action(
        &self,
        target: ProviderService,
        request: &ResourceRequest,
    ) -> Result<ResourceResponse, ExplorerError> {
        self.adapter(target).act(request).await
    }
}
