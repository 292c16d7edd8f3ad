use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where one upstream API lives and how long we wait for it.
///
/// Built once at startup and handed to the adapters by value; nothing
/// mutates it afterwards.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub action_url: Option<String>,
    pub auth_token: Option<String>,
    pub timeout_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            action_url: None,
            auth_token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
    pub ec2: EndpointConfig,
    pub rds: EndpointConfig,
}

#[derive(Debug, Clone, Default)]
pub struct AzureSettings {
    pub vm: EndpointConfig,
}

#[derive(Debug, Clone, Default)]
pub struct GcpSettings {
    pub compute: EndpointConfig,
}

/// Full provider configuration, assembled once from the environment at
/// process start.
#[derive(Debug, Clone, Default)]
pub struct ProvidersConfig {
    pub aws: AwsSettings,
    pub azure: AzureSettings,
    pub gcp: GcpSettings,
}

impl ProvidersConfig {
    pub fn from_env() -> Self {
        Self {
            aws: AwsSettings {
                access_key_id: env_trimmed("AWS_ACCESS_KEY_ID"),
                secret_access_key: env_trimmed("AWS_SECRET_ACCESS_KEY"),
                region: env_trimmed("AWS_REGION"),
                ec2: endpoint_from_env("AWS_EC2"),
                rds: endpoint_from_env("AWS_RDS"),
            },
            azure: AzureSettings {
                vm: endpoint_from_env("AZURE_VM"),
            },
            gcp: GcpSettings {
                compute: endpoint_from_env("GCP_COMPUTE"),
            },
        }
    }

    /// Whether any upstream endpoint or credential is configured at all.
    /// Used for the startup warning; routes answer their own config errors.
    pub fn is_configured(&self) -> bool {
        self.aws.access_key_id.is_some()
            || self.aws.rds.base_url.is_some()
            || self.aws.rds.action_url.is_some()
            || self.azure.vm.base_url.is_some()
            || self.gcp.compute.base_url.is_some()
            || self.gcp.compute.action_url.is_some()
    }
}

fn endpoint_from_env(prefix: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: env_trimmed(&format!("{}_URL", prefix)),
        action_url: env_trimmed(&format!("{}_ACTION_URL", prefix)),
        auth_token: env_trimmed(&format!("{}_TOKEN", prefix)),
        timeout_ms: env_trimmed(&format!("{}_TIMEOUT_MS", prefix))
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS),
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
