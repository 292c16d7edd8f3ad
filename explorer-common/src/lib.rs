use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;

pub use error::ExplorerError;

// --- Enums ---

/// Instance actions accepted by the action endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InstanceAction {
    Start,
    Stop,
    Reboot,
}

impl InstanceAction {
    /// Parse the wire string ("start" / "stop" / "reboot").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "reboot" => Some(Self::Reboot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Reboot => "reboot",
        }
    }
}

impl fmt::Display for InstanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Wire types ---

/// Request body shared by the list and action endpoints.
///
/// Every field is optional at the serde layer: presence is the validator's
/// job so missing fields produce the contract's error messages instead of a
/// deserialization failure.
#[derive(Debug, Serialize, Deserialize, Clone, Default, utoipa::ToSchema)]
pub struct ResourceRequest {
    pub provider: Option<String>,
    pub service: Option<String>,
    pub region: Option<String>,
    pub project: Option<String>,
    pub instance_id: Option<String>,
    pub action: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl ResourceRequest {
    pub fn provider_str(&self) -> &str {
        self.provider.as_deref().unwrap_or_default()
    }

    pub fn service_str(&self) -> &str {
        self.service.as_deref().unwrap_or_default()
    }

    pub fn region_str(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }
}

/// One instance row in the shape the portal renders.
///
/// `instance_name` and `status` are always present; the rest depends on
/// which adapter produced the record. Absent fields are omitted from the
/// serialized JSON entirely.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct NormalizedInstance {
    #[serde(rename = "instanceName")]
    pub instance_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub status: String,
}

impl NormalizedInstance {
    pub fn new(instance_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            ip: None,
            hostname: None,
            endpoint: None,
            engine: None,
            zone: None,
            status: status.into(),
        }
    }
}

/// Uniform response envelope for every endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default, utoipa::ToSchema)]
pub struct ResourceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<NormalizedInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResourceResponse {
    pub fn with_data(data: Vec<NormalizedInstance>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parses_known_verbs() {
        assert_eq!(InstanceAction::parse("start"), Some(InstanceAction::Start));
        assert_eq!(InstanceAction::parse("stop"), Some(InstanceAction::Stop));
        assert_eq!(InstanceAction::parse("reboot"), Some(InstanceAction::Reboot));
        assert_eq!(InstanceAction::parse("terminate"), None);
        assert_eq!(InstanceAction::parse("Start"), None);
    }

    #[test]
    fn sparse_instance_omits_absent_fields() {
        let instance = NormalizedInstance::new("i-0abc", "running");
        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"instanceName": "i-0abc", "status": "running"})
        );

        // And the sparse form round-trips as valid response data.
        let back: NormalizedInstance = serde_json::from_value(json).unwrap();
        assert_eq!(back, instance);
    }

    #[test]
    fn response_envelope_omits_empty_slots() {
        let response = ResourceResponse::with_data(vec![]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": []}));
    }

    #[test]
    fn request_accepts_partial_bodies() {
        let req: ResourceRequest =
            serde_json::from_str(r#"{"provider": "AWS", "userId": "jdoe"}"#).unwrap();
        assert_eq!(req.provider.as_deref(), Some("AWS"));
        assert_eq!(req.user_id.as_deref(), Some("jdoe"));
        assert!(req.service.is_none());
        assert!(req.region.is_none());
    }
}
