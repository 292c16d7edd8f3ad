use axum::http::StatusCode;
use explorer_common::{ExplorerError, ResourceResponse};

/// Map a failure onto the uniform `{success: false, error}` envelope and its
/// HTTP status: input → 400, not found → 404, everything else → 500.
pub fn to_envelope(error: &ExplorerError) -> (StatusCode, ResourceResponse) {
    let status = match error {
        ExplorerError::Input(_) => StatusCode::BAD_REQUEST,
        ExplorerError::NotFound(_) => StatusCode::NOT_FOUND,
        ExplorerError::Upstream(_) | ExplorerError::Unknown(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut message = error.to_string();
    if message.is_empty() {
        message = "Unknown error occurred".to_string();
    }

    let envelope = ResourceResponse {
        success: false,
        data: None,
        message: None,
        error: Some(message),
    };
    (status, envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_classes() {
        let (status, _) = to_envelope(&ExplorerError::input("Provider is required"));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = to_envelope(&ExplorerError::not_found("no handler"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = to_envelope(&ExplorerError::Upstream("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = to_envelope(&ExplorerError::Unknown("???".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_is_failure_with_error_only() {
        let (_, envelope) = to_envelope(&ExplorerError::input("Region/Location is required"));
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.message.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Region/Location is required"));
    }

    #[test]
    fn empty_message_falls_back_to_unknown() {
        let (_, envelope) = to_envelope(&ExplorerError::Unknown(String::new()));
        assert_eq!(envelope.error.as_deref(), Some("Unknown error occurred"));
    }
}
