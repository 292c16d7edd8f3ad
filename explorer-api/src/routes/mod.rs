// Route assembly. Auth is the host platform's concern; every route here is
// served as admitted.
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs;
use crate::app::AppState;
use crate::resources_endpoint;

/// Create the full route surface.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api_docs::ApiDoc::openapi()),
        )
        .route("/health", get(resources_endpoint::health))
        .route("/resources", post(resources_endpoint::list_resources))
        .route("/ec2-action", post(resources_endpoint::ec2_action))
        .route("/rds-action", post(resources_endpoint::rds_action))
        .route("/gcp-action", post(resources_endpoint::gcp_action))
}
