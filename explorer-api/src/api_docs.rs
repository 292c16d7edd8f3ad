use crate::resources_endpoint;
use explorer_common::{NormalizedInstance, ResourceRequest, ResourceResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        resources_endpoint::health,
        resources_endpoint::list_resources,
        resources_endpoint::ec2_action,
        resources_endpoint::rds_action,
        resources_endpoint::gcp_action
    ),
    components(
        schemas(
            ResourceRequest,
            ResourceResponse,
            NormalizedInstance
        )
    ),
    tags(
        (name = "Explorer", description = "Cloud Resource Explorer API")
    )
)]
pub struct ApiDoc;
