//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for blog posts with keyword search",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/posts", api = domain_blogs::ApiDoc)
    ),
    tags(
        (name = "Posts", description = "Blog post management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
