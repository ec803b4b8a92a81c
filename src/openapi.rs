use utoipa::OpenApi;

/// OpenAPI document for the public REST surface.
///
/// Served as JSON at `GET /api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health_check),
    components(schemas(
        crate::health::HealthStatus,
        crate::health::Services,
        crate::health::ServiceStatus
    )),
    tags(
        (name = "health", description = "Service and dependency health")
    ),
    info(
        title = "Transit Ticketing API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Backend of the transit ticketing and trip planning application"
    )
)]
pub struct ApiDoc;
