pub mod auth;
pub mod ui;

pub use auth::*;
pub use ui::*;

use crate::AppState;
use crate::health::{self, HealthStatus};
use crate::openapi::ApiDoc;
use axum::{Json, extract::State};
use std::sync::Arc;
use utoipa::OpenApi;

/// Service and dependency health
///
/// Always answers 200; unreachable dependencies show up as `disconnected`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "API is running", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(health::check(state.platform.as_ref()).await)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
