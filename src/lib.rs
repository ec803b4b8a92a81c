pub mod auth;
pub mod config;
pub mod error;
pub mod frontend;
pub mod health;
pub mod openapi;
pub mod routes;
pub mod supabase;

#[cfg(test)]
mod testing;

use crate::supabase::Platform;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub struct AppState {
    platform: Arc<dyn Platform>,
}

impl AppState {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/", get(routes::serve_home_page))
        .route("/health", get(routes::health_check))
        .route("/api-docs/openapi.json", get(routes::openapi_json));

    // Protected routes (bearer token verified by the platform)
    let protected_routes = Router::new()
        .route("/auth/me", get(routes::me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
