use crate::AppState;
use crate::error::{AppError, Result};
use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Reject requests without a bearer token the platform accepts.
///
/// On success the resolved [`AuthUser`](crate::supabase::AuthUser) is stored in
/// the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    tracing::debug!("Auth middleware: checking authentication for {}", req.uri());

    let token = match extract_token(&req) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!("No usable bearer token for {}", req.uri().path());
            return e.into_response();
        }
    };

    let user = match state.platform.get_user(&token).await {
        Ok(user) => user,
        Err(e) => {
            // The platform's reason is not surfaced to the caller
            tracing::debug!("Token verification failed for {}: {}", req.uri().path(), e);
            return AppError::Unauthorized("Invalid token".to_string()).into_response();
        }
    };

    tracing::debug!("Auth successful for user: {}", user.id);

    req.extensions_mut().insert(user);

    next.run(req).await
}

fn extract_token(req: &Request<Body>) -> Result<String> {
    let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
        return Err(AppError::Unauthorized(
            "Authorization header missing".to_string(),
        ));
    };

    if let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.trim().is_empty()
    {
        return Ok(token.trim().to_string());
    }

    Err(AppError::Unauthorized("Invalid token".to_string()))
}

#[cfg(test)]
mod tests {
    use crate::testing::{FakePlatform, rider};
    use crate::{AppState, build_router};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(platform: Arc<FakePlatform>) -> Arc<AppState> {
        Arc::new(AppState::new(platform))
    }

    async fn call(platform: Arc<FakePlatform>, auth: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri("/auth/me");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = build_router(state(platform))
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_header_rejected_without_lookup() {
        let platform = Arc::new(FakePlatform::healthy().with_user("good-token", rider()));
        let (status, body) = call(platform.clone(), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authorization header missing");
        assert_eq!(platform.lookups(), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_header_rejected_without_lookup() {
        let platform = Arc::new(FakePlatform::healthy().with_user("good-token", rider()));
        let (status, _) = call(platform.clone(), Some("Basic dXNlcjpwYXNz")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(platform.lookups(), 0);
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized_not_server_error() {
        let platform = Arc::new(FakePlatform::healthy().with_user("good-token", rider()));
        let (status, body) = call(platform.clone(), Some("Bearer expired-token")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid token");
        assert_eq!(platform.lookups(), 1);
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        let platform = Arc::new(FakePlatform::healthy().with_user("good-token", rider()));
        let (status, body) = call(platform.clone(), Some("Bearer good-token")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "3f1c9a62-7d0e-4c1b-9a53-1d2f7c0e8b44");
        assert_eq!(body["email"], "rider@example.com");
    }
}
