use crate::error::{AppError, Result};
use crate::supabase::{AuthUser, Bucket, Platform};
use crate::{AppState, build_router};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted platform used by unit tests
#[derive(Default)]
pub struct FakePlatform {
    pub database_down: bool,
    pub buckets: Option<Vec<Bucket>>,
    pub valid_token: Option<(String, AuthUser)>,
    pub user_lookups: AtomicUsize,
}

impl FakePlatform {
    pub fn healthy() -> Self {
        Self {
            buckets: Some(vec![]),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, token: &str, user: AuthUser) -> Self {
        self.valid_token = Some((token.to_string(), user));
        self
    }

    pub fn lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }
}

pub fn rider() -> AuthUser {
    AuthUser {
        id: "3f1c9a62-7d0e-4c1b-9a53-1d2f7c0e8b44".to_string(),
        email: Some("rider@example.com".to_string()),
        role: Some("authenticated".to_string()),
        aud: Some("authenticated".to_string()),
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn probe_database(&self) -> Result<()> {
        if self.database_down {
            return Err(AppError::Platform("connection refused".to_string()));
        }
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<Bucket>> {
        self.buckets
            .clone()
            .ok_or_else(|| AppError::Platform("storage unavailable".to_string()))
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        match &self.valid_token {
            Some((token, user)) if token == access_token => Ok(user.clone()),
            _ => Err(AppError::Platform("invalid JWT".to_string())),
        }
    }
}

/// Serve the full router on an ephemeral port and return its base URL
pub async fn spawn_backend(platform: FakePlatform) -> String {
    let app = build_router(Arc::new(AppState::new(Arc::new(platform))));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
