use crate::supabase::AuthUser;
use axum::{Extension, Json};

/// Identity resolved by the auth middleware for the current request
pub async fn me(Extension(user): Extension<AuthUser>) -> Json<AuthUser> {
    Json(user)
}
