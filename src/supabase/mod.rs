pub mod client;
pub mod types;

pub use client::SupabaseClient;
pub use types::{AuthUser, Bucket};

use crate::error::Result;
use async_trait::async_trait;

/// Operations the service needs from the managed platform
#[async_trait]
pub trait Platform: Send + Sync {
    /// Run a minimal read-only query against the data store
    async fn probe_database(&self) -> Result<()>;

    /// List the storage buckets visible to the service key
    async fn list_buckets(&self) -> Result<Vec<Bucket>>;

    /// Resolve the user behind an access token
    async fn get_user(&self, access_token: &str) -> Result<AuthUser>;
}
