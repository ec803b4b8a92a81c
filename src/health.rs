//! Service health aggregation.
//!
//! Probes the data store and the storage bucket listing through the platform
//! client and folds both outcomes into one [`HealthStatus`]. A failing probe
//! only flips its own field to `disconnected`; the check itself never fails.

use crate::supabase::Platform;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reachability of one downstream dependency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Connected,
    Disconnected,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Connected => f.write_str("connected"),
            ServiceStatus::Disconnected => f.write_str("disconnected"),
        }
    }
}

impl<T, E> From<&std::result::Result<T, E>> for ServiceStatus {
    fn from(outcome: &std::result::Result<T, E>) -> Self {
        match outcome {
            Ok(_) => ServiceStatus::Connected,
            Err(_) => ServiceStatus::Disconnected,
        }
    }
}

/// Reachability of the data store and the storage buckets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({ "database": "connected", "storage": "connected" }))]
pub struct Services {
    pub database: ServiceStatus,
    pub storage: ServiceStatus,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthStatus {
    /// Always `ok` while the process is serving requests
    #[schema(example = "ok")]
    pub status: String,
    /// Server time, ISO 8601 with milliseconds
    #[schema(example = "2025-11-02T10:00:00.000Z")]
    pub timestamp: String,
    /// API version
    #[schema(example = "0.1.0")]
    pub version: String,
    pub services: Services,
}

impl HealthStatus {
    pub fn new(services: Services) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services,
        }
    }
}

/// Run both probes concurrently and assemble the status
pub async fn check(platform: &dyn Platform) -> HealthStatus {
    let (database, storage) = tokio::join!(platform.probe_database(), platform.list_buckets());

    if let Err(e) = &database {
        tracing::warn!("Database probe failed: {}", e);
    }
    match &storage {
        Ok(buckets) => tracing::debug!("Storage probe listed {} buckets", buckets.len()),
        Err(e) => tracing::warn!("Storage probe failed: {}", e),
    }

    HealthStatus::new(Services {
        database: ServiceStatus::from(&database),
        storage: ServiceStatus::from(&storage),
    })
}
