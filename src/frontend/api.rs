use crate::error::Result;
use crate::health::HealthStatus;

/// Client for the backend's public API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch `GET {base_url}/health`
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::health::ServiceStatus;
    use crate::testing::{FakePlatform, spawn_backend};

    #[tokio::test]
    async fn test_check_health_decodes_status() {
        let platform = FakePlatform {
            database_down: true,
            ..FakePlatform::healthy()
        };
        let api = ApiClient::new(spawn_backend(platform).await);

        let health = api.check_health().await.unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.services.database, ServiceStatus::Disconnected);
        assert_eq!(health.services.storage, ServiceStatus::Connected);
    }

    #[tokio::test]
    async fn test_check_health_unknown_path_is_error() {
        let base = spawn_backend(FakePlatform::healthy()).await;
        let api = ApiClient::new(format!("{}/missing", base));

        match api.check_health().await {
            Err(AppError::RequestFailed(e)) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
