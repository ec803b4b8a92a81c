use crate::config::PlatformConfig;
use crate::error::{AppError, Result};
use crate::supabase::Platform;
use crate::supabase::types::{AuthUser, Bucket, PlatformErrorBody};
use async_trait::async_trait;

/// Client for the managed platform's REST, storage and auth APIs
#[derive(Clone)]
pub struct SupabaseClient {
    config: PlatformConfig,
    client: reqwest::Client,
}

impl SupabaseClient {
    /// Create a new platform client
    ///
    /// # Arguments
    ///
    /// * `config` - Platform configuration
    /// * `timeout_seconds` - HTTP request timeout in seconds (use -1 for no timeout)
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails
    pub fn new(config: PlatformConfig, timeout_seconds: i64) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder();
        if timeout_seconds > 0 {
            client_builder =
                client_builder.timeout(std::time::Duration::from_secs(timeout_seconds as u64));
        }

        Ok(Self {
            config,
            client: client_builder.build().map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e))
            })?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.url.trim_end_matches('/'), path)
    }

    fn service_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
    }

    async fn ensure_success(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<PlatformErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        Err(AppError::Platform(format!(
            "{} failed with status {}: {}",
            what, status, detail
        )))
    }
}

#[async_trait]
impl Platform for SupabaseClient {
    async fn probe_database(&self) -> Result<()> {
        let url = self.endpoint(&format!("/rest/v1/{}", self.config.probe_table));

        let response = self
            .service_request(&url)
            .query(&[("select", "count"), ("limit", "1")])
            .send()
            .await?;

        Self::ensure_success(response, "Database probe").await?;
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<Bucket>> {
        let url = self.endpoint("/storage/v1/bucket");

        let response = self.service_request(&url).send().await?;
        let response = Self::ensure_success(response, "Bucket listing").await?;

        Ok(response.json().await?)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let url = self.endpoint("/auth/v1/user");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let response = Self::ensure_success(response, "User lookup").await?;
        Ok(response.json().await?)
    }
}
