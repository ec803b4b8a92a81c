use crate::error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Managed platform (database, storage, auth) configuration
    pub platform: PlatformConfig,
    /// Server configuration
    pub server: ServerConfig,
}

/// Managed platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Platform base URL (e.g., https://project.supabase.co)
    #[serde(default)]
    pub url: String,
    /// Service role key used for server-side calls
    #[serde(default)]
    pub service_role_key: String,
    /// Table queried by the database health probe
    pub probe_table: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Platform request timeout in seconds. Set to -1 to disable timeout.
    pub request_timeout_seconds: i64,
}

/// Values taken from the process environment, applied on top of config.yaml
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub platform_url: Option<String>,
    pub service_role_key: Option<String>,
    pub port: Option<u16>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Ok(Self {
            platform_url: std::env::var("SUPABASE_URL").ok(),
            service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            port: Self::parse_port(std::env::var("PORT").ok())?,
        })
    }

    fn parse_port(raw: Option<String>) -> Result<Option<u16>, config::ConfigError> {
        raw.map(|p| {
            p.trim().parse::<u16>().map_err(|e| {
                config::ConfigError::Message(format!("PORT '{}' is not a valid port: {}", p, e))
            })
        })
        .transpose()
    }
}

impl Config {
    /// Load configuration from `.env`, an optional config.yaml and the environment
    ///
    /// Environment variables:
    /// - `SUPABASE_URL` - Platform base URL (required)
    /// - `SUPABASE_SERVICE_ROLE_KEY` - Platform service key (required)
    /// - `PORT` - Override listen port
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Platform credentials are missing or blank
    /// - `PORT` is not a valid port number
    /// - Configuration is invalid (malformed YAML, wrong types)
    /// - URL validation fails
    pub fn load() -> error::Result<Self> {
        dotenv::dotenv().ok();
        Self::build(Path::new("config.yaml"), EnvOverrides::from_env()?)
    }

    pub fn build(file: &Path, env: EnvOverrides) -> error::Result<Self> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_seconds", -1)?
            .set_default("platform.probe_table", "users")?
            .add_source(
                config::File::from(file)
                    .required(false)
                    .format(config::FileFormat::Yaml),
            )
            .set_override_option("platform.url", env.platform_url)?
            .set_override_option("platform.service_role_key", env.service_role_key)?
            .set_override_option("server.port", env.port.map(i64::from))?
            .build()?;

        let cfg: Config = config.try_deserialize()?;

        cfg.validate()?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.platform.url.trim().is_empty() || self.platform.service_role_key.trim().is_empty()
        {
            return Err(config::ConfigError::Message(
                "Platform credentials missing: set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY"
                    .to_string(),
            ));
        }

        if let Err(e) = Self::validate_url(&self.platform.url, "Platform") {
            return Err(config::ConfigError::Message(e));
        }

        if self.platform.probe_table.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "Platform probe table cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(url: &str, context: &str) -> Result<(), String> {
        if url.is_empty() {
            return Err(format!("{} URL cannot be empty", context));
        }

        match url.parse::<url::Url>() {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(format!(
                        "{} URL must use http:// or https:// scheme",
                        context
                    ));
                }

                if parsed_url.host_str().is_none() {
                    return Err(format!("{} URL must have a valid host", context));
                }

                Ok(())
            }
            Err(e) => Err(format!("{} URL is invalid: {}", context, e)),
        }
    }
}
