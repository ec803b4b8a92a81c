use serde::{Deserialize, Serialize};

/// One entry of the storage bucket listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Identity resolved by the platform from a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub aud: Option<String>,
}

/// Error body returned by the platform's REST endpoints
#[derive(Debug, Deserialize)]
pub struct PlatformErrorBody {
    #[serde(default, alias = "msg", alias = "error_description")]
    pub message: Option<String>,
}
