use crate::frontend::api::ApiClient;
use crate::health::HealthStatus;

/// State of the home page's backend status card
#[derive(Debug, Clone, PartialEq)]
pub enum HealthView {
    Loading,
    Loaded(HealthStatus),
    Unreachable,
}

impl HealthView {
    /// Single health poll for one page load. No retry.
    pub async fn load(api: &ApiClient) -> Self {
        match api.check_health().await {
            Ok(health) => HealthView::Loaded(health),
            Err(e) => {
                tracing::debug!("Backend health poll failed: {}", e);
                HealthView::Unreachable
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HealthView::Loading)
    }

    /// Status card text, one line per field
    pub fn render(&self) -> String {
        match self {
            HealthView::Loading => "Checking backend...".to_string(),
            HealthView::Loaded(health) => format!(
                "Status: {}\nVersion: {}\nDatabase: {}\nStorage: {}",
                health.status,
                health.version,
                health.services.database,
                health.services.storage
            ),
            HealthView::Unreachable => "Backend unreachable".to_string(),
        }
    }
}
