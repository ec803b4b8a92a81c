//! Client-side counterparts of the web shell: backend API client, home page
//! status card and the current-user session.

pub mod api;
pub mod home;
pub mod session;

pub use api::ApiClient;
pub use home::HealthView;
pub use session::{Session, auth_guard};
