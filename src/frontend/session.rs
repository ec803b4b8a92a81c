use crate::supabase::{AuthUser, Platform};
use tokio::sync::watch;

/// Holder of the signed-in user.
///
/// One writer, any number of subscribers; the last value can always be read
/// synchronously.
pub struct Session {
    current: watch::Sender<Option<AuthUser>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.current.subscribe()
    }

    pub fn set_user(&self, user: Option<AuthUser>) {
        // send_replace keeps the value even with no live receivers
        self.current.send_replace(user);
    }

    /// Resolve the user behind a stored access token.
    ///
    /// No token or a rejected token leaves the session signed out.
    pub async fn load_user(&self, platform: &dyn Platform, access_token: Option<&str>) {
        let user = match access_token {
            Some(token) => match platform.get_user(token).await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!("Stored session could not be resolved: {}", e);
                    None
                }
            },
            None => None,
        };

        self.set_user(user);
    }
}

/// Route guard for signed-in pages.
// TODO: redirect to the login page once the OAuth sign-in flow is specified
pub fn auth_guard(_session: &Session) -> bool {
    true
}
