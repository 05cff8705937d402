use tracing::warn;

/// Trait for sending the user back to the login entry point
///
/// Called once per failed refresh, after both tokens have been purged.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, login_url: &str);
}

/// Logs the login URL; the default for headless clients
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self, login_url: &str) {
        warn!("Session expired, sign in again at {}", login_url);
    }
}

/// Does nothing
pub struct NoRedirect;

impl LoginRedirect for NoRedirect {
    fn redirect_to_login(&self, _login_url: &str) {}
}
