//! Session methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{AuthSession, LogoutResponse};
use crate::traits::error::Result;
use tracing::{info, warn};
use url::Url;

impl ScholarApi {
    /// Where a user starts the interactive login
    pub fn login_url(&self) -> &Url {
        &self.pipeline().endpoints().login_url
    }

    /// Store the token pair handed back by the login callback
    pub fn establish_session(&self, session: &AuthSession) -> Result<()> {
        self.vault()
            .store_session(&session.access_token, &session.refresh_token)?;
        info!("Session established");
        Ok(())
    }

    pub fn has_session(&self) -> bool {
        self.vault().has_session()
    }

    /// Exchange the stored refresh token for a new access token
    ///
    /// Joins a refresh already in flight. On failure the session is purged
    /// and the login redirect fires, exactly as for a 401 during a request.
    pub async fn refresh(&self) -> Result<String> {
        self.pipeline().refresh_access_token().await
    }

    /// End the session server-side, then drop local tokens
    ///
    /// Local tokens are purged even when the server call fails.
    pub async fn logout(&self) -> Result<LogoutResponse> {
        let request = ApiRequest::post(self.url(&["auth", "logout"])?).authenticated();
        let result = self.fetch(request, "Failed to log out").await;

        if let Err(e) = &result {
            warn!("Logout request failed: {}", e);
        }
        self.vault().purge()?;

        result
    }
}
