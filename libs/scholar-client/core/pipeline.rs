//! Authenticated request pipeline
//!
//! Every API call goes through [`AuthPipeline::send`]:
//!
//! 1. Send with the stored access token.
//! 2. Anything but 401 goes straight back to the caller.
//! 3. On 401, join or start the shared refresh (see [`RefreshCoordinator`]).
//! 4. On refresh success, re-send once with the new token. A second 401 is
//!    returned as-is.
//! 5. On refresh failure, tokens are purged, the login redirect fires once,
//!    and every waiting caller gets `ClientError::RefreshFailed`.

use super::helpers::extract_error_detail;
use super::refresh::{RefreshCoordinator, RefreshOutcome, RefreshState};
use super::request::ApiRequest;
use super::response::ApiResponse;
use super::vault::TokenVault;
use crate::traits::error::{ClientError, RefreshError, Result};
use crate::traits::redirect::LoginRedirect;
use crate::traits::transport::HttpTransport;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Where the pipeline exchanges refresh tokens and sends expired sessions
#[derive(Debug, Clone)]
pub struct AuthEndpoints {
    pub refresh_url: Url,
    pub login_url: Url,
}

#[derive(Debug, Serialize)]
struct RefreshTokenRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshTokenResponse {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// Sends requests with bearer auth and recovers from expired access tokens
pub struct AuthPipeline {
    transport: Arc<dyn HttpTransport>,
    vault: TokenVault,
    redirect: Arc<dyn LoginRedirect>,
    coordinator: RefreshCoordinator,
    endpoints: AuthEndpoints,
}

impl AuthPipeline {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        vault: TokenVault,
        redirect: Arc<dyn LoginRedirect>,
        endpoints: AuthEndpoints,
    ) -> Self {
        Self {
            transport,
            vault,
            redirect,
            coordinator: RefreshCoordinator::new(),
            endpoints,
        }
    }

    pub fn vault(&self) -> &TokenVault {
        &self.vault
    }

    pub fn endpoints(&self) -> &AuthEndpoints {
        &self.endpoints
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.coordinator.state()
    }

    /// Number of refresh exchanges this pipeline has started
    pub fn refresh_count(&self) -> u64 {
        self.coordinator.refresh_count()
    }

    /// Send a request, refreshing the access token once on 401
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let token = if request.authenticated {
            self.vault.access_token()
        } else {
            None
        };

        debug!("{} {}", request.method, request.url);

        let response = self
            .transport
            .execute(&request.with_bearer(token.as_deref()))
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!("{} {} returned 401", request.method, request.url);

        let fresh_token = self.refresh_access_token().await?;

        debug!("Retrying {} {} with refreshed token", request.method, request.url);

        self.transport
            .execute(&request.with_bearer(Some(&fresh_token)))
            .await
    }

    /// Obtain a new access token, sharing any refresh already in flight
    pub async fn refresh_access_token(&self) -> Result<String> {
        let transport = Arc::clone(&self.transport);
        let vault = self.vault.clone();
        let redirect = Arc::clone(&self.redirect);
        let endpoints = self.endpoints.clone();

        let outcome = self
            .coordinator
            .run(move || async move {
                info!("Refreshing access token");

                match exchange_refresh_token(transport.as_ref(), &vault, &endpoints.refresh_url)
                    .await
                {
                    Ok(token) => {
                        info!("Access token refreshed");
                        Ok(token)
                    }
                    Err(e) => {
                        warn!("Token refresh failed: {}", e);
                        if let Err(purge_err) = vault.purge() {
                            warn!("Failed to purge tokens: {}", purge_err);
                        }
                        redirect.redirect_to_login(endpoints.login_url.as_str());
                        Err(e)
                    }
                }
            })
            .await;

        outcome.map_err(ClientError::from)
    }
}

/// POST the stored refresh token and persist the returned access token
async fn exchange_refresh_token(
    transport: &dyn HttpTransport,
    vault: &TokenVault,
    refresh_url: &Url,
) -> RefreshOutcome {
    let refresh_token = vault
        .refresh_token()
        .ok_or(RefreshError::MissingRefreshToken)?;

    let request = ApiRequest::post(refresh_url.clone())
        .with_json(&RefreshTokenRequest {
            refresh_token: &refresh_token,
        })
        .map_err(|e| RefreshError::Transport(e.to_string()))?;

    let response = transport
        .execute(&request)
        .await
        .map_err(|e| RefreshError::Transport(e.to_string()))?;

    if !response.is_success() {
        return Err(RefreshError::Rejected {
            status: response.status().as_u16(),
            detail: extract_error_detail(&response),
        });
    }

    let token = response
        .json::<RefreshTokenResponse>()
        .ok()
        .and_then(|body| body.access_token)
        .filter(|t| !t.is_empty())
        .ok_or(RefreshError::MissingAccessToken)?;

    vault
        .store_access_token(&token)
        .map_err(|e| RefreshError::Storage(e.to_string()))?;

    Ok(token)
}
