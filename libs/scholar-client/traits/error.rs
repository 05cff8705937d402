use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for scholar client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, broken body)
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// Non-success HTTP status, optionally enriched with server detail
    #[error("{}", describe_api_error(.message, .detail.as_deref()))]
    Api {
        status: StatusCode,
        message: String,
        detail: Option<String>,
    },

    /// The session could not be refreshed; tokens have been purged
    #[error("Token refresh failed: {0}")]
    RefreshFailed(#[from] RefreshError),

    /// Response body did not match the expected shape
    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Token storage could not be read or written
    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ClientError {
    /// HTTP status carried by an API error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered 401 (after any refresh attempt)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Whether the session ended because the refresh failed
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::RefreshFailed(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::RequestFailed(err.to_string())
    }
}

fn describe_api_error(message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{} ({})", message, detail),
        None => message.to_string(),
    }
}

fn describe_rejection(status: &u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("refresh endpoint returned {}: {}", status, detail),
        None => format!("refresh endpoint returned {}", status),
    }
}

/// Why a token refresh did not produce a new access token
///
/// Cloneable because a single outcome is handed to every caller waiting on
/// the same refresh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    #[error("no refresh token stored")]
    MissingRefreshToken,

    #[error("{}", describe_rejection(.status, .detail.as_deref()))]
    Rejected { status: u16, detail: Option<String> },

    #[error("refresh response missing access token")]
    MissingAccessToken,

    #[error("refresh request failed: {0}")]
    Transport(String),

    #[error("could not persist refreshed token: {0}")]
    Storage(String),
}

/// Result type for scholar client operations
pub type Result<T> = std::result::Result<T, ClientError>;
