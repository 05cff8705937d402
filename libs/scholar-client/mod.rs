//! # Scholar Client
//!
//! Typed client for the scholar directory API.
//!
//! ## Features
//!
//! - **Authenticated pipeline**: bearer tokens attached per request, with a single
//!   coordinated token refresh shared by every caller that hits a 401
//! - **Pluggable seams**: token storage, HTTP transport and login redirect are traits
//! - **Typed endpoints**: one method per API endpoint, returning serde DTOs
//! - **Config**: YAML file plus environment overrides
//!
//! ## Example
//!
//! ```rust,ignore
//! use scholar_client::{ClientConfig, ScholarApi, ScholarQuery};
//!
//! let config = ClientConfig::from_env()?;
//! let api = ScholarApi::new(&config)?;
//! let page = api.list_scholars(&ScholarQuery::default()).await?;
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export all traits
pub use traits::*;

// Re-export core pipeline functionality
pub use self::core::{
    helpers::{check_response, extract_error_detail},
    pipeline::{AuthEndpoints, AuthPipeline},
    query::QueryParams,
    refresh::{RefreshCoordinator, RefreshOutcome, RefreshState},
    request::{ApiRequest, FormPart, RequestBody},
    response::ApiResponse,
    transport::ReqwestTransport,
    vault::{TokenVault, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY},
};

pub use api::{ScholarApi, ScholarApiBuilder};
pub use config::{ClientConfig, ConfigError};
pub use logging::init_tracing;
pub use models::*;

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, traits::ClientError>;
