//! Request pipeline
//!
//! Split into focused modules:
//! - `request` / `response`: transport-neutral HTTP messages
//! - `transport`: reqwest-backed `HttpTransport`
//! - `vault`: access/refresh tokens on top of a `KeyValueStore`
//! - `refresh`: single-slot in-flight refresh cell
//! - `pipeline`: send, refresh once on 401, retry once
//! - `query`: query-string encoding
//! - `helpers`: response checks and JSON decoding

pub mod helpers;
pub mod pipeline;
pub mod query;
pub mod refresh;
pub mod request;
pub mod response;
pub mod transport;
pub mod vault;

pub use pipeline::{AuthEndpoints, AuthPipeline};
pub use query::QueryParams;
pub use refresh::{RefreshCoordinator, RefreshOutcome, RefreshState};
pub use request::{ApiRequest, FormPart, RequestBody};
pub use response::ApiResponse;
pub use transport::ReqwestTransport;
pub use vault::TokenVault;
