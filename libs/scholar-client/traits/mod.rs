//! # Scholar Client Traits
//!
//! The seams the request pipeline is assembled from:
//!
//! - **KeyValueStore**: persistent client-side storage holding the tokens
//! - **HttpTransport**: performs a single HTTP exchange
//! - **LoginRedirect**: sends the user back to the login entry point when the
//!   session cannot be refreshed
//!
//! ## Example
//!
//! ```rust,ignore
//! use scholar_client::traits::*;
//!
//! struct BrowserRedirect;
//!
//! impl LoginRedirect for BrowserRedirect {
//!     fn redirect_to_login(&self, login_url: &str) {
//!         let _ = open::that(login_url);
//!     }
//! }
//! ```

pub mod error;
pub mod redirect;
pub mod storage;
pub mod transport;

// Re-export commonly used types
pub use error::{ClientError, RefreshError, Result};
pub use redirect::{LogRedirect, LoginRedirect, NoRedirect};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use transport::HttpTransport;
