//! Scholar Console - Main Library
//!
//! Command-line console for the scholar directory API.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (config discovery, commands)
//! - **scholar_client**: Typed API client (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,ignore
//! use scholar_console::bin_common::{load_client_config, config_path_from_env, Command};
//! use scholar_console::scholar_client::ScholarApi;
//! ```

// Re-export workspace libraries for convenience
pub use scholar_client;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod command;
    pub mod runner;

    pub use cli::{
        config_path_from_env, load_client_config, parse_args, CONFIG_PATH_ENV,
        DEFAULT_CONFIG_PATH,
    };
    pub use command::{Command, USAGE};
    pub use runner::run_command;
}
