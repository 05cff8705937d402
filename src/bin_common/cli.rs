//! CLI utilities for binaries
//!
//! Handles configuration loading and environment variables.

use anyhow::{Context, Result};
use scholar_client::ClientConfig;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "SCHOLAR_CONFIG_PATH";

/// Config file used when `SCHOLAR_CONFIG_PATH` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/client.yaml";

/// Load configuration path from environment or use default
pub fn config_path_from_env() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

/// Load the client config at `path`, or defaults plus environment when the
/// file does not exist
pub fn load_client_config(path: &Path) -> Result<ClientConfig> {
    if path.exists() {
        ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        ClientConfig::from_env().context("Invalid configuration from environment")
    }
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}
