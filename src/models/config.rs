//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::query::DEFAULT_PAGE_SIZE;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the Records Source API, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    pub templates_dir: String,
    /// Signing key for flash-message cookies; at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}
