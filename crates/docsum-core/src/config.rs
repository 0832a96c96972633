//! Configuration module
//!
//! The client needs very little configuration: the API base URL and the
//! upload limits. The base URL defaults to the production backend and can
//! be overridden with `DOCSUM_API_URL` (or `API_URL`).

use std::env;

use crate::constants::{DEFAULT_API_BASE_URL, MAX_FILE_SIZE_BYTES};

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix, without a trailing slash.
    pub api_base_url: String,
    pub max_file_size_bytes: usize,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("DOCSUM_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}
