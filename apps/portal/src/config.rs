use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_DATA_DIR: &str = ".careerpilot";

/// Portal configuration loaded from environment variables.
/// Every setting has a default so the portal starts with no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote CareerPilot API, without a trailing slash.
    pub api_url: String,
    pub port: u16,
    /// Directory holding the persisted session keys.
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: normalize_base_url(&env_or("CAREERPILOT_API_URL", DEFAULT_API_URL)),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: PathBuf::from(env_or("CAREERPILOT_DATA_DIR", DEFAULT_DATA_DIR)),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:5000//"),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_clean_url() {
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }
}
