use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default tracing directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,questions_core=debug";

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    /// Drop notifications whose idempotency key the recipient already holds
    pub dedupe_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            dedupe_notifications: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            dedupe_notifications: match lookup("NOTIFICATIONS_DEDUPE") {
                Some(value) => parse_flag(&value)
                    .context("NOTIFICATIONS_DEDUPE must be true/false, 1/0, yes/no or on/off")?,
                None => defaults.dedupe_notifications,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{}'", other),
    }
}
