use anyhow::{ensure, Context, Result};

const DEFAULT_SUGGESTION_LIMIT: usize = 4;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// How many suggestions an experience entry is offered at once.
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        let port = match optional_env("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let suggestion_limit = match optional_env("SUGGESTION_LIMIT") {
            Some(v) => v
                .parse::<usize>()
                .context("SUGGESTION_LIMIT must be a positive integer")?,
            None => defaults.suggestion_limit,
        };
        ensure!(suggestion_limit >= 1, "SUGGESTION_LIMIT must be at least 1");

        Ok(Config {
            host: optional_env("HOST").unwrap_or(defaults.host),
            port,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            suggestion_limit,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
