// src/config.rs
use std::env;

use anyhow::{Context, bail};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Upstream completion API
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl Config {
    /// Read configuration from the process environment. Call after
    /// `dotenvy::dotenv()` so values from `.env` are visible.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        // The API key has no default and no fallback: refusing to start is
        // better than answering every request with an upstream auth error.
        let api_key = match get("OPENAI_API_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("OPENAI_API_KEY is not set; the relay cannot start without it"),
        };

        Ok(Config {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            api_key,
            api_url: get("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
        })
    }
}
