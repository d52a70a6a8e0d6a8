use anyhow::{bail, Context, Result};

use crate::llm_client::{ModelId, DEFAULT_API_BASE};

/// Application configuration loaded from environment variables.
/// Startup fails if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub default_model: ModelId,
    pub api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_model = match std::env::var("GEMINI_MODEL") {
            Ok(raw) => raw
                .parse::<ModelId>()
                .context("GEMINI_MODEL must name a supported model")?,
            Err(_) => ModelId::default(),
        };

        Ok(Config {
            google_api_key: require_secret("GOOGLE_API_KEY")?,
            default_model,
            api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_secret(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    check_secret(key, &value)?;
    Ok(value)
}

/// A credential made only of whitespace is as good as a missing one.
fn check_secret(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(())
}
