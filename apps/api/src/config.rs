use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_BRAND_NAME: &str = "Diasen Polska";
const DEFAULT_SALUTATION_NAME: &str = "DIASEN";
const DEFAULT_AUTHOR_NAME: &str = "Amitiel Angelisme";

/// Application configuration loaded from environment variables.
/// Nothing is required: without `OPENROUTER_API_KEY` every proposal comes
/// from the local template.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    /// Brand the proposal is addressed to.
    pub brand_name: String,
    /// Short brand name used in the greeting line.
    pub salutation_name: String,
    /// Name used in the signature of every proposal.
    pub author_name: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_model: optional_env("OPENROUTER_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openrouter_base_url: optional_env("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            brand_name: optional_env("PROPOSAL_BRAND_NAME")
                .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            salutation_name: optional_env("PROPOSAL_SALUTATION_NAME")
                .unwrap_or_else(|| DEFAULT_SALUTATION_NAME.to_string()),
            author_name: optional_env("PROPOSAL_AUTHOR_NAME")
                .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Defaults with no external service configured.
    #[cfg(test)]
    pub fn local() -> Self {
        Config {
            openrouter_api_key: None,
            openrouter_model: DEFAULT_MODEL.to_string(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            salutation_name: DEFAULT_SALUTATION_NAME.to_string(),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads an env var, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
