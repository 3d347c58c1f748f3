use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; `ANTHROPIC_API_KEY` is optional and only gates
/// text enhancement.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file holding the whole portfolio record.
    pub portfolio_data_path: PathBuf,
    /// Exports above this size need explicit confirmation.
    pub export_warning_limit_mb: u64,
    /// Upper bound for request bodies (uploads, `replace` actions).
    pub max_request_body_mb: usize,
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            portfolio_data_path: std::env::var("PORTFOLIO_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/portfolio.json")),
            export_warning_limit_mb: parse_env("EXPORT_WARNING_LIMIT_MB", 25)?,
            max_request_body_mb: parse_env("MAX_REQUEST_BODY_MB", 64)?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
        })
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.max_request_body_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            portfolio_data_path: PathBuf::from("data/portfolio.json"),
            export_warning_limit_mb: 25,
            max_request_body_mb: 64,
            anthropic_api_key: None,
        }
    }
}

/// Set and non-blank, otherwise `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u64 = parse_env("FOLIO_TEST_SURELY_UNSET_VAR", 25).unwrap();
        assert_eq!(value, 25);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("FOLIO_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("FOLIO_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("FOLIO_TEST_BAD_PORT");
    }

    #[test]
    fn test_default_body_limit_bytes() {
        assert_eq!(Config::default().max_request_body_bytes(), 64 * 1024 * 1024);
    }
}
