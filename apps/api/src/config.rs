use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MIN_JOB_DESCRIPTION_CHARS: usize = 10;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub min_job_description_chars: usize,
    /// JSON file replacing the built-in skill taxonomies.
    pub skill_taxonomy_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            min_job_description_chars: DEFAULT_MIN_JOB_DESCRIPTION_CHARS,
            skill_taxonomy_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            min_job_description_chars: parse_env(
                "MIN_JOB_DESCRIPTION_CHARS",
                DEFAULT_MIN_JOB_DESCRIPTION_CHARS,
            )?,
            skill_taxonomy_path: std::env::var_os("SKILL_TAXONOMY_PATH").map(PathBuf::from),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.min_job_description_chars, 10);
        assert!(config.skill_taxonomy_path.is_none());
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u16 = parse_env("ATS_API_TEST_UNSET_VARIABLE", 1234).unwrap();
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_parse_env_rejects_malformed_value() {
        std::env::set_var("ATS_API_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("ATS_API_TEST_BAD_PORT", 80).unwrap_err();
        assert!(err.to_string().contains("ATS_API_TEST_BAD_PORT"));
        std::env::remove_var("ATS_API_TEST_BAD_PORT");
    }
}
