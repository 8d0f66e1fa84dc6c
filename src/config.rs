//! Runtime settings from the environment (`.env` is honored).

use url::Url;

use crate::error::AppError;

/// Environment variable naming the page that opens offer links.
pub const BASE_URL_VAR: &str = "COMPMAX_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Url,
}

impl Settings {
    /// Load settings; `override_base_url` (from the CLI) wins over the environment.
    pub fn from_env(override_base_url: Option<&str>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env_value = std::env::var(BASE_URL_VAR).ok();
        Self::resolve(override_base_url, env_value.as_deref())
    }

    fn resolve(cli: Option<&str>, env: Option<&str>) -> Result<Self, AppError> {
        let raw = cli
            .or(env)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)
            .map_err(|e| AppError::new(2, format!("Invalid base URL '{raw}': {e}")))?;
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_value_wins_over_environment() {
        let s = Settings::resolve(Some("https://a.example/"), Some("https://b.example/")).unwrap();
        assert_eq!(s.base_url.as_str(), "https://a.example/");

        let s = Settings::resolve(None, Some("https://b.example/offer")).unwrap();
        assert_eq!(s.base_url.as_str(), "https://b.example/offer");
    }

    #[test]
    fn falls_back_to_default() {
        let s = Settings::resolve(None, Some("  ")).unwrap();
        assert_eq!(s.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_an_input_error() {
        let err = Settings::resolve(Some("not a url"), None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
