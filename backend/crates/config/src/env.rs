use credcheck_common::error::{CredcheckError, CredcheckResult};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the scoring service; `/api/check` is appended per request.
    pub scoring_url: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present. Every variable has a default.
    pub fn from_env() -> CredcheckResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let scoring_url = get_var_or("SCORING_URL", "http://127.0.0.1:5000");
        validate_scoring_url(&scoring_url)?;

        Ok(Self {
            scoring_url: scoring_url.trim_end_matches('/').to_owned(),
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| CredcheckError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_scoring_url(raw: &str) -> CredcheckResult<()> {
    let url = Url::parse(raw)
        .map_err(|e| CredcheckError::Config(format!("invalid SCORING_URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CredcheckError::Config(format!(
            "SCORING_URL must use http or https, got {other}"
        ))),
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vars() {
        for key in ["SCORING_URL", "HOST", "PORT", "LOG_LEVEL"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.scoring_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn scoring_url_trailing_slash_is_stripped() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        env::set_var("SCORING_URL", "https://scoring.internal/");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.scoring_url, "https://scoring.internal");

        env::remove_var("SCORING_URL");
    }

    #[test]
    fn config_rejects_non_http_scoring_url() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        env::set_var("SCORING_URL", "ftp://scoring.internal");

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(CredcheckError::Config(_))));

        env::remove_var("SCORING_URL");
    }

    #[test]
    fn config_rejects_invalid_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        env::set_var("PORT", "eighty");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        env::remove_var("PORT");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            scoring_url: String::new(),
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
