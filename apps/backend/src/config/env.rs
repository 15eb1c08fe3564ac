use std::time::Duration;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(5000);

const REQUIRED_VARS: [&str; 2] = ["BACKEND_JWT_SECRET", "DATABASE_URL"];

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub security: SecurityConfig,
    /// Deadline applied to each membership store resolution
    pub store_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Every missing required variable is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let secret = var("BACKEND_JWT_SECRET");
        let database_url = var("DATABASE_URL");

        let (Some(secret), Some(database_url)) = (secret, database_url) else {
            let missing: Vec<&str> = REQUIRED_VARS
                .iter()
                .copied()
                .filter(|name| var(name).is_none())
                .collect();
            return Err(AppError::config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let host = var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let store_timeout = match var("STORE_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(AppError::config(format!(
                        "STORE_TIMEOUT_MS must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_STORE_TIMEOUT,
        };

        Ok(Self {
            host,
            port,
            database_url,
            security: SecurityConfig::new(secret.into_bytes()),
            store_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{AppConfig, DEFAULT_PORT, DEFAULT_STORE_TIMEOUT};
    use crate::errors::ErrorCode;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BACKEND_JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.store_timeout, DEFAULT_STORE_TIMEOUT);
        assert_eq!(cfg.security.jwt_secret, b"s3cret");
    }

    #[test]
    fn all_missing_required_vars_are_listed() {
        let err = AppConfig::from_lookup(lookup(&[("BACKEND_PORT", "8080")])).unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConfigError);
        let detail = err.detail();
        assert!(detail.contains("BACKEND_JWT_SECRET"), "{detail}");
        assert!(detail.contains("DATABASE_URL"), "{detail}");
    }

    #[test]
    fn blank_secret_counts_as_missing() {
        let err = AppConfig::from_lookup(lookup(&[
            ("BACKEND_JWT_SECRET", "   "),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap_err();

        assert!(err.detail().contains("BACKEND_JWT_SECRET"));
        assert!(!err.detail().contains("DATABASE_URL"));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BACKEND_JWT_SECRET", "s"),
            ("DATABASE_URL", "postgres://x"),
            ("BACKEND_HOST", "127.0.0.1"),
            ("BACKEND_PORT", "8081"),
            ("STORE_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.store_timeout, Duration::from_millis(250));
    }

    #[test]
    fn invalid_numbers_are_config_errors() {
        for (name, value) in [("BACKEND_PORT", "70000"), ("STORE_TIMEOUT_MS", "0")] {
            let err = AppConfig::from_lookup(lookup(&[
                ("BACKEND_JWT_SECRET", "s"),
                ("DATABASE_URL", "postgres://x"),
                (name, value),
            ]))
            .unwrap_err();
            assert!(err.detail().contains(name));
        }
    }
}
