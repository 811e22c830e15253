use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct LandingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub otlp_endpoint: Option<String>,
}

/// Connection settings for the document store.
///
/// Both `url` and `name` must be present for the store to be enabled;
/// otherwise the service runs in degraded mode.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.name.is_some()
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl LandingConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, APP__ overrides and PORT
        let common_config = core_config::Config::load()?;

        let timeout_secs = match optional_env("DATABASE_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "DATABASE_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?,
            None => 5,
        };

        Ok(LandingConfig {
            common: common_config,
            database: DatabaseConfig {
                url: optional_env("DATABASE_URL"),
                name: optional_env("DATABASE_NAME"),
                timeout_secs,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(
                    &optional_env("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
                ),
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("https://a.example, https://b.example ,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn wildcard_allows_any_origin() {
        let cors = CorsConfig {
            allowed_origins: parse_origins("*"),
        };
        assert!(cors.allows_any_origin());

        let cors = CorsConfig {
            allowed_origins: parse_origins("https://a.example"),
        };
        assert!(!cors.allows_any_origin());
    }

    #[test]
    fn database_requires_url_and_name() {
        let mut db = DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: None,
            timeout_secs: 5,
        };
        assert!(!db.is_configured());

        db.name = Some("landing".to_string());
        assert!(db.is_configured());
    }
}
