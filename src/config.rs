//! Process configuration read from the environment (and an optional `.env` file).

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://feedback.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// - `PORT` (default `3000`)
    /// - `DATABASE_URL` (default `sqlite://feedback.db`)
    /// - `DATABASE_MAX_CONNECTIONS` (default `5`, must be positive)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let raw_max_connections = lookup("DATABASE_MAX_CONNECTIONS");
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            raw_max_connections.clone(),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                value: raw_max_connections.unwrap_or_default(),
            });
        }

        Ok(Self {
            port,
            database_url,
            max_connections,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            load(&[]).unwrap(),
            Config {
                port: 3000,
                database_url: "sqlite://feedback.db".into(),
                max_connections: 5,
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid {
                var: "PORT",
                value: "http".into()
            }
        );
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert_eq!(
            load(&[("DATABASE_MAX_CONNECTIONS", " 00")]).unwrap_err(),
            ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                value: " 00".into()
            }
        );
        assert!(load(&[("PORT", "70000")]).is_err());
    }
}
