//! Configuration module

use crate::error::{BenchError, Result};

/// Port Redis listens on out of the box
pub const DEFAULT_PORT: u16 = 6379;

/// Benchmarks always target the local machine
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Environment variable selecting the server port
pub const PORT_VAR: &str = "REDIS_PORT";

/// Connection settings for the target server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load config from environment, after applying any `.env` file
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(PORT_VAR) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| BenchError::InvalidPort(raw.clone()))?;
        }

        Ok(config)
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }

    /// Open a blocking connection to the configured server
    pub fn connect(&self) -> Result<redis::Connection> {
        let client = redis::Client::open(self.redis_url())?;
        Ok(client.get_connection()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 6379);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_port_from_env() {
        let config = Config::from_lookup(|name| {
            (name == "REDIS_PORT").then(|| "6380".to_string())
        })
        .unwrap();
        assert_eq!(config.port, 6380);
        assert_eq!(config.redis_url(), "redis://127.0.0.1:6380/");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(|_| Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, BenchError::InvalidPort(ref raw) if raw == "not-a-port"));

        let err = Config::from_lookup(|_| Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, BenchError::InvalidPort(_)));
    }

    #[test]
    fn test_connect_refused() {
        // nothing listens on port 1
        let config = Config {
            host: DEFAULT_HOST.to_string(),
            port: 1,
        };
        assert!(matches!(config.connect(), Err(BenchError::Connection(_))));
    }
}
