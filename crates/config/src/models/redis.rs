use serde::{Deserialize, Serialize};

/// Redis connection settings for the cache probe.
///
/// `enabled` mirrors whether the platform image ships the Redis client
/// module at all; when it is false no probe is attempted and the platform
/// keeps its database-backed cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedisSettings {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub connect_timeout_seconds: u64,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "redis".to_string(),
            port: 6379,
            connect_timeout_seconds: 2,
        }
    }
}

impl RedisSettings {
    /// Apply flat environment variable overrides on top of the current values.
    ///
    /// Missing or unparseable variables leave the existing value in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(enabled) = std::env::var("REDIS_ENABLED") {
            self.enabled = enabled.to_lowercase() != "false";
        }
        if let Ok(host) = std::env::var("REDIS_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(port_str) = std::env::var("REDIS_PORT") {
            if let Ok(port) = port_str.parse() {
                self.port = port;
            }
        }
        if let Ok(timeout_str) = std::env::var("REDIS_CONNECT_TIMEOUT") {
            if let Ok(timeout) = timeout_str.parse() {
                self.connect_timeout_seconds = timeout;
            }
        }
    }

    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides();
        settings
    }

    /// Validate Redis settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            return Err(anyhow::anyhow!("Redis host must not be empty"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("Redis port must be greater than 0"));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(anyhow::anyhow!(
                "Redis connect timeout must be greater than 0"
            ));
        }

        Ok(())
    }

    /// Build the Redis connection URL used by the probe client.
    pub fn build_url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}
