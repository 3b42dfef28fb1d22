use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{adapter::AdapterSeedConfig, redis::RedisSettings};

/// Toolkit configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BootstrapConfig {
    pub redis: RedisSettings,
    pub adapter: AdapterSeedConfig,
    /// Platform docroot the resource-existence checks are rooted at.
    pub app_root: PathBuf,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            redis: RedisSettings::default(),
            adapter: AdapterSeedConfig::default(),
            app_root: PathBuf::from("."),
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from config file and environment variables.
    ///
    /// Load order:
    /// 1. Built-in defaults
    /// 2. Config file (TOML format), if present
    /// 3. Environment overrides (`WISSKI_` prefix with `__`-separated
    ///    nested keys, then the flat deployment variables such as
    ///    `REDIS_HOST` and `DEFAULT_GRAPH`)
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("redis.enabled", true)?
            .set_default("redis.host", "redis")?
            .set_default("redis.port", 6379)?
            .set_default("redis.connect_timeout_seconds", 2)?
            .set_default("adapter.id", "default")?
            .set_default("adapter.label", "Default")?
            .set_default("adapter.description", "Default SALZ-Adapter")?
            .set_default("adapter.engine_id", "sparql11_with_pb")?
            .set_default("adapter.machine_name", "default")?
            .set_default("adapter.writable", true)?
            .set_default("adapter.is_preferred_local_store", true)?
            .set_default("adapter.is_federatable", true)?
            .set_default("adapter.read_url", "http://graphdb:7200/repositories/default")?
            .set_default(
                "adapter.write_url",
                "http://graphdb:7200/repositories/default/statements",
            )?
            .set_default(
                "adapter.same_as_properties",
                vec!["http://www.w3.org/2002/07/owl#sameAs"],
            )?
            .set_default("adapter.ontology_graphs", Vec::<String>::new())?
            .set_default("adapter.api_url", "http://127.0.0.1:8080")?
            .set_default("app_root", ".")?;

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("Config file does not exist: {path}"));
            }
        } else {
            let default_paths = ["config/bootstrap.toml", "bootstrap.toml"];
            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    break;
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("WISSKI")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: BootstrapConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // The deployment images export flat variables; those win over
        // everything the file or prefixed environment provided.
        config.redis.apply_env_overrides();
        config.adapter.apply_env_overrides();
        if let Ok(app_root) = std::env::var("APP_ROOT") {
            if !app_root.is_empty() {
                config.app_root = PathBuf::from(app_root);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: BootstrapConfig =
            toml::from_str(toml_str).context("Failed to parse TOML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.redis
            .validate()
            .context("Redis settings validation failed")?;

        self.adapter
            .validate()
            .context("Adapter seed validation failed")?;

        Ok(())
    }
}
