use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wisski_bootstrap_config::BootstrapConfig;
use wisski_bootstrap_infrastructure::{
    seed_default_adapter, CacheBackendResolver, CacheEnvironment, FsResourceProbe,
    HttpAdapterStorage, SettingsPatch,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("wisski-bootstrap")
        .version("1.0.0")
        .about("Deployment bootstrap toolkit for WissKI platform instances")
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Bootstrap operation to run")
                .value_parser(["cache-settings", "create-adapter"])
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file path (TOML); defaults are env-driven"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Settings JSON destination (cache-settings mode), stdout if omitted"),
        )
        .arg(
            Arg::new("app-root")
                .long("app-root")
                .value_name("DIR")
                .help("Platform docroot for resource-existence checks"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level")
                .value_parser(["trace", "debug", "info", "warn", "error"])
                .default_value("info"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("Log format")
                .value_parser(["json", "pretty"])
                .default_value("pretty"),
        )
        .get_matches();

    let mode = matches.get_one::<String>("mode").unwrap();
    let config_path = matches.get_one::<String>("config");
    let output = matches.get_one::<String>("output");
    let app_root_arg = matches.get_one::<String>("app-root");
    let log_level = matches.get_one::<String>("log-level").unwrap();
    let log_format = matches.get_one::<String>("log-format").unwrap();

    init_logging(log_level, log_format)?;

    let mut config = BootstrapConfig::load(config_path.map(String::as_str))
        .context("Failed to load bootstrap configuration")?;
    if let Some(app_root) = app_root_arg {
        config.app_root = app_root.into();
    }

    match mode.as_str() {
        "cache-settings" => run_cache_settings(&config, output.map(String::as_str)).await,
        "create-adapter" => run_create_adapter(&config).await,
        _ => unreachable!("mode is validated by clap"),
    }
}

/// Resolve the cache wiring and emit the settings patch document.
///
/// Degraded mode (no client, failed probe) emits an empty patch and still
/// exits 0: keeping the platform's database cache is the designed outcome,
/// not a failure.
async fn run_cache_settings(config: &BootstrapConfig, output: Option<&str>) -> Result<()> {
    let env = CacheEnvironment::capture(&config.redis).await;

    let resolver = CacheBackendResolver::new(Arc::new(FsResourceProbe::new(&config.app_root)));
    let result = resolver.resolve(&env);

    let patch = SettingsPatch::from_resolution(&result);
    if patch.is_empty() {
        warn!("No cache wiring emitted, platform keeps its current cache configuration");
    }

    let document = serde_json::to_string_pretty(&patch.to_json())
        .context("Failed to render settings document")?;

    match output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("Failed to write {path}"))?;
            info!("Wrote cache settings to {path}");
        }
        None => println!("{document}"),
    }

    Ok(())
}

/// Create the default triple-store adapter record.
///
/// Any storage error propagates to a nonzero exit; this operation is meant
/// for supervised one-time execution.
async fn run_create_adapter(config: &BootstrapConfig) -> Result<()> {
    let storage = HttpAdapterStorage::new(config.adapter.api_url.clone());
    seed_default_adapter(&storage, &config.adapter)
        .await
        .context("Failed to create default adapter")?;

    info!("Default adapter created");
    Ok(())
}

/// Initialize the logging system
fn init_logging(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("Failed to initialize JSON log format")?;
        }
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("Failed to initialize pretty log format")?;
        }
        _ => {
            return Err(anyhow::anyhow!("Unsupported log format: {log_format}"));
        }
    }

    Ok(())
}
