use std::time::Duration;

use tracing::warn;
use wisski_bootstrap_config::RedisSettings;

use super::probe::probe;

/// Immutable snapshot of the runtime facts cache resolution depends on.
///
/// Captured once per process bootstrap; resolution itself is pure over this
/// value, so equal snapshots always resolve identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEnvironment {
    pub client_available: bool,
    pub host: String,
    pub port: u16,
    pub connect_timeout_seconds: u64,
    pub probe_succeeded: bool,
}

impl CacheEnvironment {
    /// Capture the environment, running at most one connectivity probe.
    ///
    /// Probe failure is the designed degraded mode, not an error: it is
    /// logged here and recorded in the snapshot, never propagated. Retry
    /// happens at a higher time scale, by the next process bootstrap.
    pub async fn capture(settings: &RedisSettings) -> Self {
        if !settings.enabled {
            return Self::without_client(settings);
        }

        let timeout = Duration::from_secs(settings.connect_timeout_seconds);
        let probe_succeeded = match probe(&settings.host, settings.port, timeout).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Redis connection to {}:{} failed, keeping database cache: {e}",
                    settings.host, settings.port
                );
                false
            }
        };

        Self {
            client_available: true,
            host: settings.host.clone(),
            port: settings.port,
            connect_timeout_seconds: settings.connect_timeout_seconds,
            probe_succeeded,
        }
    }

    /// Snapshot for a deployment without the Redis client module.
    pub fn without_client(settings: &RedisSettings) -> Self {
        Self {
            client_available: false,
            host: settings.host.clone(),
            port: settings.port,
            connect_timeout_seconds: settings.connect_timeout_seconds,
            probe_succeeded: false,
        }
    }
}
