use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Why a connectivity probe failed.
///
/// Every variant is folded into the same "external cache unavailable"
/// outcome during resolution; the detail only feeds the diagnostic log line.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Run one bounded connectivity check against the cache service.
///
/// The probe connection is dropped as soon as the PING answers. A separate,
/// long-lived connection is established later by the platform's own cache
/// wiring, never by this function.
pub async fn probe(host: &str, port: u16, timeout: Duration) -> Result<(), ProbeError> {
    let client = redis::Client::open(format!("redis://{host}:{port}/"))?;

    let attempt = async {
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok::<(), ProbeError>(())
    };

    match tokio::time::timeout(timeout, attempt).await {
        Ok(result) => {
            if result.is_ok() {
                debug!("Cache service at {host}:{port} answered PING");
            }
            result
        }
        Err(_) => Err(ProbeError::Timeout(timeout)),
    }
}
