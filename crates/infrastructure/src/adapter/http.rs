use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info};
use wisski_bootstrap_errors::{BootstrapError, BootstrapResult};

use super::{AdapterEntity, AdapterStorage};

/// Adapter storage backed by the platform's entity API.
pub struct HttpAdapterStorage {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpAdapterStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/wisski/adapters", self.base_url)
    }
}

#[async_trait]
impl AdapterStorage for HttpAdapterStorage {
    async fn save(&self, entity: &AdapterEntity) -> BootstrapResult<()> {
        let url = self.endpoint();

        match self.http_client.post(&url).json(entity).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    info!("Persisted adapter record {}", entity.id);
                    return Ok(());
                }

                let body = response.text().await.unwrap_or_default();
                error!("Failed to persist adapter {}: HTTP {status} - {body}", entity.id);

                if status == StatusCode::CONFLICT {
                    Err(BootstrapError::adapter_exists(&entity.id))
                } else if status.is_client_error() {
                    Err(BootstrapError::validation_error(format!(
                        "HTTP {status} - {body}"
                    )))
                } else {
                    Err(BootstrapError::storage_error(format!(
                        "HTTP {status} - {body}"
                    )))
                }
            }
            Err(e) => {
                error!("Failed to reach entity API at {url}: {e}");
                Err(BootstrapError::network_error(format!(
                    "entity API connection error: {e}"
                )))
            }
        }
    }
}
