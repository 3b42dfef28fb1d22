//! Default triple-store adapter creation.
//!
//! The platform's entity storage is an external collaborator; this module
//! only models the boundary: an adapter record, its engine configuration,
//! and a storage capability to persist it through. Persistence failures are
//! deliberately never caught here — the seeding script runs supervised and
//! a failure must reach the operator as a fatal exit.

pub mod http;
pub mod seed;

pub use http::*;
pub use seed::*;

use async_trait::async_trait;
use serde::Serialize;
use wisski_bootstrap_errors::BootstrapResult;

/// Engine configuration attached to an adapter record.
///
/// Field names (including the `machine-name` hyphenation) are the exact
/// keys the platform's adapter entity expects and are serialized verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EngineConfig {
    pub id: String,
    #[serde(rename = "machine-name")]
    pub machine_name: String,
    pub header: String,
    pub writeable: bool,
    pub is_preferred_local_store: bool,
    pub read_url: String,
    pub write_url: String,
    pub is_federatable: bool,
    pub default_graph: Option<String>,
    pub same_as_properties: Vec<String>,
    pub ontology_graphs: Vec<String>,
}

/// One adapter record as handed to the entity storage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdapterEntity {
    pub id: String,
    pub label: String,
    pub description: String,
    pub engine: Option<EngineConfig>,
}

impl AdapterEntity {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            engine: None,
        }
    }

    /// Attach the engine configuration, fluent-style.
    pub fn set_engine_config(mut self, engine: EngineConfig) -> Self {
        self.engine = Some(engine);
        self
    }
}

/// Persistence capability for adapter records.
///
/// `save` fails with a duplicate-id, validation, or unreachable-backend
/// error; callers propagate all of them.
#[async_trait]
pub trait AdapterStorage: Send + Sync {
    async fn save(&self, entity: &AdapterEntity) -> BootstrapResult<()>;
}
