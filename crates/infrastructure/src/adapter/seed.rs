use tracing::info;
use wisski_bootstrap_config::AdapterSeedConfig;
use wisski_bootstrap_errors::BootstrapResult;

use super::{AdapterEntity, AdapterStorage, EngineConfig};

/// Build the default adapter record from the seed configuration.
pub fn default_adapter(config: &AdapterSeedConfig) -> AdapterEntity {
    AdapterEntity::new(&config.id, &config.label, &config.description).set_engine_config(
        EngineConfig {
            id: config.engine_id.clone(),
            machine_name: config.machine_name.clone(),
            // No authentication header; GraphDB runs without credentials in
            // this deployment.
            header: String::new(),
            writeable: config.writable,
            is_preferred_local_store: config.is_preferred_local_store,
            read_url: config.read_url.clone(),
            write_url: config.write_url.clone(),
            is_federatable: config.is_federatable,
            default_graph: config.default_graph.clone(),
            same_as_properties: config.same_as_properties.clone(),
            ontology_graphs: config.ontology_graphs.clone(),
        },
    )
}

/// Create the default adapter record, once.
///
/// One attempt, no retry, and no error handling: the script is meant for
/// supervised one-time execution and a duplicate id, validation failure or
/// unreachable backend must propagate to the invoking shell.
pub async fn seed_default_adapter(
    storage: &dyn AdapterStorage,
    config: &AdapterSeedConfig,
) -> BootstrapResult<()> {
    let entity = default_adapter(config);
    info!(
        "Creating triple-store adapter {} ({})",
        entity.id, config.engine_id
    );
    storage.save(&entity).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wisski_bootstrap_errors::BootstrapError;

    /// In-memory adapter storage recording saved records.
    struct MockAdapterStorage {
        saved: Mutex<Vec<AdapterEntity>>,
        fail_with: Option<fn() -> BootstrapError>,
    }

    impl MockAdapterStorage {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(fail_with: fn() -> BootstrapError) -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_with: Some(fail_with),
            }
        }
    }

    #[async_trait]
    impl AdapterStorage for MockAdapterStorage {
        async fn save(&self, entity: &AdapterEntity) -> BootstrapResult<()> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            self.saved.lock().unwrap().push(entity.clone());
            Ok(())
        }
    }

    #[test]
    fn test_default_adapter_record() {
        let entity = default_adapter(&AdapterSeedConfig::default());

        assert_eq!(entity.id, "default");
        assert_eq!(entity.label, "Default");
        assert_eq!(entity.description, "Default SALZ-Adapter");

        let engine = entity.engine.unwrap();
        assert_eq!(engine.id, "sparql11_with_pb");
        assert_eq!(engine.machine_name, "default");
        assert_eq!(engine.header, "");
        assert!(engine.writeable);
        assert!(engine.is_preferred_local_store);
        assert!(engine.is_federatable);
        assert_eq!(engine.read_url, "http://graphdb:7200/repositories/default");
        assert_eq!(
            engine.write_url,
            "http://graphdb:7200/repositories/default/statements"
        );
        assert_eq!(
            engine.same_as_properties,
            vec!["http://www.w3.org/2002/07/owl#sameAs".to_string()]
        );
        assert!(engine.ontology_graphs.is_empty());
    }

    #[test]
    fn test_default_graph_is_passed_through_verbatim() {
        let config = AdapterSeedConfig {
            default_graph: Some("http://example.org/data/".to_string()),
            ..Default::default()
        };
        let engine = default_adapter(&config).engine.unwrap();
        assert_eq!(engine.default_graph.as_deref(), Some("http://example.org/data/"));
    }

    #[tokio::test]
    async fn test_seed_saves_exactly_one_record() {
        let storage = MockAdapterStorage::new();
        seed_default_adapter(&storage, &AdapterSeedConfig::default())
            .await
            .unwrap();

        let saved = storage.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "default");
    }

    #[tokio::test]
    async fn test_duplicate_id_propagates() {
        let storage =
            MockAdapterStorage::failing(|| BootstrapError::adapter_exists("default"));

        let result = seed_default_adapter(&storage, &AdapterSeedConfig::default()).await;
        assert!(matches!(
            result,
            Err(BootstrapError::AdapterExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let storage =
            MockAdapterStorage::failing(|| BootstrapError::storage_error("backend down"));

        let result = seed_default_adapter(&storage, &AdapterSeedConfig::default()).await;
        assert!(matches!(result, Err(BootstrapError::Storage(_))));
    }
}
