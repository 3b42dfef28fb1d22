use serde_json::{json, Map, Value};

use super::resolver::ResolutionResult;
use super::wiring::Psr4Registration;

/// Explicit configuration patch derived from a resolution result.
///
/// The resolver never mutates the host settings in place; it produces this
/// value and the deployment applies it in one step. `settings` holds the
/// nested key assignments (`redis.connection.*`, `cache.default`,
/// `cache.bins.*`, `bootstrap_container_definition`), `container_yamls`
/// carries the appendable sequence separately because application must
/// extend the existing list rather than replace it, and `psr4` maps onto
/// the classloader registration call.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPatch {
    pub settings: Value,
    pub container_yamls: Vec<String>,
    pub psr4: Vec<Psr4Registration>,
}

impl SettingsPatch {
    pub fn empty() -> Self {
        Self {
            settings: Value::Object(Map::new()),
            container_yamls: Vec::new(),
            psr4: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.settings.as_object().map_or(true, |map| map.is_empty())
            && self.container_yamls.is_empty()
            && self.psr4.is_empty()
    }

    /// Render a resolution result as a settings patch. A fallback
    /// resolution yields an empty patch.
    pub fn from_resolution(result: &ResolutionResult) -> Self {
        let mut patch = Self::empty();

        if let Some(connection) = &result.connection {
            patch.settings["redis"] = json!({
                "connection": {
                    "interface": connection.interface,
                    "host": connection.host,
                    "port": connection.port,
                }
            });
        }

        if !result.region_assignment.is_empty() {
            let mut bins = Map::new();
            let mut cache = Map::new();
            for (region, backend) in &result.region_assignment {
                if region == "default" {
                    cache.insert("default".to_string(), json!(backend.service_id()));
                } else {
                    bins.insert(region.clone(), json!(backend.service_id()));
                }
            }
            if !bins.is_empty() {
                cache.insert("bins".to_string(), Value::Object(bins));
            }
            patch.settings["cache"] = Value::Object(cache);
        }

        if let Some(wiring) = &result.auxiliary_wiring {
            patch.settings["bootstrap_container_definition"] =
                wiring.bootstrap_container_definition.clone();
            patch.container_yamls = wiring.container_yamls.clone();
            patch.psr4 = wiring.psr4.clone();
        }

        patch
    }

    /// Apply the patch onto an existing settings document.
    ///
    /// Nested objects are merged key by key, scalars overwrite, and the
    /// `container_yamls` sequence is appended to in patch order. An empty
    /// patch leaves the document untouched.
    pub fn merge_into(&self, document: &mut Value) {
        if !document.is_object() {
            *document = Value::Object(Map::new());
        }

        merge_value(document, &self.settings);

        if !self.container_yamls.is_empty() {
            let yamls = document
                .as_object_mut()
                .expect("settings document is an object")
                .entry("container_yamls")
                .or_insert_with(|| Value::Array(Vec::new()));
            if !yamls.is_array() {
                *yamls = Value::Array(Vec::new());
            }
            let list = yamls.as_array_mut().expect("container_yamls is an array");
            for path in &self.container_yamls {
                list.push(json!(path));
            }
        }
    }

    /// Render the standalone document the CLI emits: the settings mapping
    /// plus the classloader registrations the applying side must perform.
    pub fn to_json(&self) -> Value {
        let mut settings = Value::Object(Map::new());
        self.merge_into(&mut settings);

        json!({
            "settings": settings,
            "psr4": self
                .psr4
                .iter()
                .map(|reg| json!({ "prefix": reg.prefix, "path": reg.path }))
                .collect::<Vec<_>>(),
        })
    }
}

fn merge_value(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                merge_value(
                    target_map.entry(key.clone()).or_insert(Value::Null),
                    value,
                );
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::resolver::{CacheBackendResolver, ConnectionConfig};
    use crate::cache::wiring::{AuxiliaryWiring, ResourceProbe, REDIS_SERVICES_YML};
    use crate::cache::{CacheBackend, CacheEnvironment};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct AllResources;

    impl ResourceProbe for AllResources {
        fn resource_exists(&self, _path: &str) -> bool {
            true
        }
    }

    fn resolved() -> ResolutionResult {
        let resolver = CacheBackendResolver::new(Arc::new(AllResources));
        resolver.resolve(&CacheEnvironment {
            client_available: true,
            host: "redis".to_string(),
            port: 6379,
            connect_timeout_seconds: 2,
            probe_succeeded: true,
        })
    }

    #[test]
    fn test_fallback_resolution_renders_empty_patch() {
        let patch = SettingsPatch::from_resolution(&ResolutionResult::fallback());
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_key_layout() {
        let patch = SettingsPatch::from_resolution(&resolved());

        assert_eq!(
            patch.settings["redis"]["connection"]["interface"],
            json!("PhpRedis")
        );
        assert_eq!(patch.settings["redis"]["connection"]["host"], json!("redis"));
        assert_eq!(patch.settings["redis"]["connection"]["port"], json!(6379));
        assert_eq!(
            patch.settings["cache"]["default"],
            json!("cache.backend.redis")
        );
        assert_eq!(
            patch.settings["cache"]["bins"]["form"],
            json!("cache.backend.database")
        );
        assert_eq!(
            patch.settings["cache"]["bins"]["render"],
            json!("cache.backend.redis")
        );
        assert!(patch.settings["bootstrap_container_definition"]["services"].is_object());
        assert_eq!(patch.container_yamls.len(), 2);
        assert_eq!(patch.psr4.len(), 1);
    }

    #[test]
    fn test_merge_appends_container_yamls() {
        let patch = SettingsPatch::from_resolution(&resolved());
        let mut document = json!({
            "container_yamls": ["sites/default/services.yml"],
            "cache": { "default": "cache.backend.database" },
        });

        patch.merge_into(&mut document);

        let yamls = document["container_yamls"].as_array().unwrap();
        assert_eq!(yamls[0], json!("sites/default/services.yml"));
        assert_eq!(yamls[1], json!(REDIS_SERVICES_YML));
        assert_eq!(yamls.len(), 3);
        // Existing scalar assignments are overwritten, not merged around.
        assert_eq!(document["cache"]["default"], json!("cache.backend.redis"));
    }

    #[test]
    fn test_empty_patch_leaves_document_untouched() {
        let patch = SettingsPatch::from_resolution(&ResolutionResult::fallback());
        let mut document = json!({ "cache": { "default": "cache.backend.database" } });
        let before = document.clone();

        patch.merge_into(&mut document);
        assert_eq!(document, before);
    }

    #[test]
    fn test_connection_only_patch() {
        let result = ResolutionResult {
            connection: Some(ConnectionConfig {
                interface: "PhpRedis".to_string(),
                host: "cache-01".to_string(),
                port: 6380,
            }),
            region_assignment: BTreeMap::from([(
                "default".to_string(),
                CacheBackend::Redis,
            )]),
            auxiliary_wiring: Some(AuxiliaryWiring {
                container_yamls: Vec::new(),
                psr4: Vec::new(),
                bootstrap_container_definition: json!({}),
            }),
        };

        let patch = SettingsPatch::from_resolution(&result);
        assert_eq!(patch.settings["cache"]["default"], json!("cache.backend.redis"));
        assert!(patch.settings["cache"].get("bins").is_none());
        assert_eq!(
            patch.settings["redis"]["connection"]["host"],
            json!("cache-01")
        );
    }

    #[test]
    fn test_to_json_document_shape() {
        let patch = SettingsPatch::from_resolution(&resolved());
        let document = patch.to_json();

        assert!(document["settings"]["redis"]["connection"].is_object());
        assert_eq!(
            document["settings"]["container_yamls"].as_array().unwrap().len(),
            2
        );
        let psr4 = document["psr4"].as_array().unwrap();
        assert_eq!(psr4[0]["prefix"], json!("Drupal\\redis\\"));
        assert_eq!(psr4[0]["path"], json!("modules/contrib/redis/src"));
    }
}
