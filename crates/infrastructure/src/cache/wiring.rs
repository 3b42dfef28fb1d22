use std::path::PathBuf;

use serde_json::{json, Value};

/// Capability query for host-environment resources.
///
/// Injected into wiring discovery so tests can simulate presence or absence
/// of the Redis module files without touching a real filesystem.
pub trait ResourceProbe: Send + Sync {
    fn resource_exists(&self, path: &str) -> bool;
}

/// Filesystem-backed resource probe rooted at the platform docroot.
pub struct FsResourceProbe {
    app_root: PathBuf,
}

impl FsResourceProbe {
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
        }
    }
}

impl ResourceProbe for FsResourceProbe {
    fn resource_exists(&self, path: &str) -> bool {
        self.app_root.join(path).exists()
    }
}

/// Contributed Redis module locations inside the platform docroot.
pub const REDIS_SERVICES_YML: &str = "modules/contrib/redis/redis.services.yml";
pub const REDIS_EXAMPLE_SERVICES_YML: &str = "modules/contrib/redis/example.services.yml";
pub const REDIS_MODULE_SRC: &str = "modules/contrib/redis/src";
pub const REDIS_PSR4_PREFIX: &str = "Drupal\\redis\\";

/// One classloader registration: namespace prefix mapped to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psr4Registration {
    pub prefix: String,
    pub path: String,
}

/// Optional registration entries emitted alongside a successful resolution.
///
/// The fragments are pass-through data for the platform runtime; resolution
/// only decides whether to emit them, never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryWiring {
    /// Extra service-definition files, in registration order.
    pub container_yamls: Vec<String>,
    pub psr4: Vec<Psr4Registration>,
    pub bootstrap_container_definition: Value,
}

impl AuxiliaryWiring {
    /// Assemble the wiring, listing only entries whose referenced resource
    /// exists. Each existence check is independent; a missing resource
    /// drops that one entry and nothing else.
    pub fn discover(resources: &dyn ResourceProbe) -> Self {
        let mut container_yamls = Vec::new();
        for path in [REDIS_SERVICES_YML, REDIS_EXAMPLE_SERVICES_YML] {
            if resources.resource_exists(path) {
                container_yamls.push(path.to_string());
            }
        }

        let mut psr4 = Vec::new();
        if resources.resource_exists(REDIS_MODULE_SRC) {
            psr4.push(Psr4Registration {
                prefix: REDIS_PSR4_PREFIX.to_string(),
                path: REDIS_MODULE_SRC.to_string(),
            });
        }

        Self {
            container_yamls,
            psr4,
            bootstrap_container_definition: bootstrap_container_definition(),
        }
    }
}

/// Container-definition fragment routing the bootstrap container itself
/// through Redis: client factory, backend factory, container cache bin,
/// checksum provider and serializer.
pub fn bootstrap_container_definition() -> Value {
    json!({
        "parameters": [],
        "services": {
            "redis.factory": {
                "class": "Drupal\\redis\\ClientFactory",
            },
            "cache.backend.redis": {
                "class": "Drupal\\redis\\Cache\\CacheBackendFactory",
                "arguments": [
                    "@redis.factory",
                    "@cache_tags_provider.container",
                    "@serialization.phpserialize",
                ],
            },
            "cache.container": {
                "class": "\\Drupal\\redis\\Cache\\PhpRedis",
                "factory": ["@cache.backend.redis", "get"],
                "arguments": ["container"],
            },
            "cache_tags_provider.container": {
                "class": "Drupal\\redis\\Cache\\RedisCacheTagsChecksum",
                "arguments": ["@redis.factory"],
            },
            "serialization.phpserialize": {
                "class": "Drupal\\Component\\Serialization\\PhpSerialize",
            },
        },
    })
}
