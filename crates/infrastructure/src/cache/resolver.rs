use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::environment::CacheEnvironment;
use super::wiring::{AuxiliaryWiring, ResourceProbe};
use super::{CacheBackend, FORM_REGION, REDIS_INTERFACE, REDIS_REGIONS};

/// How the platform's long-lived cache connection reaches the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub interface: String,
    pub host: String,
    pub port: u16,
}

/// Outcome of one cache backend resolution.
///
/// Constructed fresh per invocation, immutable once returned, consumed by
/// the settings-application step and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub connection: Option<ConnectionConfig>,
    pub region_assignment: BTreeMap<String, CacheBackend>,
    pub auxiliary_wiring: Option<AuxiliaryWiring>,
}

impl ResolutionResult {
    /// Full fallback: the platform keeps whatever cache configuration it
    /// already has, typically database-backed.
    pub fn fallback() -> Self {
        Self {
            connection: None,
            region_assignment: BTreeMap::new(),
            auxiliary_wiring: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.connection.is_none()
            && self.region_assignment.is_empty()
            && self.auxiliary_wiring.is_none()
    }
}

/// Decides which cache backend serves which region.
///
/// Stateless beyond the injected resource capability; resolution runs once
/// per process bootstrap and concurrent calls share no mutable state.
pub struct CacheBackendResolver {
    resources: Arc<dyn ResourceProbe>,
}

impl CacheBackendResolver {
    pub fn new(resources: Arc<dyn ResourceProbe>) -> Self {
        Self { resources }
    }

    /// Resolve the cache wiring for the captured environment.
    ///
    /// A missing client or a failed probe is the designed degraded mode and
    /// yields an empty result; only a successful probe emits wiring. The
    /// `form` region is pinned to the database backend whenever wiring is
    /// emitted at all.
    pub fn resolve(&self, env: &CacheEnvironment) -> ResolutionResult {
        if !env.client_available {
            debug!("Redis client module not available, keeping platform cache defaults");
            return ResolutionResult::fallback();
        }

        if !env.probe_succeeded {
            return ResolutionResult::fallback();
        }

        let mut region_assignment = BTreeMap::new();
        for region in REDIS_REGIONS {
            region_assignment.insert(region.to_string(), CacheBackend::Redis);
        }
        region_assignment.insert(FORM_REGION.to_string(), CacheBackend::Database);

        let wiring = AuxiliaryWiring::discover(self.resources.as_ref());
        info!(
            "Using Redis cache backend at {}:{} ({} container yaml(s), {} classloader registration(s))",
            env.host,
            env.port,
            wiring.container_yamls.len(),
            wiring.psr4.len()
        );

        ResolutionResult {
            connection: Some(ConnectionConfig {
                interface: REDIS_INTERFACE.to_string(),
                host: env.host.clone(),
                port: env.port,
            }),
            region_assignment,
            auxiliary_wiring: Some(wiring),
        }
    }
}
