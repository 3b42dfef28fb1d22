//! Cache backend resolution for the platform bootstrap.
//!
//! Decides, once per process bootstrap, whether the external Redis cache
//! service should be wired into the platform's cache subsystem, and renders
//! the outcome as a settings patch the deployment applies in one step.

pub mod environment;
pub mod probe;
pub mod resolver;
pub mod settings;
pub mod wiring;

pub use environment::*;
pub use probe::*;
pub use resolver::*;
pub use settings::*;
pub use wiring::*;

/// Client library identifier the platform's Redis module expects in
/// `redis.connection.interface`.
pub const REDIS_INTERFACE: &str = "PhpRedis";

/// Cache backend a region can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CacheBackend {
    Redis,
    Database,
}

impl CacheBackend {
    /// Service id of the backend factory inside the platform container.
    pub fn service_id(&self) -> &'static str {
        match self {
            CacheBackend::Redis => "cache.backend.redis",
            CacheBackend::Database => "cache.backend.database",
        }
    }
}

/// Cache regions moved onto Redis when the probe succeeds. The `default`
/// region covers every bin without an explicit assignment.
pub const REDIS_REGIONS: [&str; 5] = ["default", "bootstrap", "render", "data", "discovery"];

/// The form region stays on the durable database backend unconditionally:
/// the platform requires it to survive external-cache unavailability.
pub const FORM_REGION: &str = "form";
