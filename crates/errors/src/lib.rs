use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("adapter already exists: {id}")]
    AdapterExists { id: String },
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;

impl BootstrapError {
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn adapter_exists<S: Into<String>>(id: S) -> Self {
        Self::AdapterExists { id: id.into() }
    }
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
    pub fn storage_error<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
    pub fn network_error<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Every adapter-domain error aborts the invoking process; cache-domain
    /// unavailability never reaches this type at all. Fatal here means the
    /// record itself is wrong and re-running the script cannot fix it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BootstrapError::Configuration(_)
                | BootstrapError::AdapterExists { .. }
                | BootstrapError::Validation(_)
                | BootstrapError::Serialization(_)
                | BootstrapError::Internal(_)
        )
    }

    /// A supervised re-run may succeed once the backend is reachable again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BootstrapError::Storage(_) | BootstrapError::Network(_))
    }

    pub fn user_message(&self) -> &str {
        match self {
            BootstrapError::Configuration(_) => "The bootstrap configuration is invalid",
            BootstrapError::AdapterExists { .. } => "The adapter record has already been created",
            BootstrapError::Validation(_) => "The adapter record failed platform validation",
            BootstrapError::Storage(_) => "The platform entity storage rejected the request",
            BootstrapError::Network(_) => "The platform entity API is unreachable",
            BootstrapError::Serialization(_) => "The adapter payload could not be serialized",
            BootstrapError::Internal(_) => "An internal error occurred",
        }
    }
}

#[cfg(test)]
mod tests;
