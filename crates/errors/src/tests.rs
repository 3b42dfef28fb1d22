use crate::*;

#[test]
fn test_bootstrap_error_display() {
    let config_error = BootstrapError::Configuration("missing host".to_string());
    assert_eq!(config_error.to_string(), "configuration error: missing host");

    let exists_error = BootstrapError::AdapterExists {
        id: "default".to_string(),
    };
    assert_eq!(exists_error.to_string(), "adapter already exists: default");

    let validation_error = BootstrapError::Validation("label required".to_string());
    assert_eq!(
        validation_error.to_string(),
        "validation failed: label required"
    );

    let network_error = BootstrapError::Network("connection refused".to_string());
    assert_eq!(network_error.to_string(), "network error: connection refused");
}

#[test]
fn test_helper_constructors() {
    assert!(matches!(
        BootstrapError::config_error("bad port"),
        BootstrapError::Configuration(_)
    ));
    assert!(matches!(
        BootstrapError::adapter_exists("default"),
        BootstrapError::AdapterExists { .. }
    ));
    assert!(matches!(
        BootstrapError::storage_error("write failed"),
        BootstrapError::Storage(_)
    ));
    assert!(matches!(
        BootstrapError::network_error("timeout"),
        BootstrapError::Network(_)
    ));
}

#[test]
fn test_fatality_classification() {
    assert!(BootstrapError::adapter_exists("default").is_fatal());
    assert!(BootstrapError::validation_error("bad field").is_fatal());
    assert!(BootstrapError::config_error("bad value").is_fatal());
    assert!(!BootstrapError::storage_error("backend down").is_fatal());
    assert!(!BootstrapError::network_error("refused").is_fatal());
}

#[test]
fn test_retryable_classification() {
    assert!(BootstrapError::storage_error("backend down").is_retryable());
    assert!(BootstrapError::network_error("refused").is_retryable());
    assert!(!BootstrapError::adapter_exists("default").is_retryable());
    assert!(!BootstrapError::validation_error("bad field").is_retryable());
}

#[test]
fn test_user_messages() {
    let error = BootstrapError::adapter_exists("default");
    assert_eq!(
        error.user_message(),
        "The adapter record has already been created"
    );

    let error = BootstrapError::Network("refused".to_string());
    assert_eq!(error.user_message(), "The platform entity API is unreachable");
}
