//! Tests for sensitivity configuration loading
//!
//! These tests verify:
//! - YAML parsing with and without an explicit target
//! - Utility function selectors and risk tolerance validation
//! - File loading and I/O failures

use std::io::Write;

use crate::config::SensitivityConfig;
use crate::error::ConfigError;
use crate::model::{NodeId, UtilityFn};

#[test]
fn test_from_yaml_full() {
    let yaml = r#"
utility_fn: log
risk_tolerance: 250.0
target: 3
"#;
    let config = SensitivityConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.utility_fn, UtilityFn::Logarithmic);
    assert_eq!(config.risk_tolerance, 250.0);
    assert_eq!(config.target, NodeId(3));
}

/// A missing target means the root node
#[test]
fn test_from_yaml_default_target() {
    let config = SensitivityConfig::from_yaml("utility_fn: exp\nrisk_tolerance: 1000.0\n").unwrap();
    assert_eq!(
        config,
        SensitivityConfig::new(UtilityFn::Exponential, 1000.0)
    );
    assert_eq!(config.target, NodeId::ROOT);
}

#[test]
fn test_from_yaml_long_selector_names() {
    let config =
        SensitivityConfig::from_yaml("utility_fn: Exponential\nrisk_tolerance: 75.0\n").unwrap();
    assert_eq!(config.utility_fn, UtilityFn::Exponential);

    let config =
        SensitivityConfig::from_yaml("utility_fn: logarithmic\nrisk_tolerance: 75.0\n").unwrap();
    assert_eq!(config.utility_fn, UtilityFn::Logarithmic);
}

#[test]
fn test_unknown_utility_fn() {
    let err =
        SensitivityConfig::from_yaml("utility_fn: quadratic\nrisk_tolerance: 75.0\n").unwrap_err();
    assert_eq!(err, ConfigError::UnknownUtilityFn("quadratic".to_string()));
    assert_eq!(
        err.to_string(),
        "unknown utility function 'quadratic' (expected 'exp' or 'log')"
    );
}

#[test]
fn test_invalid_risk_tolerance() {
    for yaml in [
        "utility_fn: exp\nrisk_tolerance: 0.0\n",
        "utility_fn: exp\nrisk_tolerance: -5.0\n",
    ] {
        let err = SensitivityConfig::from_yaml(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidRiskTolerance(_)),
            "unexpected error for {yaml:?}: {err}"
        );
    }

    assert!(
        SensitivityConfig::new(UtilityFn::Exponential, f64::NAN)
            .validate()
            .is_err()
    );
    assert!(
        SensitivityConfig::new(UtilityFn::Logarithmic, 1e-3)
            .validate()
            .is_ok()
    );
}

#[test]
fn test_malformed_yaml() {
    for yaml in [
        "risk_tolerance: 75.0\n",
        "utility_fn: exp\n",
        "utility_fn: exp\nrisk_tolerance: lots\n",
        "utility_fn: [exp, log]\nrisk_tolerance: 75.0\n",
    ] {
        let err = SensitivityConfig::from_yaml(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse(_)),
            "unexpected error for {yaml:?}: {err}"
        );
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "utility_fn: exp").unwrap();
    writeln!(file, "risk_tolerance: 75.0").unwrap();
    writeln!(file, "target: 1").unwrap();
    file.flush().unwrap();

    let config = SensitivityConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        SensitivityConfig::new(UtilityFn::Exponential, 75.0).with_target(NodeId(1))
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SensitivityConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("failed to read configuration"));
}

/// Serialized configs read back through the same validation
#[test]
fn test_json_round_trip() {
    let config = SensitivityConfig::new(UtilityFn::Logarithmic, 500.0).with_target(NodeId(2));
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(
        json,
        r#"{"utility_fn":"log","risk_tolerance":500.0,"target":2}"#
    );

    let parsed: SensitivityConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let invalid = r#"{"utility_fn":"exp","risk_tolerance":-1.0}"#;
    assert!(serde_json::from_str::<SensitivityConfig>(invalid).is_err());
}
