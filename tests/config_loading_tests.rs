//! Integration tests for loading the validation configuration

use candle_store::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
postal_code:
  min: 100
  max: 999
date_format: "%Y/%m/%d"
"#
    )
    .unwrap();

    let config = ValidationConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.postal_code, Bounds::new(100, 999));
    assert_eq!(config.date_format, "%Y/%m/%d");
    // Unspecified keys keep their defaults
    assert_eq!(config.contact_digit, Bounds::new(1, 10));
}

#[test]
fn test_loaded_config_drives_factory() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "postal_code:\n  min: 100\n  max: 999").unwrap();

    let factory = Factory::new(ValidationConfig::from_yaml_file(file.path()).unwrap());

    assert!(factory.create_address("1 Main", "Gaborone", 500, "Botswana").is_ok());
    let err = factory
        .create_address("1 Main", "Gaborone", 1000, "Botswana")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_loaded_contact_digit_bounds_drive_factory() {
    let yaml = "contact_digit:\n  min: 0\n  max: 9\n";
    let factory = Factory::new(ValidationConfig::from_yaml_str(yaml).unwrap());

    assert!(factory.is_valid_contact_digit("0"));
    assert!(!factory.is_valid_contact_digit("10"));
}

#[test]
fn test_empty_mapping_gives_defaults() {
    assert_eq!(
        ValidationConfig::from_yaml_str("{}").unwrap(),
        ValidationConfig::default()
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ValidationConfig::from_yaml_file(dir.path().join("absent.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_inverted_bounds_rejected() {
    let yaml = r#"
contact_digit:
  min: 10
  max: 1
"#;
    let err = ValidationConfig::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("contact_digit"));
}

#[test]
fn test_blank_date_format_rejected() {
    assert!(ValidationConfig::from_yaml_str("date_format: \" \"").is_err());
}
