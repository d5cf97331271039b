use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::error::{AnnotationError, InvalidNameReason};
use crate::registry::AnnotationRegistry;
use crate::style::StyleDeclaration;

const SAMPLE: &str = r#"
muted = true

[[annotation]]
key = "mention"
class = "mention"
style = { color = "blue", fontWeight = "bold" }

[[annotation]]
key = "mark"
style = '{"backgroundColor": "yellow"}'

[[annotation]]
key = "color"
"#;

#[test]
fn parses_both_style_forms() {
	let config = RegistryConfig::from_toml_str(SAMPLE).unwrap();

	assert!(config.muted);
	assert_eq!(config.annotations.len(), 3);
	assert_eq!(
		config.annotations[0].style,
		StyleSource::Declaration([("color", "blue"), ("fontWeight", "bold")].into_iter().collect())
	);
	assert_eq!(
		config.annotations[1].style,
		StyleSource::Serialized(r#"{"backgroundColor": "yellow"}"#.to_string())
	);
	assert_eq!(config.annotations[2].style, StyleSource::Declaration(StyleDeclaration::new()));
	assert_eq!(config.annotations[1].class, "");
}

#[test]
fn empty_config_is_default() {
	assert_eq!(RegistryConfig::from_toml_str("").unwrap(), RegistryConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
	let err = RegistryConfig::from_toml_str("volume = 11").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn apply_defines_and_collects_failures() {
	let reg = AnnotationRegistry::headless();
	let config = RegistryConfig::from_toml_str(SAMPLE).unwrap();

	let report = reg.apply_config(&config);

	assert_eq!(report.defined, vec!["mention".to_string(), "mark".to_string()]);
	assert_eq!(
		report.errors,
		vec![AnnotationError::InvalidName {
			name: Some("color".to_string()),
			reason: InvalidNameReason::ReservedAlias("style/color"),
		}]
	);
	assert!(!report.is_clean());
	assert!(reg.get("mention").is_some());
	assert!(reg.is_muted());
}

#[test]
fn missing_key_is_reported_as_missing_name() {
	let reg = AnnotationRegistry::headless();
	let config = RegistryConfig::from_toml_str("[[annotation]]\nclass = \"x\"\n").unwrap();

	let report = reg.apply_config(&config);

	assert_eq!(
		report.errors,
		vec![AnnotationError::InvalidName {
			name: None,
			reason: InvalidNameReason::Missing,
		}]
	);
}

#[test]
fn loads_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SAMPLE.as_bytes()).unwrap();

	let config = RegistryConfig::load(file.path()).unwrap();
	assert_eq!(config.annotations[0].key, "mention");
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = RegistryConfig::load(&dir.path().join("absent.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}
