//! Registry configuration.
//!
//! Custom annotations can be declared in a TOML file instead of calling
//! [`define`](crate::AnnotationRegistry::define) from code:
//!
//! ```toml
//! muted = false
//!
//! [[annotation]]
//! key = "mention"
//! class = "mention"
//! style = { color = "blue" }
//!
//! [[annotation]]
//! key = "mark"
//! style = '{"backgroundColor": "yellow"}'
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::style::StyleSource;

mod apply;

pub use apply::ConfigApplyReport;

/// One custom annotation to define.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomAnnotation {
	/// Annotation key. An absent key is reported as an invalid name.
	#[serde(default)]
	pub key: String,
	/// CSS class for painted elements.
	#[serde(default)]
	pub class: String,
	#[serde(default)]
	pub style: StyleSource,
}

/// Registry configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
	/// Initial state of the mute switch.
	#[serde(default)]
	pub muted: bool,
	#[serde(default, rename = "annotation")]
	pub annotations: Vec<CustomAnnotation>,
}

impl RegistryConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}
}

#[cfg(test)]
mod tests;
