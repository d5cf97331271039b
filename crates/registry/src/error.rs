use std::path::PathBuf;

/// Why a name was refused by [`define`](crate::AnnotationRegistry::define).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameReason {
	/// No key, or an empty one.
	Missing,
	/// The key falls in a namespace owned by built-in controllers.
	ReservedNamespace(&'static str),
	/// The key is a short alias of a canonical key.
	ReservedAlias(&'static str),
	/// A controller is already registered under the key.
	Duplicate,
	/// Lookups for the key would route to a different controller.
	Unroutable,
}

impl std::fmt::Display for InvalidNameReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Missing => f.write_str("annotation name is missing"),
			Self::ReservedNamespace(ns) => write!(f, "the '{ns}' namespace is reserved"),
			Self::ReservedAlias(canonical) => write!(f, "reserved alias of '{canonical}'"),
			Self::Duplicate => f.write_str("already defined"),
			Self::Unroutable => f.write_str("lookups would route to another annotation"),
		}
	}
}

/// Errors raised by the annotation registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
	/// A custom annotation name was refused.
	#[error("not a valid annotation name{}: {reason}", name.as_ref().map(|n| format!(" '{n}'")).unwrap_or_default())]
	InvalidName {
		name: Option<String>,
		reason: InvalidNameReason,
	},

	/// A serialized style declaration could not be parsed.
	#[error("invalid style for annotation '{key}': {message}")]
	InvalidStyle { key: String, message: String },
}

impl AnnotationError {
	pub(crate) fn invalid_name(name: Option<&str>, reason: InvalidNameReason) -> Self {
		Self::InvalidName {
			name: name.map(str::to_string),
			reason,
		}
	}
}

/// Errors loading a registry configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

pub type Result<T, E = AnnotationError> = std::result::Result<T, E>;
