//! CSS-like style declarations for custom annotations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered CSS property to value map applied to the element a custom
/// annotation is painted into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDeclaration(IndexMap<String, String>);

impl StyleDeclaration {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a property, replacing any previous value for it.
	pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(property.into(), value.into());
		self
	}

	pub fn get(&self, property: &str) -> Option<&str> {
		self.0.get(property).map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Parses the serialized form: a JSON object whose values are strings,
	/// numbers or booleans. `null` values are skipped.
	pub fn parse(source: &str) -> Result<Self, String> {
		let value: serde_json::Value = serde_json::from_str(source).map_err(|e| e.to_string())?;
		let serde_json::Value::Object(map) = value else {
			return Err("style must be a JSON object".to_string());
		};

		let mut decl = IndexMap::with_capacity(map.len());
		for (property, value) in map {
			let value = match value {
				serde_json::Value::String(s) => s,
				serde_json::Value::Number(n) => n.to_string(),
				serde_json::Value::Bool(b) => b.to_string(),
				serde_json::Value::Null => continue,
				other => return Err(format!("property '{property}' has non-scalar value {other}")),
			};
			decl.insert(property, value);
		}
		Ok(Self(decl))
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleDeclaration {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// Style as supplied to `define`: either a declaration or its serialized
/// string form, which is parsed before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSource {
	Declaration(StyleDeclaration),
	Serialized(String),
}

impl StyleSource {
	pub fn into_declaration(self) -> Result<StyleDeclaration, String> {
		match self {
			Self::Declaration(decl) => Ok(decl),
			Self::Serialized(s) if s.trim().is_empty() => Ok(StyleDeclaration::new()),
			Self::Serialized(s) => StyleDeclaration::parse(&s),
		}
	}
}

impl Default for StyleSource {
	fn default() -> Self {
		Self::Declaration(StyleDeclaration::new())
	}
}

impl From<StyleDeclaration> for StyleSource {
	fn from(decl: StyleDeclaration) -> Self {
		Self::Declaration(decl)
	}
}

impl From<&str> for StyleSource {
	fn from(s: &str) -> Self {
		Self::Serialized(s.to_string())
	}
}

impl From<String> for StyleSource {
	fn from(s: String) -> Self {
		Self::Serialized(s)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parses_serialized_object_in_order() {
		let decl = StyleDeclaration::parse(r#"{"color": "red", "fontWeight": 700, "hidden": false}"#).unwrap();
		let props: Vec<_> = decl.iter().collect();
		assert_eq!(props, vec![("color", "red"), ("fontWeight", "700"), ("hidden", "false")]);
	}

	#[test]
	fn null_properties_are_skipped() {
		let decl = StyleDeclaration::parse(r#"{"color": null}"#).unwrap();
		assert!(decl.is_empty());
	}

	#[test]
	fn rejects_non_objects_and_nested_values() {
		assert!(StyleDeclaration::parse("[1, 2]").is_err());
		assert!(StyleDeclaration::parse(r#"{"border": {"width": 1}}"#).is_err());
		assert!(StyleDeclaration::parse("color: red").is_err());
	}

	#[test]
	fn blank_serialized_style_is_empty() {
		let decl = StyleSource::from("  ").into_declaration().unwrap();
		assert!(decl.is_empty());
	}

	#[test]
	fn declaration_source_passes_through() {
		let decl: StyleDeclaration = [("color", "blue")].into_iter().collect();
		let out = StyleSource::from(decl.clone()).into_declaration().unwrap();
		assert_eq!(out, decl);
	}
}
