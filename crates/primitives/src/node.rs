use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Platform event attached to user interaction callbacks (clicks, key presses).
///
/// The registry never inspects it; handlers downcast to whatever the engine
/// delivers.
pub type NativeEvent = dyn Any;

/// Read access to a content node owned by the rich-text engine.
///
/// Nodes are borrowed for the duration of a single callback and must not be
/// retained afterwards.
pub trait ContentNode {
	/// Reads a named attribute, returning `None` when it is unset.
	fn attribute(&self, name: &str) -> Option<String>;
}

impl<S: BuildHasher> ContentNode for HashMap<String, String, S> {
	fn attribute(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

impl ContentNode for BTreeMap<String, String> {
	fn attribute(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}
