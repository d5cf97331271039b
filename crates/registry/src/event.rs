//! The event record handed to annotation handlers.

use std::sync::Arc;

use quire_primitives::{ContentNode, NativeEvent};

/// What happened to the annotated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationEventKind {
	/// Annotated content entered the document.
	Added,
	/// Annotated content changed.
	Mutated,
	/// Annotated content left the document.
	Removed,
	/// The user interacted with annotated content.
	UserEvent,
}

impl AnnotationEventKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Added => "added",
			Self::Mutated => "mutated",
			Self::Removed => "removed",
			Self::UserEvent => "event",
		}
	}
}

impl std::fmt::Display for AnnotationEventKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One dispatch to a handler.
///
/// The node and native event are borrowed from the engine callback and are
/// only valid for the duration of the handler call.
pub struct AnnotationEvent<'a> {
	pub kind: AnnotationEventKind,
	/// Canonical key of the annotation.
	pub key: String,
	/// Annotation value read from the node, `None` when unset.
	pub value: Option<String>,
	pub node: &'a dyn ContentNode,
	/// Present only for [`AnnotationEventKind::UserEvent`].
	pub native: Option<&'a NativeEvent>,
}

impl AnnotationEvent<'_> {
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Reads an attribute from the affected node.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.node.attribute(name)
	}
}

impl std::fmt::Debug for AnnotationEvent<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnnotationEvent")
			.field("kind", &self.kind)
			.field("key", &self.key)
			.field("value", &self.value)
			.field("native", &self.native.is_some())
			.finish_non_exhaustive()
	}
}

/// The single external consumer of one annotation's events.
pub type EventHandler = Arc<dyn Fn(&AnnotationEvent<'_>) + Send + Sync>;
