//! The sink the engine calls into, and its single handler slot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use quire_primitives::{ContentNode, NativeEvent};

use crate::engine::AnnotationSink;
use crate::event::{AnnotationEvent, AnnotationEventKind, EventHandler};
use crate::names::SEPARATOR;
use crate::paragraph::{INDENT_ATTR, ParagraphBehaviour};

/// Attribute the rendering layer stamps with the painted annotation's key.
pub const PAINT_KEY_ATTR: &str = "data-annotation-key";
/// Attribute the rendering layer stamps with the painted annotation's value.
pub const PAINT_VALUE_ATTR: &str = "data-annotation-value";

/// Shared switch that silences every adapter of a registry.
///
/// Checked on each dispatch, so handlers stay attached while muted.
#[derive(Debug, Clone, Default)]
pub struct MuteSwitch(Arc<AtomicBool>);

impl MuteSwitch {
	pub fn set(&self, muted: bool) {
		self.0.store(muted, Ordering::Release);
	}

	pub fn is_muted(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}
}

/// Where an adapter reads the annotation value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueSource {
	Paragraph(ParagraphBehaviour),
	Indent,
	/// Painted text annotations, for a key or a whole family.
	Painted,
}

/// Dispatch adapter for one annotation controller.
///
/// Idle while no handler is attached; callbacks are then dropped. While a
/// handler is attached and the registry is not muted, every callback becomes
/// exactly one synchronous handler call.
pub struct EventAdapter {
	key: Box<str>,
	source: ValueSource,
	handler: RwLock<Option<EventHandler>>,
	mute: MuteSwitch,
}

impl EventAdapter {
	pub(crate) fn new(key: &str, source: ValueSource, mute: MuteSwitch) -> Self {
		Self {
			key: key.into(),
			source,
			handler: RwLock::new(None),
			mute,
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Replaces the handler. The displaced handler is not notified.
	pub(crate) fn set_handler(&self, handler: EventHandler) {
		*self.handler.write() = Some(handler);
	}

	pub(crate) fn clear_handler(&self) {
		self.handler.write().take();
	}

	pub fn has_handler(&self) -> bool {
		self.handler.read().is_some()
	}

	fn dispatch(&self, kind: AnnotationEventKind, node: &dyn ContentNode, native: Option<&NativeEvent>) {
		if self.mute.is_muted() {
			return;
		}
		// Clone out of the lock so the handler may replace itself.
		let Some(handler) = self.handler.read().clone() else {
			return;
		};

		let (key, value) = self.read(node);
		tracing::trace!(key = %key, %kind, value = ?value, "annotation event");

		let event = AnnotationEvent {
			kind,
			key,
			value,
			node,
			native,
		};
		handler(&event);
	}

	fn read(&self, node: &dyn ContentNode) -> (String, Option<String>) {
		match self.source {
			ValueSource::Paragraph(behaviour) => (self.key.to_string(), behaviour.read_value(node)),
			ValueSource::Indent => (self.key.to_string(), node.attribute(INDENT_ATTR)),
			ValueSource::Painted => {
				let key = node
					.attribute(PAINT_KEY_ATTR)
					.filter(|painted| self.owns(painted))
					.unwrap_or_else(|| self.key.to_string());
				(key, node.attribute(PAINT_VALUE_ATTR))
			}
		}
	}

	/// True for the adapter's own key and keys beneath it.
	fn owns(&self, key: &str) -> bool {
		key.strip_prefix(&*self.key)
			.is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
	}
}

impl AnnotationSink for EventAdapter {
	fn on_added(&self, node: &dyn ContentNode) {
		self.dispatch(AnnotationEventKind::Added, node, None);
	}

	fn on_mutated(&self, node: &dyn ContentNode) {
		self.dispatch(AnnotationEventKind::Mutated, node, None);
	}

	fn on_removed(&self, node: &dyn ContentNode) {
		self.dispatch(AnnotationEventKind::Removed, node, None);
	}

	fn on_event(&self, node: &dyn ContentNode, event: &NativeEvent) {
		self.dispatch(AnnotationEventKind::UserEvent, node, Some(event));
	}
}

impl std::fmt::Debug for EventAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventAdapter")
			.field("key", &self.key)
			.field("source", &self.source)
			.field("attached", &self.has_handler())
			.field("muted", &self.mute.is_muted())
			.finish()
	}
}
