//! Interfaces the hosting rich-text engine implements or calls.

use std::sync::Arc;

use quire_primitives::{ContentNode, NativeEvent};

use crate::paragraph::ParagraphBehaviour;
use crate::style::StyleDeclaration;

/// Callbacks the engine invokes for annotated content.
///
/// Implementations never fail; a node missing the relevant attributes is
/// reported with no value.
pub trait AnnotationSink: Send + Sync {
	fn on_added(&self, node: &dyn ContentNode);
	fn on_mutated(&self, node: &dyn ContentNode);
	fn on_removed(&self, node: &dyn ContentNode);
	fn on_event(&self, node: &dyn ContentNode, event: &NativeEvent);
}

/// Registration surface of the engine's rendering layer.
///
/// Sinks are identified by pointer; registering the same `Arc` twice must
/// not produce duplicate callbacks.
pub trait RenderHooks: Send + Sync {
	/// Routes paragraph callbacks for `behaviour` to `sink`. Several annotation
	/// keys may share a behaviour.
	fn register_paragraph_sink(&self, key: &str, behaviour: ParagraphBehaviour, sink: Arc<dyn AnnotationSink>);

	/// Routes callbacks for painted text annotations under `prefix` to `sink`.
	fn register_text_sink(&self, prefix: &str, sink: Arc<dyn AnnotationSink>);

	/// Registers a custom annotation renderer: painted elements get `class`
	/// and `style`, and callbacks go to `sink`.
	fn register_custom_annotation(&self, key: &str, class: &str, style: &StyleDeclaration, sink: Arc<dyn AnnotationSink>);
}

/// Hooks for running the registry without a rendering layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl RenderHooks for NoopHooks {
	fn register_paragraph_sink(&self, _key: &str, _behaviour: ParagraphBehaviour, _sink: Arc<dyn AnnotationSink>) {}

	fn register_text_sink(&self, _prefix: &str, _sink: Arc<dyn AnnotationSink>) {}

	fn register_custom_annotation(&self, _key: &str, _class: &str, _style: &StyleDeclaration, _sink: Arc<dyn AnnotationSink>) {}
}
