//! Annotation controllers: one per canonical key or key family.

use std::sync::Arc;

use indexmap::IndexMap;
use quire_primitives::TextRange;

mod adapter;

pub use adapter::{EventAdapter, MuteSwitch, PAINT_KEY_ATTR, PAINT_VALUE_ATTR};
pub(crate) use adapter::ValueSource;

use crate::event::{AnnotationEvent, EventHandler};
use crate::paragraph::{AttributeUpdate, Attributes, ID_ATTR, IndentAction, LineStyle, ParagraphBehaviour};

/// Value name that selects a controller's fallback style.
pub const DEFAULT_VALUE: &str = "default";

/// Computes extra attributes when a value is applied over a range.
pub type AttributeGenerator = Arc<dyn Fn(TextRange, &str) -> Attributes + Send + Sync>;

/// Generates an addressable `id` for heading paragraphs from the current
/// time and the range bounds.
///
/// Collisions need two applications over the same range within the same
/// millisecond.
pub fn header_id_generator() -> AttributeGenerator {
	Arc::new(|range: TextRange, _value: &str| {
		let now = chrono::Utc::now().timestamp_millis();
		let id = format!("{now}-{}-{}", range.start, range.end);
		Attributes::from([(ID_ATTR.to_string(), id)])
	})
}

/// Configuration shape of a controller.
pub enum ControllerKind {
	/// Paragraph annotation with a discrete set of values.
	Paragraph {
		behaviour: ParagraphBehaviour,
		styles: IndexMap<Box<str>, LineStyle>,
		generator: Option<AttributeGenerator>,
	},
	/// Paragraph indentation, driven by named actions.
	Indent {
		actions: IndexMap<Box<str>, IndentAction>,
		/// Applied when no value is given.
		reset: IndentAction,
	},
	/// Free-form text annotation (style family, links, custom annotations).
	Generic,
}

impl std::fmt::Debug for ControllerKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Paragraph {
				behaviour,
				styles,
				generator,
			} => f
				.debug_struct("Paragraph")
				.field("behaviour", behaviour)
				.field("values", &styles.keys().collect::<Vec<_>>())
				.field("generator", &generator.is_some())
				.finish(),
			Self::Indent { actions, reset } => f.debug_struct("Indent").field("actions", actions).field("reset", reset).finish(),
			Self::Generic => f.write_str("Generic"),
		}
	}
}

/// Owns one annotation topic: its legal values, and the dispatch adapter
/// the engine reports changes through.
#[derive(Debug)]
pub struct AnnotationController {
	key: Box<str>,
	kind: ControllerKind,
	adapter: Arc<EventAdapter>,
}

impl AnnotationController {
	pub(crate) fn paragraph(
		key: &str,
		behaviour: ParagraphBehaviour,
		styles: IndexMap<Box<str>, LineStyle>,
		generator: Option<AttributeGenerator>,
		mute: MuteSwitch,
	) -> Self {
		Self::with_kind(
			key,
			ControllerKind::Paragraph {
				behaviour,
				styles,
				generator,
			},
			ValueSource::Paragraph(behaviour),
			mute,
		)
	}

	pub(crate) fn indent(key: &str, actions: IndexMap<Box<str>, IndentAction>, reset: IndentAction, mute: MuteSwitch) -> Self {
		Self::with_kind(key, ControllerKind::Indent { actions, reset }, ValueSource::Indent, mute)
	}

	pub(crate) fn generic(key: &str, mute: MuteSwitch) -> Self {
		Self::with_kind(key, ControllerKind::Generic, ValueSource::Painted, mute)
	}

	fn with_kind(key: &str, kind: ControllerKind, source: ValueSource, mute: MuteSwitch) -> Self {
		Self {
			key: key.into(),
			kind,
			adapter: Arc::new(EventAdapter::new(key, source, mute)),
		}
	}

	/// Canonical key, or family prefix for generic families.
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn kind(&self) -> &ControllerKind {
		&self.kind
	}

	/// Engine behaviour category for paragraph-level controllers.
	pub fn behaviour(&self) -> Option<ParagraphBehaviour> {
		match &self.kind {
			ControllerKind::Paragraph { behaviour, .. } => Some(*behaviour),
			ControllerKind::Indent { .. } => Some(ParagraphBehaviour::Default),
			ControllerKind::Generic => None,
		}
	}

	pub fn is_paragraph(&self) -> bool {
		self.behaviour().is_some()
	}

	/// Discrete value names, in definition order. Empty for free-form annotations.
	pub fn values(&self) -> Vec<&str> {
		match &self.kind {
			ControllerKind::Paragraph { styles, .. } => styles.keys().map(|k| &**k).collect(),
			ControllerKind::Indent { actions, .. } => actions.keys().map(|k| &**k).collect(),
			ControllerKind::Generic => Vec::new(),
		}
	}

	/// Line style for a value. `None` selects the `default` entry.
	pub fn style(&self, value: Option<&str>) -> Option<&LineStyle> {
		let ControllerKind::Paragraph { styles, .. } = &self.kind else {
			return None;
		};
		styles.get(value.unwrap_or(DEFAULT_VALUE))
	}

	/// Indent action for a value. `None` selects the reset action.
	pub fn indent_action(&self, value: Option<&str>) -> Option<IndentAction> {
		let ControllerKind::Indent { actions, reset } = &self.kind else {
			return None;
		};
		match value {
			Some(v) => actions.get(v).copied(),
			None => Some(*reset),
		}
	}

	/// Extra attributes for applying `value` over `range`.
	pub fn generate_attributes(&self, range: TextRange, value: &str) -> Attributes {
		match &self.kind {
			ControllerKind::Paragraph {
				generator: Some(generate), ..
			} => generate(range, value),
			_ => Attributes::new(),
		}
	}

	/// Attribute writes the engine performs on every paragraph in `range` to
	/// set `value`. `None` clears the annotation back to its default.
	///
	/// Returns `None` for unknown values and for non-paragraph controllers.
	pub fn application(&self, range: TextRange, value: Option<&str>) -> Option<AttributeUpdate> {
		let style = self.style(value)?;
		let mut update = AttributeUpdate::new();
		style.write_to(&mut update);
		if let Some(value) = value {
			for (name, attr) in self.generate_attributes(range, value) {
				update.insert(name, Some(attr));
			}
		}
		Some(update)
	}

	/// Returns the adapter the engine registers as this topic's sink.
	///
	/// Always the same allocation, so the engine can deduplicate by pointer.
	pub fn text_event_handler(&self) -> Arc<EventAdapter> {
		Arc::clone(&self.adapter)
	}

	/// Attaches the single handler, silently replacing any previous one.
	///
	/// Takes effect for the next dispatch; a dispatch already running keeps
	/// calling the handler it started with.
	pub fn set_event_handler(&self, handler: EventHandler) {
		self.adapter.set_handler(handler);
	}

	/// Convenience for [`set_event_handler`](Self::set_event_handler) with a closure.
	pub fn on_event<F>(&self, handler: F)
	where
		F: Fn(&AnnotationEvent<'_>) + Send + Sync + 'static,
	{
		self.set_event_handler(Arc::new(handler));
	}

	pub fn unset_event_handler(&self) {
		self.adapter.clear_handler();
	}

	pub fn has_event_handler(&self) -> bool {
		self.adapter.has_handler()
	}
}
