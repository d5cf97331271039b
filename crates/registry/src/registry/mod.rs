//! The annotation registry: name resolution, controller lookup and the
//! shared mute switch.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

mod builtins;

use crate::controller::{AnnotationController, MuteSwitch};
use crate::engine::{NoopHooks, RenderHooks};
use crate::error::{AnnotationError, InvalidNameReason, Result};
use crate::event::AnnotationEvent;
use crate::names::{self, LINK, PARAGRAPH, PARAGRAPH_HEADER, PARAGRAPH_INDENT, PARAGRAPH_LIST, PARAGRAPH_TEXT_ALIGN, STYLE};
use crate::style::StyleSource;

/// Keys of the controllers every registry starts with.
pub const BUILTIN_KEYS: &[&str] = &[PARAGRAPH_HEADER, PARAGRAPH_TEXT_ALIGN, PARAGRAPH_LIST, PARAGRAPH_INDENT, STYLE, LINK];

/// Directory of annotation controllers keyed by canonical name.
///
/// The controller set only grows: built-ins are created with the registry
/// and custom annotations are added by [`define`](Self::define). Handlers
/// attach and detach freely.
pub struct AnnotationRegistry {
	controllers: RwLock<HashMap<Box<str>, Arc<AnnotationController>>>,
	mute: MuteSwitch,
	hooks: Arc<dyn RenderHooks>,
	initialized: AtomicBool,
}

impl AnnotationRegistry {
	/// Creates a registry holding the built-in controllers.
	///
	/// Sinks are not registered with `hooks` until [`initialize`](Self::initialize).
	pub fn new(hooks: Arc<dyn RenderHooks>) -> Self {
		let mute = MuteSwitch::default();
		let controllers = builtins::all(&mute)
			.into_iter()
			.map(|c| (Box::from(c.key()), Arc::new(c)))
			.collect();

		Self {
			controllers: RwLock::new(controllers),
			mute,
			hooks,
			initialized: AtomicBool::new(false),
		}
	}

	/// Creates a registry with no rendering layer attached.
	pub fn headless() -> Self {
		Self::new(Arc::new(NoopHooks))
	}

	/// Registers the built-in controllers' sinks with the rendering layer.
	///
	/// Only the first call has any effect.
	pub fn initialize(&self) {
		if self.initialized.swap(true, Ordering::AcqRel) {
			return;
		}

		for &key in BUILTIN_KEYS {
			let Some(controller) = self.controllers.read().get(key).cloned() else {
				continue;
			};
			let sink = controller.text_event_handler();
			match controller.behaviour() {
				Some(behaviour) => self.hooks.register_paragraph_sink(key, behaviour, sink),
				None => self.hooks.register_text_sink(key, sink),
			}
		}
		tracing::debug!(count = BUILTIN_KEYS.len(), "registered built-in annotation sinks");
	}

	pub fn is_initialized(&self) -> bool {
		self.initialized.load(Ordering::Acquire)
	}

	/// Looks up the controller responsible for `key`.
	///
	/// Namespaced keys in family namespaces (`style/color`) route to the
	/// family controller; `paragraph/*` and `link/*` keys are looked up
	/// intact. Short aliases resolve to their canonical key first.
	pub fn get(&self, key: &str) -> Option<Arc<AnnotationController>> {
		let routed = names::route(key);
		let canonical = names::route(names::canonicalize(routed));
		self.controllers.read().get(canonical).cloned()
	}

	/// True if `key`, once canonicalized, is in the paragraph namespace.
	pub fn is_paragraph_annotation(&self, key: &str) -> bool {
		names::is_paragraph(key)
	}

	/// Registers a custom text annotation and its rendering.
	///
	/// Names in the `paragraph` or `style` namespaces, short aliases,
	/// already registered names and names that lookups would route
	/// elsewhere are refused with [`AnnotationError::InvalidName`].
	pub fn define(&self, key: &str, class: &str, style: impl Into<StyleSource>) -> Result<Arc<AnnotationController>> {
		check_name(key)?;

		let style = style.into().into_declaration().map_err(|message| AnnotationError::InvalidStyle {
			key: key.to_string(),
			message,
		})?;

		let controller = {
			let mut controllers = self.controllers.write();
			if controllers.contains_key(key) {
				return Err(AnnotationError::invalid_name(Some(key), InvalidNameReason::Duplicate));
			}
			let controller = Arc::new(AnnotationController::generic(key, self.mute.clone()));
			controllers.insert(Box::from(key), Arc::clone(&controller));
			controller
		};

		self.hooks
			.register_custom_annotation(key, class, &style, controller.text_event_handler());
		tracing::info!(key, class, properties = style.len(), "defined custom annotation");

		Ok(controller)
	}

	/// Attaches `handler` to the controller for `key`, replacing any previous
	/// handler. Unknown keys are ignored.
	///
	/// Returns whether a controller was found.
	pub fn set_handler<F>(&self, key: &str, handler: F) -> bool
	where
		F: Fn(&AnnotationEvent<'_>) + Send + Sync + 'static,
	{
		let Some(controller) = self.get(key) else {
			tracing::debug!(key, "no annotation controller; handler ignored");
			return false;
		};
		controller.on_event(handler);
		tracing::debug!(key, controller = controller.key(), "annotation handler attached");
		true
	}

	/// Detaches the handler for `key`. Unknown keys are ignored.
	pub fn unset_handler(&self, key: &str) -> bool {
		let Some(controller) = self.get(key) else {
			return false;
		};
		controller.unset_event_handler();
		tracing::debug!(key, controller = controller.key(), "annotation handler detached");
		true
	}

	/// Silences or restores event delivery for every controller at once.
	pub fn mute_handlers(&self, muted: bool) {
		self.mute.set(muted);
		tracing::debug!(muted, "annotation handlers mute switch");
	}

	pub fn is_muted(&self) -> bool {
		self.mute.is_muted()
	}

	/// Keys of every registered controller.
	pub fn keys(&self) -> BTreeSet<String> {
		self.controllers.read().keys().map(|k| k.to_string()).collect()
	}

	/// Every registered controller, ordered by key.
	pub fn controllers(&self) -> Vec<Arc<AnnotationController>> {
		let mut all: Vec<_> = self.controllers.read().values().cloned().collect();
		all.sort_by(|a, b| a.key().cmp(b.key()));
		all
	}
}

impl Default for AnnotationRegistry {
	fn default() -> Self {
		Self::headless()
	}
}

impl std::fmt::Debug for AnnotationRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnnotationRegistry")
			.field("keys", &self.keys())
			.field("muted", &self.is_muted())
			.field("initialized", &self.is_initialized())
			.finish_non_exhaustive()
	}
}

fn check_name(key: &str) -> Result<()> {
	let reason = if key.trim().is_empty() {
		InvalidNameReason::Missing
	} else if key.starts_with(PARAGRAPH) {
		InvalidNameReason::ReservedNamespace(PARAGRAPH)
	} else if key.starts_with(STYLE) {
		InvalidNameReason::ReservedNamespace(STYLE)
	} else if let Some(canonical) = names::resolve(key) {
		InvalidNameReason::ReservedAlias(canonical)
	} else if names::route(key) != key {
		InvalidNameReason::Unroutable
	} else {
		return Ok(());
	};

	let name = (!key.is_empty()).then_some(key);
	Err(AnnotationError::invalid_name(name, reason))
}
