//! Annotation registry for the quire rich-text editor.
//!
//! Maps annotation names (`header`, `style/color`, `link`, custom names) to
//! [`AnnotationController`]s and routes the engine's document callbacks to
//! one handler per annotation as typed [`AnnotationEvent`]s.
//!
//! # Lookup
//!
//! - Short names resolve through a fixed alias table (`color` is
//!   `style/color`).
//! - Keys in family namespaces share one controller (`style/*` all route to
//!   `style`). `paragraph/*` and `link/*` keys name their own controller.
//! - Unknown names are never an error: lookups return `None` and handler
//!   calls are ignored.
//!
//! # Dispatch
//!
//! The engine registers each controller's [`EventAdapter`] as a sink. While a
//! handler is attached and the registry is not muted, each callback becomes
//! one synchronous handler call. There is no queueing; a handler that mutates
//! the document re-enters dispatch.
//!
//! # Process registry
//!
//! Collaborators normally receive an [`AnnotationRegistry`] by reference.
//! Embedders that want one registry per process call [`install`] once at
//! startup and [`global`] afterwards.

use std::sync::{Arc, OnceLock};

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod event;
pub mod names;
pub mod paragraph;
pub mod registry;
pub mod style;

pub use config::{ConfigApplyReport, CustomAnnotation, RegistryConfig};
pub use controller::{AnnotationController, AttributeGenerator, ControllerKind, EventAdapter, MuteSwitch};
pub use engine::{AnnotationSink, NoopHooks, RenderHooks};
pub use error::{AnnotationError, ConfigError, InvalidNameReason};
pub use event::{AnnotationEvent, AnnotationEventKind, EventHandler};
pub use paragraph::{Alignment, IndentAction, LineStyle, ParagraphBehaviour};
pub use quire_primitives::{ContentNode, NativeEvent, TextRange};
pub use registry::AnnotationRegistry;
pub use style::{StyleDeclaration, StyleSource};

static REGISTRY: OnceLock<AnnotationRegistry> = OnceLock::new();

/// Creates and initializes the process registry.
///
/// The first call wins; later calls return the existing registry and drop
/// their `hooks`.
pub fn install(hooks: Arc<dyn RenderHooks>) -> &'static AnnotationRegistry {
	let registry = REGISTRY.get_or_init(|| AnnotationRegistry::new(hooks));
	registry.initialize();
	registry
}

/// The process registry, if [`install`] has run.
pub fn global() -> Option<&'static AnnotationRegistry> {
	REGISTRY.get()
}
