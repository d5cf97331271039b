//! End-to-end dispatch through an in-memory engine.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use quire_registry::controller::{PAINT_KEY_ATTR, PAINT_VALUE_ATTR};
use quire_registry::paragraph::{ALIGNMENT_ATTR, ID_ATTR, SUBTYPE_ATTR};
use quire_registry::{
	AnnotationEventKind, AnnotationRegistry, AnnotationSink, ParagraphBehaviour, RenderHooks, StyleDeclaration, TextRange,
};

type Node = BTreeMap<String, String>;

/// Rendering layer stand-in that remembers registered sinks.
#[derive(Default)]
struct MemoryEngine {
	paragraph: Mutex<Vec<(ParagraphBehaviour, Arc<dyn AnnotationSink>)>>,
	text: Mutex<Vec<(String, Arc<dyn AnnotationSink>)>>,
	classes: Mutex<BTreeMap<String, (String, StyleDeclaration)>>,
}

impl RenderHooks for MemoryEngine {
	fn register_paragraph_sink(&self, _key: &str, behaviour: ParagraphBehaviour, sink: Arc<dyn AnnotationSink>) {
		let mut sinks = self.paragraph.lock();
		if !sinks.iter().any(|(_, s)| Arc::ptr_eq(s, &sink)) {
			sinks.push((behaviour, sink));
		}
	}

	fn register_text_sink(&self, prefix: &str, sink: Arc<dyn AnnotationSink>) {
		self.text.lock().push((prefix.to_string(), sink));
	}

	fn register_custom_annotation(&self, key: &str, class: &str, style: &StyleDeclaration, sink: Arc<dyn AnnotationSink>) {
		self.classes
			.lock()
			.insert(key.to_string(), (class.to_string(), style.clone()));
		self.text.lock().push((key.to_string(), sink));
	}
}

impl MemoryEngine {
	fn paragraph_added(&self, behaviour: ParagraphBehaviour, node: &Node) {
		let sinks: Vec<_> = self
			.paragraph
			.lock()
			.iter()
			.filter(|(b, _)| *b == behaviour)
			.map(|(_, s)| Arc::clone(s))
			.collect();
		for sink in sinks {
			sink.on_added(node);
		}
	}

	/// Delivers a painted-span callback to the sink owning the span's key.
	fn span_clicked(&self, node: &Node) {
		let key = node.get(PAINT_KEY_ATTR).cloned().unwrap_or_default();
		let sink = self
			.text
			.lock()
			.iter()
			.filter(|(prefix, _)| key == *prefix || key.starts_with(&format!("{prefix}/")))
			.max_by_key(|(prefix, _)| prefix.len())
			.map(|(_, s)| Arc::clone(s));
		if let Some(sink) = sink {
			sink.on_event(node, &"click");
		}
	}
}

/// Builds a heading paragraph the way the engine would after applying
/// the controller's attribute update.
fn apply_header(registry: &AnnotationRegistry, range: TextRange, value: &str) -> Node {
	let controller = registry.get("header").unwrap();
	let update = controller.application(range, Some(value)).unwrap();
	update
		.into_iter()
		.filter_map(|(name, value)| value.map(|v| (name, v)))
		.collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Seen {
	kind: AnnotationEventKind,
	key: String,
	value: Option<String>,
	id: Option<String>,
}

fn setup() -> (Arc<MemoryEngine>, AnnotationRegistry) {
	let engine = Arc::new(MemoryEngine::default());
	let registry = AnnotationRegistry::new(engine.clone());
	registry.initialize();
	(engine, registry)
}

#[test]
fn applying_a_header_reports_an_added_event_with_an_id() {
	let (engine, registry) = setup();
	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);
	registry.set_handler("header", move |e| {
		sink.lock().push(Seen {
			kind: e.kind,
			key: e.key.clone(),
			value: e.value.clone(),
			id: e.attribute(ID_ATTR),
		});
	});

	let first = apply_header(&registry, TextRange::new(0, 12), "h2");
	engine.paragraph_added(ParagraphBehaviour::Heading, &first);
	std::thread::sleep(Duration::from_millis(2));
	let second = apply_header(&registry, TextRange::new(20, 31), "h2");
	engine.paragraph_added(ParagraphBehaviour::Heading, &second);

	let seen = seen.lock();
	assert_eq!(seen.len(), 2);
	assert_eq!(seen[0].kind, AnnotationEventKind::Added);
	assert_eq!(seen[0].key, "paragraph/header");
	assert_eq!(seen[0].value.as_deref(), Some("h2"));
	assert_eq!(first.get(SUBTYPE_ATTR).map(String::as_str), Some("h2"));

	let first_id = seen[0].id.clone().expect("generated id");
	let second_id = seen[1].id.clone().expect("generated id");
	assert_ne!(first_id, second_id);
}

#[test]
fn paragraph_sinks_only_hear_their_behaviour() {
	let (engine, registry) = setup();
	let headers = Arc::new(Mutex::new(0usize));
	let aligns = Arc::new(Mutex::new(Vec::new()));

	let h = Arc::clone(&headers);
	registry.set_handler("paragraph/header", move |_| *h.lock() += 1);
	let a = Arc::clone(&aligns);
	registry.set_handler("textAlign", move |e| a.lock().push(e.value.clone()));

	let node: Node = [(ALIGNMENT_ATTR.to_string(), "c".to_string())].into();
	engine.paragraph_added(ParagraphBehaviour::Default, &node);

	assert_eq!(*headers.lock(), 0);
	assert_eq!(*aligns.lock(), vec![Some("center".to_string())]);
}

#[test]
fn style_spans_route_to_the_style_family() {
	let (engine, registry) = setup();
	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);
	registry.set_handler("color", move |e| {
		sink.lock().push((e.kind, e.key.clone(), e.value.clone(), e.native.is_some()));
	});

	let span: Node = [
		(PAINT_KEY_ATTR.to_string(), "style/fontWeight".to_string()),
		(PAINT_VALUE_ATTR.to_string(), "bold".to_string()),
	]
	.into();
	engine.span_clicked(&span);

	assert_eq!(
		*seen.lock(),
		vec![(AnnotationEventKind::UserEvent, "style/fontWeight".to_string(), Some("bold".to_string()), true)]
	);
}

#[test]
fn custom_annotations_reach_the_engine_and_their_handler() {
	let (engine, registry) = setup();
	registry
		.define("mention", "mention", r#"{"color": "blue"}"#)
		.unwrap();

	let (class, style) = engine.classes.lock().get("mention").cloned().unwrap();
	assert_eq!(class, "mention");
	assert_eq!(style.get("color"), Some("blue"));

	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);
	registry.set_handler("mention", move |e| sink.lock().push((e.key.clone(), e.value.clone())));

	let span: Node = [
		(PAINT_KEY_ATTR.to_string(), "mention".to_string()),
		(PAINT_VALUE_ATTR.to_string(), "@ada".to_string()),
	]
	.into();
	engine.span_clicked(&span);

	assert_eq!(*seen.lock(), vec![("mention".to_string(), Some("@ada".to_string()))]);
}

#[test]
fn muting_silences_engine_callbacks() {
	let (engine, registry) = setup();
	let count = Arc::new(Mutex::new(0usize));
	let c = Arc::clone(&count);
	registry.set_handler("header", move |_| *c.lock() += 1);

	let node = apply_header(&registry, TextRange::new(0, 3), "h1");
	registry.mute_handlers(true);
	engine.paragraph_added(ParagraphBehaviour::Heading, &node);
	assert_eq!(*count.lock(), 0);

	registry.mute_handlers(false);
	engine.paragraph_added(ParagraphBehaviour::Heading, &node);
	assert_eq!(*count.lock(), 1);
}

#[test]
fn install_creates_one_process_registry() {
	let engine = Arc::new(MemoryEngine::default());
	let first = quire_registry::install(engine.clone());
	let second = quire_registry::install(Arc::new(MemoryEngine::default()));

	assert!(std::ptr::eq(first, second));
	assert!(std::ptr::eq(first, quire_registry::global().unwrap()));
	assert!(first.is_initialized());
	assert_eq!(engine.paragraph.lock().len(), 4);
	assert_eq!(engine.text.lock().len(), 2);
}
