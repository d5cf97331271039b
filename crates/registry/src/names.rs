//! Canonical annotation keys and the short-name table.
//!
//! Canonical keys are namespaced with `/` (`paragraph/header`, `style/color`).
//! Short names (`header`, `color`) are friendly aliases resolved through a
//! fixed table. Names missing from the table are already canonical.

pub const PARAGRAPH: &str = "paragraph";
pub const PARAGRAPH_HEADER: &str = "paragraph/header";
pub const PARAGRAPH_TEXT_ALIGN: &str = "paragraph/textAlign";
pub const PARAGRAPH_LIST: &str = "paragraph/list";
pub const PARAGRAPH_INDENT: &str = "paragraph/indent";

pub const STYLE: &str = "style";
pub const STYLE_BG_COLOR: &str = "style/backgroundColor";
pub const STYLE_COLOR: &str = "style/color";
pub const STYLE_FONT_FAMILY: &str = "style/fontFamily";
pub const STYLE_FONT_SIZE: &str = "style/fontSize";
pub const STYLE_FONT_STYLE: &str = "style/fontStyle";
pub const STYLE_FONT_WEIGHT: &str = "style/fontWeight";
pub const STYLE_TEXT_DECORATION: &str = "style/textDecoration";
pub const STYLE_VERTICAL_ALIGN: &str = "style/verticalAlign";

pub const LINK: &str = "link";

/// Namespace separator inside canonical keys.
pub const SEPARATOR: char = '/';

/// Short name to canonical key.
pub const CANONICAL_KEYS: &[(&str, &str)] = &[
	("header", PARAGRAPH_HEADER),
	("textAlign", PARAGRAPH_TEXT_ALIGN),
	("list", PARAGRAPH_LIST),
	("indent", PARAGRAPH_INDENT),
	("backgroundColor", STYLE_BG_COLOR),
	("color", STYLE_COLOR),
	("fontFamily", STYLE_FONT_FAMILY),
	("fontSize", STYLE_FONT_SIZE),
	("fontStyle", STYLE_FONT_STYLE),
	("fontWeight", STYLE_FONT_WEIGHT),
	("textDecoration", STYLE_TEXT_DECORATION),
	("verticalAlign", STYLE_VERTICAL_ALIGN),
];

/// How a namespaced key is routed to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingRule {
	/// The full key names its own controller (`paragraph/header`).
	Intact,
	/// Every key in the namespace shares the namespace controller (`style/*`).
	Family,
}

/// Namespaces exempt from family routing. Anything not listed is a family.
pub const ROUTES: &[(&str, RoutingRule)] = &[(LINK, RoutingRule::Intact), (PARAGRAPH, RoutingRule::Intact)];

/// Resolves a short name to its canonical key.
///
/// Returns `None` for names that are not aliases; callers treat those as
/// already canonical.
pub fn resolve(name: &str) -> Option<&'static str> {
	CANONICAL_KEYS.iter().find(|(short, _)| *short == name).map(|&(_, canonical)| canonical)
}

/// Resolves a name, falling back to the name itself.
pub fn canonicalize(name: &str) -> &str {
	resolve(name).unwrap_or(name)
}

/// Returns true if `name` is one of the reserved short aliases.
pub fn is_alias(name: &str) -> bool {
	resolve(name).is_some()
}

/// Returns the routing rule for a namespace.
pub fn rule_for(namespace: &str) -> RoutingRule {
	ROUTES
		.iter()
		.find(|(ns, _)| *ns == namespace)
		.map_or(RoutingRule::Family, |&(_, rule)| rule)
}

/// Routes a key to the key of the controller that owns it.
///
/// Un-namespaced keys route to themselves. Namespaced keys route to their
/// namespace unless the namespace keeps keys intact.
pub fn route(key: &str) -> &str {
	match key.split_once(SEPARATOR) {
		Some((namespace, _)) if rule_for(namespace) == RoutingRule::Family => namespace,
		_ => key,
	}
}

/// Returns true if the canonical form of `name` is in the paragraph namespace.
pub fn is_paragraph(name: &str) -> bool {
	canonicalize(name)
		.strip_prefix(PARAGRAPH)
		.is_some_and(|rest| rest.starts_with(SEPARATOR))
}
