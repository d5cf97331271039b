//! Paragraph attributes and the line styles paragraph annotations map to.

use std::collections::BTreeMap;

use quire_primitives::ContentNode;

/// Paragraph subtype (`h1`..`h5`, `li`). Absent for body text.
pub const SUBTYPE_ATTR: &str = "t";
/// Paragraph alignment code.
pub const ALIGNMENT_ATTR: &str = "a";
/// List style of `li` paragraphs. Absent for unordered lists.
pub const LIST_STYLE_ATTR: &str = "listyle";
/// Indentation level.
pub const INDENT_ATTR: &str = "i";
/// Generated element identifier.
pub const ID_ATTR: &str = "id";

pub const LIST_SUBTYPE: &str = "li";
pub const LIST_STYLE_DECIMAL: &str = "decimal";

/// Attribute writes for a paragraph node. `None` removes the attribute.
pub type AttributeUpdate = BTreeMap<String, Option<String>>;

/// Extra attributes computed when an annotation is applied.
pub type Attributes = BTreeMap<String, String>;

/// Category of paragraph the engine routes callbacks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphBehaviour {
	/// Body paragraphs. Carries alignment and indentation.
	Default,
	/// Heading paragraphs.
	Heading,
	/// List item paragraphs.
	List,
}

impl ParagraphBehaviour {
	/// Reads the annotation value this behaviour exposes from a paragraph node.
	///
	/// Missing or unrecognised attributes yield `None`.
	pub fn read_value(self, node: &dyn ContentNode) -> Option<String> {
		match self {
			Self::Default => node
				.attribute(ALIGNMENT_ATTR)
				.and_then(|v| Alignment::from_value(&v))
				.map(|a| a.css_value().to_string()),
			Self::Heading => node.attribute(SUBTYPE_ATTR),
			Self::List => node.attribute(LIST_STYLE_ATTR),
		}
	}
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
	Left,
	Center,
	Right,
	Justify,
}

impl Alignment {
	pub const ALL: [Alignment; 4] = [Self::Left, Self::Center, Self::Right, Self::Justify];

	/// Code stored in [`ALIGNMENT_ATTR`].
	pub fn code(self) -> &'static str {
		match self {
			Self::Left => "l",
			Self::Center => "c",
			Self::Right => "r",
			Self::Justify => "j",
		}
	}

	pub fn css_value(self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Center => "center",
			Self::Right => "right",
			Self::Justify => "justify",
		}
	}

	/// Parses either the stored code or the CSS value.
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|a| a.code() == value || a.css_value() == value)
	}
}

/// The attribute writes a paragraph annotation value stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
	assignments: Vec<(&'static str, Option<String>)>,
}

impl LineStyle {
	/// Heading or body style. An empty subtype clears the heading.
	pub fn regular(subtype: &str) -> Self {
		let subtype = (!subtype.is_empty()).then(|| subtype.to_string());
		Self {
			assignments: vec![(SUBTYPE_ATTR, subtype)],
		}
	}

	/// List item style. `None` is an unordered list.
	pub fn list(style: Option<&str>) -> Self {
		Self {
			assignments: vec![
				(SUBTYPE_ATTR, Some(LIST_SUBTYPE.to_string())),
				(LIST_STYLE_ATTR, style.map(str::to_string)),
			],
		}
	}

	pub fn alignment(alignment: Alignment) -> Self {
		Self {
			assignments: vec![(ALIGNMENT_ATTR, Some(alignment.code().to_string()))],
		}
	}

	pub fn assignments(&self) -> &[(&'static str, Option<String>)] {
		&self.assignments
	}

	/// Writes this style's assignments into `update`.
	pub fn write_to(&self, update: &mut AttributeUpdate) {
		for (name, value) in &self.assignments {
			update.insert((*name).to_string(), value.clone());
		}
	}
}

/// Indentation change applied to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentAction {
	Indent,
	Outdent,
	/// Clears indentation. Used when no value is given.
	Reset,
}

impl IndentAction {
	/// Computes the new [`INDENT_ATTR`] value from the current one.
	///
	/// A level of zero is represented by removing the attribute.
	pub fn apply(self, current: Option<&str>) -> Option<String> {
		let level = current.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(0);
		let next = match self {
			Self::Indent => level.saturating_add(1),
			Self::Outdent => level.saturating_sub(1),
			Self::Reset => 0,
		};
		(next > 0).then(|| next.to_string())
	}
}
