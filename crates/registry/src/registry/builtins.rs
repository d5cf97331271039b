//! Built-in controllers present in every registry.

use indexmap::IndexMap;

use crate::controller::{AnnotationController, DEFAULT_VALUE, MuteSwitch, header_id_generator};
use crate::names::{LINK, PARAGRAPH_HEADER, PARAGRAPH_INDENT, PARAGRAPH_LIST, PARAGRAPH_TEXT_ALIGN, STYLE};
use crate::paragraph::{Alignment, IndentAction, LIST_STYLE_DECIMAL, LineStyle, ParagraphBehaviour};

fn styles<const N: usize>(entries: [(&str, LineStyle); N]) -> IndexMap<Box<str>, LineStyle> {
	entries.into_iter().map(|(name, style)| (Box::from(name), style)).collect()
}

pub(super) fn all(mute: &MuteSwitch) -> Vec<AnnotationController> {
	let header = AnnotationController::paragraph(
		PARAGRAPH_HEADER,
		ParagraphBehaviour::Heading,
		styles([
			("h1", LineStyle::regular("h1")),
			("h2", LineStyle::regular("h2")),
			("h3", LineStyle::regular("h3")),
			("h4", LineStyle::regular("h4")),
			("h5", LineStyle::regular("h5")),
			(DEFAULT_VALUE, LineStyle::regular("")),
		]),
		Some(header_id_generator()),
		mute.clone(),
	);

	let text_align = AnnotationController::paragraph(
		PARAGRAPH_TEXT_ALIGN,
		ParagraphBehaviour::Default,
		styles([
			("left", LineStyle::alignment(Alignment::Left)),
			("center", LineStyle::alignment(Alignment::Center)),
			("right", LineStyle::alignment(Alignment::Right)),
			("justify", LineStyle::alignment(Alignment::Justify)),
			(DEFAULT_VALUE, LineStyle::alignment(Alignment::Left)),
		]),
		None,
		mute.clone(),
	);

	let list = AnnotationController::paragraph(
		PARAGRAPH_LIST,
		ParagraphBehaviour::List,
		styles([
			("decimal", LineStyle::list(Some(LIST_STYLE_DECIMAL))),
			("unordered", LineStyle::list(None)),
			(DEFAULT_VALUE, LineStyle::list(None)),
		]),
		None,
		mute.clone(),
	);

	let indent = AnnotationController::indent(
		PARAGRAPH_INDENT,
		IndexMap::from([
			(Box::from("outdent"), IndentAction::Outdent),
			(Box::from("indent"), IndentAction::Indent),
		]),
		IndentAction::Reset,
		mute.clone(),
	);

	vec![
		header,
		text_align,
		list,
		indent,
		AnnotationController::generic(STYLE, mute.clone()),
		AnnotationController::generic(LINK, mute.clone()),
	]
}
