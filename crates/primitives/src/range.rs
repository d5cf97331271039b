/// A position in the document, measured in characters (not bytes).
pub type CharIdx = usize;

/// A span of document content that an annotation is applied over.
///
/// Unlike a selection there is no direction: `start` is always the smaller
/// offset and `end` the larger one, whatever order the engine reported them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
	/// Inclusive start offset.
	pub start: CharIdx,
	/// Exclusive end offset.
	pub end: CharIdx,
}

impl TextRange {
	/// Creates a range covering `a..b`, swapping the bounds if needed.
	pub fn new(a: CharIdx, b: CharIdx) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	/// Creates a zero-width range at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the number of characters covered.
	#[inline]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// Returns true if the range covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if `pos` lies inside the range.
	#[inline]
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.start && pos < self.end
	}
}
