use crate::SpecTreeError;
use crate::SpecTreeResult;

/// The character that introduces a reference line.
pub const REFERENCE_MARKER: char = '@';

/// The extension every referenced file must carry.
pub const REFERENCE_EXTENSION: &str = ".md";

/// The outcome of inspecting a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
	/// The line is ordinary text and passes through unchanged.
	Text,
	/// The whole line is a reference to the contained relative path.
	Reference(&'a str),
}

impl<'a> ParsedLine<'a> {
	pub fn is_reference(&self) -> bool {
		matches!(self, Self::Reference(_))
	}

	/// The referenced path, taken verbatim from the text after `@`.
	pub fn path(&self) -> Option<&'a str> {
		match self {
			Self::Text => None,
			Self::Reference(path) => Some(path),
		}
	}
}

/// A reference found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
	/// 1-indexed line number of the reference.
	pub line: usize,
	/// The relative target path as written after `@`.
	pub path: String,
}

/// Inspect one line of a document.
///
/// A line is a reference when its entire content is `@` followed by a path
/// whose first character is not `@`, which has at least one further
/// character before the literal `.md` suffix, and which contains no line
/// terminators. Anything else, including leading or trailing whitespace, is
/// ordinary text.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
	let Some(path) = line.strip_prefix(REFERENCE_MARKER) else {
		return ParsedLine::Text;
	};

	let Some(stem) = path.strip_suffix(REFERENCE_EXTENSION) else {
		return ParsedLine::Text;
	};

	let mut chars = stem.chars();
	let Some(first) = chars.next() else {
		return ParsedLine::Text;
	};

	if first == REFERENCE_MARKER {
		return ParsedLine::Text;
	}

	let rest = chars.as_str();
	if rest.is_empty() || rest.chars().any(is_line_terminator) {
		return ParsedLine::Text;
	}

	ParsedLine::Reference(path)
}

/// Returns `true` when the line is a valid reference.
pub fn is_valid_reference(line: &str) -> bool {
	parse_line(line).is_reference()
}

/// Collect every reference in `content`, in document order.
///
/// Lines are split on `\n` only; a trailing newline produces a final empty
/// segment which still counts towards line numbering.
pub fn parse_references(content: &str) -> Vec<Reference> {
	content
		.split('\n')
		.enumerate()
		.filter_map(|(index, line)| {
			parse_line(line).path().map(|path| {
				Reference {
					line: index + 1,
					path: path.to_string(),
				}
			})
		})
		.collect()
}

/// Stricter form of [`parse_line`] which rejects lines that look like a
/// reference but do not satisfy the grammar.
///
/// A line looks like a reference when, once trimmed, it starts with `@` and
/// ends with `.md`. Such lines yield [`SpecTreeError::InvalidReference`]
/// instead of silently passing through as text.
pub fn parse_line_strict(line: &str, line_number: usize) -> SpecTreeResult<ParsedLine<'_>> {
	let parsed = parse_line(line);
	if parsed.is_reference() {
		return Ok(parsed);
	}

	let trimmed = line.trim();
	if !(trimmed.starts_with(REFERENCE_MARKER) && trimmed.ends_with(REFERENCE_EXTENSION)) {
		return Ok(ParsedLine::Text);
	}

	let reason = if trimmed.len() != line.len() {
		"surrounding whitespace is not allowed"
	} else if trimmed[REFERENCE_MARKER.len_utf8()..].starts_with(REFERENCE_MARKER) {
		"path must not start with '@'"
	} else if trimmed.chars().any(is_line_terminator) {
		"path must not contain a line terminator"
	} else {
		"path is too short"
	};

	Err(SpecTreeError::InvalidReference {
		reference: trimmed.to_string(),
		reason: reason.to_string(),
		line: line_number,
	})
}

fn is_line_terminator(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
