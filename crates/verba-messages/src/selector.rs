//! Plural variant selection
//!
//! A plural definition is either a variant map (`{"one": ..., "other": ...}` or
//! ordinal keys `"0"`, `"1"`, ...) or a single pipe-delimited string whose
//! segments may carry a leading condition:
//!
//! ```text
//! {0}No items|{1}One item|[2,*]:count items
//! ```
//!
//! `{N}` matches one count, `[A,B]` a closed range where either bound may be
//! `*`. Conditions are tried in segment order and the first match wins. When
//! nothing matches, the locale's plural index picks the segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plural_rules::plural_index;
use crate::value::{MessageTree, MessageValue};

/// Leading condition token: `{...}` or `[...]` followed by the segment text.
static CONDITION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?s)^[\{\[]([^\[\]\{\}]*)[\}\]](.*)").expect("condition pattern is valid")
});

/// Selects the text variant matching a count.
///
/// # Example
/// ```
/// use verba_messages::{MessageValue, PluralSelector};
///
/// let selector = PluralSelector::new();
/// let spec = MessageValue::from("{0}No items|{1}One item|[2,*]:count items");
///
/// assert_eq!(selector.select(&spec, 0, "en"), Some("No items"));
/// assert_eq!(selector.select(&spec, 7, "en"), Some(":count items"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PluralSelector;

impl PluralSelector {
	/// Create a selector.
	pub fn new() -> Self {
		Self
	}

	/// Select the variant of `spec` for `count` in `locale`.
	///
	/// Returns `None` when the selected variant is not renderable text: an
	/// empty variant map, or a variant that is itself a sub-tree.
	pub fn select<'a>(&self, spec: &'a MessageValue, count: i64, locale: &str) -> Option<&'a str> {
		match spec {
			MessageValue::Tree(variants) => select_variant(variants, count)?.as_text(),
			MessageValue::Text(line) => Some(select_segment(line, count, locale)),
		}
	}
}

fn select_variant(variants: &MessageTree, count: i64) -> Option<&MessageValue> {
	if let Some(exact) = variants.get(count.to_string().as_str()) {
		return Some(exact);
	}

	let singular = variants.get("one").or_else(|| variants.get("1"));
	let plural = variants
		.get("other")
		.or_else(|| variants.get("0"))
		.or_else(|| variants.get("many"));

	if count == 1 {
		if let Some(singular) = singular {
			return Some(singular);
		}
	}

	plural
		.or(singular)
		.or_else(|| variants.values().next())
}

fn select_segment<'a>(line: &'a str, count: i64, locale: &str) -> &'a str {
	let segments: Vec<&'a str> = line.split('|').collect();

	if let Some(matched) = segments
		.iter()
		.find_map(|&segment| match_condition(segment, count))
	{
		return matched.trim();
	}

	let index = plural_index(locale, count);
	let chosen = if segments.len() == 1 {
		segments[0]
	} else {
		segments.get(index).copied().unwrap_or(segments[0])
	};

	strip_condition(chosen)
}

/// Return the segment text when its leading condition matches `count`.
fn match_condition(segment: &str, count: i64) -> Option<&str> {
	let captures = CONDITION.captures(segment)?;
	let condition = captures.get(1)?.as_str();
	let value = captures.get(2)?.as_str();

	if let Some((from, to)) = condition.split_once(',') {
		let from = from.trim();
		let to = to.trim();

		if to == "*" && count >= leading_int(from) {
			return Some(value);
		}
		if from == "*" && count <= leading_int(to) {
			return Some(value);
		}
		if count >= leading_int(from) && count <= leading_int(to) {
			return Some(value);
		}
	}

	(leading_int(condition) == count).then_some(value)
}

fn strip_condition(segment: &str) -> &str {
	match CONDITION.captures(segment).and_then(|captures| captures.get(2)) {
		Some(value) => value.as_str(),
		None => segment,
	}
}

/// Integer prefix of a condition bound.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit and a missing number reads as 0 (so `*` reads as 0).
fn leading_int(text: &str) -> i64 {
	let text = text.trim_start();
	let (negative, digits) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	let magnitude = digits
		.bytes()
		.take_while(u8::is_ascii_digit)
		.fold(0i64, |acc, digit| {
			acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
		});

	if negative { -magnitude } else { magnitude }
}
