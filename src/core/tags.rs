//! Tag list decoding
//!
//! Catalog tags arrive as a serialized list literal such as
//! `['city pop', "summer", 'night drive']`. Decoding is total: anything that
//! is not a well-formed list of quoted strings yields an empty set.
//!
//! String escapes follow Python literals: `\xNN`, `\uNNNN` and `\UNNNNNNNN`
//! are decoded and a malformed one rejects the whole list. Named escapes
//! (`\N{...}`) and other unknown escapes are kept as written.

use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

pub type TagSet = BTreeSet<String>;

pub fn parse(raw: Option<&str>) -> TagSet {
	match raw {
		Some(text) if text.starts_with('[') => parse_list(text).unwrap_or_default(),
		_ => TagSet::new(),
	}
}

/// Tags present in both sets, in sorted order
pub fn shared(a: &TagSet, b: &TagSet) -> Vec<String> {
	a.intersection(b).cloned().collect()
}

fn parse_list(text: &str) -> Option<TagSet> {
	let mut chars = text.chars().peekable();
	if chars.next() != Some('[') {
		return None;
	}

	let mut tags = TagSet::new();
	loop {
		skip_whitespace(&mut chars);
		match chars.peek()? {
			']' => {
				chars.next();
				break;
			}
			'\'' | '"' => {
				tags.insert(parse_quoted(&mut chars)?);
				skip_whitespace(&mut chars);
				match chars.next()? {
					',' => continue,
					']' => break,
					_ => return None,
				}
			}
			_ => return None,
		}
	}

	skip_whitespace(&mut chars);
	if chars.next().is_some() {
		return None;
	}
	Some(tags)
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
	let quote = chars.next()?;
	let mut out = String::new();
	loop {
		match chars.next()? {
			'\\' => match chars.next()? {
				'n' => out.push('\n'),
				't' => out.push('\t'),
				'r' => out.push('\r'),
				'\\' => out.push('\\'),
				'\'' => out.push('\''),
				'"' => out.push('"'),
				'x' => out.push(hex_escape(chars, 2)?),
				'u' => out.push(hex_escape(chars, 4)?),
				'U' => out.push(hex_escape(chars, 8)?),
				other => {
					out.push('\\');
					out.push(other);
				}
			},
			c if c == quote => return Some(out),
			c => out.push(c),
		}
	}
}

/// Exactly `digits` hex digits naming a valid scalar value
fn hex_escape(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<char> {
	let mut code = 0u32;
	for _ in 0..digits {
		code = code * 16 + chars.next()?.to_digit(16)?;
	}
	char::from_u32(code)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
	while chars.peek().is_some_and(|c| c.is_whitespace()) {
		chars.next();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set(items: &[&str]) -> TagSet {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn parses_single_and_double_quotes() {
		let tags = parse(Some(r#"['city pop', "summer",'night drive']"#));
		assert_eq!(tags, set(&["city pop", "summer", "night drive"]));
	}

	#[test]
	fn empty_list_and_trailing_comma() {
		assert!(parse(Some("[]")).is_empty());
		assert_eq!(parse(Some("['a', ]")), set(&["a"]));
	}

	#[test]
	fn duplicates_collapse() {
		assert_eq!(parse(Some("['rock', 'rock']")), set(&["rock"]));
	}

	#[test]
	fn escapes_are_decoded() {
		assert_eq!(parse(Some(r"['it\'s', 'a\\b']")), set(&["it's", "a\\b"]));
	}

	#[test]
	fn hex_and_unicode_escapes_are_decoded() {
		let tags = parse(Some(r"['caf\xe9', '\u30b7\u30c6\u30a3\u30dd\u30c3\u30d7', '\U0001f3b5']"));
		assert_eq!(tags, set(&["café", "シティポップ", "🎵"]));
	}

	#[test]
	fn named_escapes_stay_raw() {
		assert_eq!(parse(Some(r"['\N{BULLET}']")), set(&[r"\N{BULLET}"]));
	}

	#[test]
	fn malformed_input_is_empty() {
		for raw in [
			"",
			"rock, pop",
			" ['leading space']",
			"['unterminated",
			"['a' 'b']",
			"['a'] trailing",
			"[1, 2]",
			"['a', None]",
			"[",
			r"['\xZZ']",
			r"['\u12']",
			r"['\udc00']",
		] {
			assert!(parse(Some(raw)).is_empty(), "expected empty for {:?}", raw);
		}
		assert!(parse(None).is_empty());
	}

	#[test]
	fn shared_is_sorted_intersection() {
		let a = set(&["pop", "dance", "night"]);
		let b = set(&["night", "rock", "dance"]);
		assert_eq!(shared(&a, &b), vec!["dance".to_string(), "night".to_string()]);
	}
}
