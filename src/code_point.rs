//! Parsing of the textual code point notations used across the UCD files.
//!
//! Four notations occur: a bare hex string (`0041`), a `U+` prefixed one
//! (`U+4E00`), an inclusive range (`0000..007F`) and a space-separated
//! sequence of either (`0023 FE0F`).  All of them parse into a
//! [`CodePointValue`].

use std::fmt;

use itertools::Itertools;

use crate::constants::{HEX_WIDTH, MAX_CODE_POINT};
use crate::types::CodePointSequence;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodePointValue {
    /// A single code point.
    Single(u32),

    /// An inclusive range `first..=last`, with `first <= last`.
    Range(u32, u32),

    /// An ordered sequence, keyed as a whole and never split into its
    /// constituents.
    Sequence(Vec<CodePointValue>),
}

impl CodePointValue {
    /// Parse any of the textual notations.  Malformed input, including empty
    /// or all-whitespace text, yields `None` rather than an error.
    pub fn parse(input: &str) -> Option<CodePointValue> {
        let input = input.trim().to_ascii_uppercase();
        let input = input.strip_prefix("U+").unwrap_or(&input);

        if input.contains(char::is_whitespace) {
            return CodePointValue::parse_list(input.split_whitespace());
        }

        if let Some((first, last)) = input.split_once("..") {
            return match (parse_hex(first), parse_hex(last)) {
                (Some(first), Some(last)) if first <= last => {
                    Some(CodePointValue::Range(first, last))
                }
                _ => None,
            };
        }

        parse_hex(input).map(CodePointValue::Single)
    }

    /// Parse a list of tokens into a sequence, skipping empty tokens.  A single
    /// malformed token makes the whole list malformed.
    pub fn parse_list<I, S>(tokens: I) -> Option<CodePointValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| !token.as_ref().trim().is_empty())
            .map(|token| CodePointValue::parse(token.as_ref()))
            .collect::<Option<Vec<_>>>()
            .map(CodePointValue::Sequence)
    }

    /// Accept a numeric code point, provided it is a finite integer in the
    /// code point space.
    pub fn from_number(n: f64) -> Option<CodePointValue> {
        if n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n <= MAX_CODE_POINT as f64 {
            Some(CodePointValue::Single(n as u32))
        } else {
            None
        }
    }

    /// The code point, if this value is a single one.
    pub fn as_single(&self) -> Option<u32> {
        match *self {
            CodePointValue::Single(code) => Some(code),
            _ => None,
        }
    }

    /// Every code point covered, in order: ranges are expanded and sequences
    /// flattened.
    pub fn code_points(&self) -> CodePointSequence {
        match self {
            CodePointValue::Single(code) => vec![*code],
            CodePointValue::Range(first, last) => (*first..=*last).collect(),
            CodePointValue::Sequence(items) => {
                items.iter().flat_map(CodePointValue::code_points).collect()
            }
        }
    }
}

impl fmt::Display for CodePointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePointValue::Single(code) => write!(f, "{:0width$X}", code, width = HEX_WIDTH),
            CodePointValue::Range(first, last) => write!(
                f,
                "{:0width$X}..{:0width$X}",
                first,
                last,
                width = HEX_WIDTH
            ),
            CodePointValue::Sequence(items) => write!(f, "{}", items.iter().join(" ")),
        }
    }
}

/// Format a code point the way the Unicode Standard writes it, e.g. `U+0041`.
pub fn format_code_point(code: u32) -> String {
    format!("U+{:0width$X}", code, width = HEX_WIDTH)
}

fn parse_hex(text: &str) -> Option<u32> {
    let text = text.trim();
    let text = text.strip_prefix("U+").unwrap_or(text);
    // `from_str_radix` would also accept a leading sign.
    if text.is_empty() || text.len() > 8 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16)
        .ok()
        .filter(|&code| code <= MAX_CODE_POINT)
}

#[test]
fn parse_notations() {
    use CodePointValue::*;

    assert_eq!(CodePointValue::parse("0041"), Some(Single(0x41)));
    assert_eq!(CodePointValue::parse("u+4e00"), Some(Single(0x4E00)));
    assert_eq!(CodePointValue::parse(" 10FFFF "), Some(Single(0x10FFFF)));
    assert_eq!(
        CodePointValue::parse("0000..007F"),
        Some(Range(0x00, 0x7F))
    );
    assert_eq!(
        CodePointValue::parse("0023 FE0F"),
        Some(Sequence(vec![Single(0x23), Single(0xFE0F)]))
    );
    assert_eq!(
        CodePointValue::parse("U+0B95 U+0BCD"),
        Some(Sequence(vec![Single(0xB95), Single(0xBCD)]))
    );
}

#[test]
fn parse_rejects_garbage() {
    for text in ["", "   ", "U+", "XYZ", "+41", "-41", "110000", "007F..0000", "0041..", "0041 ZZ"] {
        assert_eq!(CodePointValue::parse(text), None, "{:?}", text);
    }
}

#[test]
fn parse_numbers_and_lists() {
    assert_eq!(
        CodePointValue::from_number(65.0),
        Some(CodePointValue::Single(0x41))
    );
    assert_eq!(CodePointValue::from_number(f64::NAN), None);
    assert_eq!(CodePointValue::from_number(f64::INFINITY), None);
    assert_eq!(CodePointValue::from_number(-1.0), None);
    assert_eq!(CodePointValue::from_number(1.5), None);

    assert_eq!(
        CodePointValue::parse_list(["0041", "", "U+0301"]),
        Some(CodePointValue::Sequence(vec![
            CodePointValue::Single(0x41),
            CodePointValue::Single(0x301),
        ]))
    );
    assert_eq!(CodePointValue::parse_list(["0041", "nope"]), None);
}

#[test]
fn parse_format_parse_is_stable() {
    for text in [
        "41", "0041", "U+0041", "u+1f600", "10FFFF", "0000..007F", "U+4E00..U+9FFF",
        "0023 FE0F", "1F468 200D 1F469",
    ] {
        let parsed = CodePointValue::parse(text).expect(text);
        assert_eq!(
            CodePointValue::parse(&parsed.to_string()),
            Some(parsed.clone()),
            "{:?}",
            text
        );
    }
}

#[test]
fn code_points_expand_inclusively() {
    assert_eq!(
        CodePointValue::Range(0x41, 0x43).code_points(),
        vec![0x41, 0x42, 0x43]
    );
    assert_eq!(format_code_point(0x41), "U+0041");
    assert_eq!(format_code_point(0x1F600), "U+1F600");
}
