//! Files mapping code points or ranges to a single property value:
//! ```text
//! <code or range> ; <value> # <comment>
//! ```

use log::warn;

use super::{value_row, Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::{EastAsianWidth, VerticalOrientation};
use crate::error::{Error, Result};
use crate::record::{Age, Property};

pub fn grapheme_cluster_break(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::GraphemeClusterBreak)
}

pub fn sentence_break(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::SentenceBreak)
}

pub fn word_break(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::WordBreak)
}

pub fn line_break(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::LineBreak)
}

pub fn hangul_syllable_type(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::HangulSyllableType)
}

pub fn indic_positional_category(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::IndicPositionalCategory)
}

pub fn indic_syllabic_category(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::IndicSyllabicCategory)
}

/// Some jamo have an empty short name, which is recorded as such.
pub fn jamo_short_name(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::JamoShortName)
}

pub fn script(row: &Row) -> Result<Vec<Update>> {
    value_row(row, Property::Script)
}

/// Script extensions are a space-separated list of script abbreviations.
pub fn script_extensions(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let scripts = row
        .required(1)?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    Ok(vec![Update::set(target, Property::ScriptExtensions(scripts))])
}

pub fn age(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let age = Age::parse(row.required(1)?)?;
    Ok(vec![Update::set(target, Property::Age(age))])
}

/// Blocks annotate every code point they span, and are also registered by
/// name.
pub fn blocks(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let name = row.required(1)?.to_string();
    let range = match target {
        CodePointValue::Range(first, last) => (first, last),
        CodePointValue::Single(code) => (code, code),
        CodePointValue::Sequence(_) => {
            return Err(Error::SequenceTarget {
                text: target.to_string(),
            })
        }
    };
    Ok(vec![
        Update::set(target, Property::Block(name.clone())),
        Update::Block { name, range },
    ])
}

/// A missing width is Neutral.
pub fn east_asian_width(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let width = match row.optional(1) {
        None => EastAsianWidth::Neutral,
        Some(abbr) => EastAsianWidth::from_abbr(abbr).unwrap_or_else(|| {
            warn!("{}: unknown east asian width {:?}", target, abbr);
            EastAsianWidth::Neutral
        }),
    };
    Ok(vec![Update::set(target, Property::EastAsianWidth(width))])
}

/// A missing orientation is Rotated.
pub fn vertical_orientation(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let orientation = match row.optional(1) {
        None => VerticalOrientation::Rotated,
        Some(abbr) => VerticalOrientation::from_abbr(abbr).unwrap_or_else(|| {
            warn!("{}: unknown vertical orientation {:?}", target, abbr);
            VerticalOrientation::Rotated
        }),
    };
    Ok(vec![Update::set(
        target,
        Property::VerticalOrientation(orientation),
    )])
}

#[cfg(test)]
use super::row;

#[test]
fn check_block_rows() {
    assert_eq!(
        blocks(&row(&["0000..007F", "Basic Latin"])).unwrap(),
        vec![
            Update::set(
                CodePointValue::Range(0x00, 0x7F),
                Property::Block("Basic Latin".into())
            ),
            Update::Block {
                name: "Basic Latin".into(),
                range: (0x00, 0x7F),
            },
        ]
    );
}

#[test]
fn check_enumerated_defaults() {
    assert_eq!(
        east_asian_width(&row(&["3000", "F"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x3000),
            Property::EastAsianWidth(EastAsianWidth::Fullwidth)
        )]
    );
    assert_eq!(
        east_asian_width(&row(&["0378", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x378),
            Property::EastAsianWidth(EastAsianWidth::Neutral)
        )]
    );
    assert_eq!(
        vertical_orientation(&row(&["3001..3002", "Tu"])).unwrap(),
        vec![Update::set(
            CodePointValue::Range(0x3001, 0x3002),
            Property::VerticalOrientation(VerticalOrientation::TransformedUpright)
        )]
    );
}

#[test]
fn check_value_rows() {
    assert_eq!(
        script_extensions(&row(&["0483", "Cyrl Perm"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x483),
            Property::ScriptExtensions(vec!["Cyrl".into(), "Perm".into()])
        )]
    );
    assert_eq!(
        age(&row(&["0000..001F", "1.1"])).unwrap(),
        vec![Update::set(
            CodePointValue::Range(0, 0x1F),
            Property::Age(Age { major: 1, minor: 1 })
        )]
    );
    assert_eq!(
        jamo_short_name(&row(&["110B", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x110B),
            Property::JamoShortName(String::new())
        )]
    );
    assert!(script(&row(&["nope", "Latin"])).is_err());
}
