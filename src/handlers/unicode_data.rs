//! Parse the contents of `UnicodeData.txt`, the central code point registry
//! file.
//!
//! Each line holds 1 hexadecimal code field and 14 fields listed in
//! <http://www.unicode.org/reports/tr44/#UnicodeData.txt>.  Large uniform
//! blocks (CJK ideographs, Hangul syllables, private use planes) are given as
//! a pair of lines whose names end in `, First>` and `, Last>`.

use log::warn;

use super::derived::parse_rational;
use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::{BidiClass, GeneralCategory};
use crate::error::{Error, Result};
use crate::record::{Decomposition, Patch, Property};

const NAME: usize = 1;
const GENERAL_CATEGORY: usize = 2;
const COMBINING_CLASS: usize = 3;
const BIDI_CLASS: usize = 4;
const DECOMPOSITION: usize = 5;
const DECIMAL_DIGIT: usize = 6;
const DIGIT: usize = 7;
const NUMERIC: usize = 8;
const MIRRORED: usize = 9;
const UNICODE_1_NAME: usize = 10;
const ISO_COMMENT: usize = 11;
const UPPERCASE: usize = 12;
const LOWERCASE: usize = 13;
const TITLECASE: usize = 14;

pub fn parse(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let name = row.field(NAME);

    let mut properties = vec![];

    let category = match row.optional(GENERAL_CATEGORY) {
        None => GeneralCategory::Unassigned,
        Some(abbr) => GeneralCategory::from_abbr(abbr).unwrap_or_else(|| {
            warn!("U+{:04X}: unknown general category {:?}", code, abbr);
            GeneralCategory::Unassigned
        }),
    };
    properties.push(Property::GeneralCategory(category));

    let combining_class = match row.optional(COMBINING_CLASS) {
        None => 0,
        Some(text) => text.parse().map_err(|_| Error::BadNumber {
            text: text.to_string(),
        })?,
    };
    properties.push(Property::CombiningClass(combining_class));

    if let Some(abbr) = row.optional(BIDI_CLASS) {
        match BidiClass::from_abbr(abbr) {
            Some(bc) => properties.push(Property::BidiClass(bc)),
            None => warn!("U+{:04X}: unknown bidi class {:?}", code, abbr),
        }
    }

    if let Some(text) = row.optional(DECOMPOSITION) {
        properties.push(Property::Decomposition(parse_decomposition(text)?));
    }

    if let Some(v) = parse_integer(row, DECIMAL_DIGIT)? {
        properties.push(Property::DecimalDigitValue(v));
    }
    if let Some(v) = parse_integer(row, DIGIT)? {
        properties.push(Property::DigitValue(v));
    }
    if let Some(text) = row.optional(NUMERIC) {
        properties.push(Property::NumericValue(parse_rational(text)?));
    }

    properties.push(Property::Mirrored(
        row.field(MIRRORED).eq_ignore_ascii_case("Y"),
    ));

    if let Some(text) = row.optional(UNICODE_1_NAME) {
        properties.push(Property::Unicode1Name(text.to_string()));
    }
    if let Some(text) = row.optional(ISO_COMMENT) {
        properties.push(Property::Iso10646Comment(text.to_string()));
    }

    if let Some(c) = row.optional_single(UPPERCASE) {
        properties.push(Property::UpperCaseMapping(c));
    }
    if let Some(c) = row.optional_single(LOWERCASE) {
        properties.push(Property::LowerCaseMapping(c));
    }
    if let Some(c) = row.optional_single(TITLECASE) {
        properties.push(Property::TitleCaseMapping(c));
    }

    // The names of range rows are labels, not character names; the derived
    // phase names the individual code points.
    if name.starts_with('<') && name.ends_with(", First>") {
        return Ok(vec![Update::RangeFirst {
            code,
            patch: Patch(properties),
        }]);
    }
    if name.starts_with('<') && name.ends_with(", Last>") {
        return Ok(vec![Update::RangeLast { code }]);
    }

    properties.insert(0, Property::Name(name.to_string()));
    Ok(vec![Update::set(CodePointValue::Single(code), properties)])
}

fn parse_integer(row: &Row, i: usize) -> Result<Option<u32>> {
    row.optional(i)
        .map(|text| {
            text.parse().map_err(|_| Error::BadNumber {
                text: text.to_string(),
            })
        })
        .transpose()
}

/// `<tag> mapping...` or just `mapping...`.
fn parse_decomposition(text: &str) -> Result<Decomposition> {
    let (tag, mapping) = match text.strip_prefix('<').and_then(|rest| rest.split_once('>')) {
        Some((tag, mapping)) => (Some(tag.to_string()), mapping),
        None => (None, text),
    };

    let mapping = CodePointValue::parse(mapping)
        .map(|value| value.code_points())
        .ok_or_else(|| Error::BadCodePoint {
            text: text.to_string(),
        })?;

    Ok(Decomposition { tag, mapping })
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::constants::{COMBINING_ACUTE_ACCENT, LATIN_CAPITAL_LETTER_A, LATIN_SMALL_LETTER_A};

#[cfg(test)]
fn split(line: &str) -> Row {
    row(&line.split(';').collect::<Vec<_>>())
}

#[test]
fn check_unicode_data() {
    let updates = parse(&split("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;")).unwrap();
    let patch = match &updates[..] {
        [Update::Set {
            target: CodePointValue::Single(LATIN_CAPITAL_LETTER_A),
            patch,
        }] => patch,
        other => panic!("unexpected updates {:?}", other),
    };
    let props = patch.properties();
    assert!(props.contains(&Property::Name("LATIN CAPITAL LETTER A".into())));
    assert!(props.contains(&Property::GeneralCategory(GeneralCategory::UppercaseLetter)));
    assert!(props.contains(&Property::BidiClass(BidiClass::LeftToRight)));
    assert!(props.contains(&Property::LowerCaseMapping(LATIN_SMALL_LETTER_A)));
    assert!(props.contains(&Property::Mirrored(false)));
    assert!(!props.iter().any(|p| matches!(p, Property::UpperCaseMapping(_))));
}

#[test]
fn check_decompositions_and_numbers() {
    let updates = parse(&split(
        "00C1;LATIN CAPITAL LETTER A WITH ACUTE;Lu;0;L;0041 0301;;;;N;LATIN CAPITAL LETTER A ACUTE;;;00E1;",
    ))
    .unwrap();
    let Update::Set { patch, .. } = &updates[0] else {
        panic!("expected a set");
    };
    assert!(patch.properties().contains(&Property::Decomposition(Decomposition {
        tag: None,
        mapping: vec![LATIN_CAPITAL_LETTER_A, COMBINING_ACUTE_ACCENT],
    })));

    let updates = parse(&split(
        "2153;VULGAR FRACTION ONE THIRD;No;0;ON;<fraction> 0031 2044 0033;;;1/3;N;FRACTION ONE THIRD;;;;",
    ))
    .unwrap();
    let Update::Set { patch, .. } = &updates[0] else {
        panic!("expected a set");
    };
    let props = patch.properties();
    assert!(props.contains(&Property::Decomposition(Decomposition {
        tag: Some("fraction".into()),
        mapping: vec![0x31, 0x2044, 0x33],
    })));
    let third = props
        .iter()
        .find_map(|p| match p {
            Property::NumericValue(v) => Some(*v),
            _ => None,
        })
        .expect("numeric value");
    assert!((third - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn check_range_rows_and_defaults() {
    assert!(matches!(
        &parse(&split("4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;")).unwrap()[..],
        [Update::RangeFirst { code: 0x4E00, .. }]
    ));
    assert_eq!(
        parse(&split("9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;")).unwrap(),
        vec![Update::RangeLast { code: 0x9FFF }]
    );

    let updates = parse(&split("0378;reserved;;;;;;;;N;;;;;")).unwrap();
    let Update::Set { patch, .. } = &updates[0] else {
        panic!("expected a set");
    };
    assert!(patch
        .properties()
        .contains(&Property::GeneralCategory(GeneralCategory::Unassigned)));

    assert!(parse(&split("ZZZZ;BAD;Lu;0;L;;;;;N;;;;;")).is_err());
    assert!(parse(&split("0041;A;Lu;x;L;;;;;N;;;;;")).is_err());
}
