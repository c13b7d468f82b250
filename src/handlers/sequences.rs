//! Names and sequences: `NameAliases.txt`, the named sequence files and the
//! two variation sequence files.
//!
//! Sequences are keyed by the whole ordered list of code points.

use log::warn;

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::NameAliasType;
use crate::error::{Error, Result};
use crate::record::{NameAlias, Property};
use crate::types::CodePointSequence;

/// `<code>; <alias>; <type>`
pub fn name_aliases(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let alias = row.required(1)?.to_string();
    let kind = match row.optional(2) {
        Some(abbr) => NameAliasType::from_abbr(abbr).or_else(|| {
            warn!("U+{:04X}: unknown alias type {:?}", code, abbr);
            None
        }),
        None => None,
    };

    Ok(vec![Update::set(
        CodePointValue::Single(code),
        Property::Alias(NameAlias { alias, kind }),
    )])
}

/// `<name>; <code sequence>`
pub fn named_sequences(row: &Row) -> Result<Vec<Update>> {
    named_sequence(row, false)
}

pub fn provisional_named_sequences(row: &Row) -> Result<Vec<Update>> {
    named_sequence(row, true)
}

fn named_sequence(row: &Row, provisional: bool) -> Result<Vec<Update>> {
    let name = row.required(0)?.to_string();
    let sequence = required_sequence(row, 1)?;
    Ok(vec![Update::NamedSequence {
        provisional,
        name,
        sequence,
    }])
}

/// `<code sequence> ; <style>`
pub fn emoji_variation_sequences(row: &Row) -> Result<Vec<Update>> {
    let sequence = required_sequence(row, 0)?;
    let description = row.required(1)?.to_string();
    Ok(vec![Update::VariationSequence {
        sequence,
        description,
        environments: vec![],
    }])
}

/// `<code sequence>; <description>; <shaping environments>`
pub fn standardized_variants(row: &Row) -> Result<Vec<Update>> {
    let sequence = required_sequence(row, 0)?;
    let description = row.required(1)?.to_string();
    let environments = row
        .field(2)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    Ok(vec![Update::VariationSequence {
        sequence,
        description,
        environments,
    }])
}

fn required_sequence(row: &Row, i: usize) -> Result<CodePointSequence> {
    match row.sequence(i)? {
        sequence if sequence.is_empty() => Err(Error::MissingField { field: i }),
        sequence => Ok(sequence),
    }
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::constants::VARIATION_SELECTOR_16;

#[test]
fn check_name_aliases() {
    assert_eq!(
        name_aliases(&row(&["0000", "NULL", "control"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0),
            Property::Alias(NameAlias {
                alias: "NULL".into(),
                kind: Some(NameAliasType::Control),
            })
        )]
    );
}

#[test]
fn check_sequences() {
    assert_eq!(
        named_sequences(&row(&["TAMIL SYLLABLE KSSA", "0B95 0BCD 0BB7"])).unwrap(),
        vec![Update::NamedSequence {
            provisional: false,
            name: "TAMIL SYLLABLE KSSA".into(),
            sequence: vec![0xB95, 0xBCD, 0xBB7],
        }]
    );
    assert_eq!(
        emoji_variation_sequences(&row(&["0023 FE0F", "emoji style", ""])).unwrap(),
        vec![Update::VariationSequence {
            sequence: vec![0x23, VARIATION_SELECTOR_16],
            description: "emoji style".into(),
            environments: vec![],
        }]
    );
    assert_eq!(
        standardized_variants(&row(&["1820 180B", "second form", "medial isolate", ""])).unwrap(),
        vec![Update::VariationSequence {
            sequence: vec![0x1820, 0x180B],
            description: "second form".into(),
            environments: vec!["medial".into(), "isolate".into()],
        }]
    );
    assert!(named_sequences(&row(&["NOTHING", ""])).is_err());
}
