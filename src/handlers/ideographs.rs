//! Ideograph and emoji source tables: `CJKRadicals.txt`,
//! `EquivalentUnifiedIdeograph.txt`, `NushuSources.txt`, `TangutSources.txt`
//! and `EmojiSources.txt`.

use log::warn;

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::SourceTag;
use crate::error::Result;
use crate::record::{Property, ShiftJisCodes};

/// `<radical number>; <radical character>; <unified ideograph>`.  The radical
/// number may carry a prime (`90'`) for simplified forms.
pub fn cjk_radicals(row: &Row) -> Result<Vec<Update>> {
    let number = row.required(0)?.to_string();
    let character = row.optional_single(1);
    let unified_ideograph = row.single(2)?;

    let mut updates = vec![];
    if let Some(character) = character {
        updates.push(Update::set(
            CodePointValue::Single(character),
            Property::CjkRadical(number.clone()),
        ));
    }
    updates.push(Update::Radical {
        number,
        character,
        unified_ideograph,
    });
    Ok(updates)
}

/// `<code or range> ; <unified ideograph>`
pub fn equivalent_unified_ideograph(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let ideograph = row.single(1)?;
    Ok(vec![Update::set(
        target,
        Property::EquivalentUnifiedIdeograph(ideograph),
    )])
}

/// Tab separated `U+<code> <tag> <value>` rows of the Nushu and Tangut source
/// files.
pub fn sources(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let tag = row.required(1)?;
    let value = row.field(2).to_string();

    match SourceTag::from_abbr(tag) {
        Some(tag) => Ok(vec![Update::set(target, Property::Source(tag, value))]),
        None => {
            warn!("{}: keeping unknown source tag {:?} as is", target, tag);
            Ok(vec![Update::set(
                target,
                Property::OtherSource(tag.to_string(), value),
            )])
        }
    }
}

/// `<code or sequence>;<DoCoMo>;<KDDI>;<SoftBank>`.  Only single code points
/// are recorded; keycap sequences and flags have no record to attach to.
pub fn emoji_sources(row: &Row) -> Result<Vec<Update>> {
    let code = match row.code_point(0)? {
        CodePointValue::Single(code) => code,
        _ => return Ok(vec![]),
    };
    let codes = ShiftJisCodes {
        docomo: row.optional_single(1),
        kddi: row.optional_single(2),
        softbank: row.optional_single(3),
    };
    Ok(vec![Update::set(
        CodePointValue::Single(code),
        Property::ShiftJis(codes),
    )])
}

#[cfg(test)]
use super::row;

#[test]
fn check_radicals() {
    assert_eq!(
        cjk_radicals(&row(&["1", "2F00", "4E00"])).unwrap(),
        vec![
            Update::set(CodePointValue::Single(0x2F00), Property::CjkRadical("1".into())),
            Update::Radical {
                number: "1".into(),
                character: Some(0x2F00),
                unified_ideograph: 0x4E00,
            },
        ]
    );
    assert_eq!(cjk_radicals(&row(&["90'", "", "4E2C"])).unwrap().len(), 1);
}

#[test]
fn check_sources() {
    assert_eq!(
        sources(&row(&["U+16FE1", "kSrc_NushuDuben", "1.2"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x16FE1),
            Property::Source(SourceTag::NushuSource, "1.2".into())
        )]
    );
    assert_eq!(
        sources(&row(&["U+18B00", "kTGT_NewField", "L2008-0001"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x18B00),
            Property::OtherSource("kTGT_NewField".into(), "L2008-0001".into())
        )]
    );
}

#[test]
fn check_emoji_sources() {
    assert!(emoji_sources(&row(&["0023 20E3", "F985", "F489", "F7B0"]))
        .unwrap()
        .is_empty());
    assert_eq!(
        emoji_sources(&row(&["2600", "F89F", "F660", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x2600),
            Property::ShiftJis(ShiftJisCodes {
                docomo: Some(0xF89F),
                kddi: Some(0xF660),
                softbank: None,
            })
        )]
    );
}
