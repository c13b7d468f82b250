//! `ArabicShaping.txt`, `BidiBrackets.txt` and `BidiMirroring.txt`.

use log::warn;

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::{BracketType, JoiningType};
use crate::error::Result;
use crate::record::Property;

/// `<code>; <schematic name>; <joining type>; <joining group>`
pub fn arabic_shaping(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let mut properties = vec![];

    if let Some(abbr) = row.optional(2) {
        match JoiningType::from_abbr(abbr) {
            Some(jt) => properties.push(Property::JoiningType(jt)),
            None => warn!("{}: unknown joining type {:?}", target, abbr),
        }
    }
    if let Some(group) = row.optional(3) {
        properties.push(Property::JoiningGroup(group.to_string()));
    }

    Ok(vec![Update::set(target, properties)])
}

/// `<code>; <paired bracket>; <o or c>`
pub fn bidi_brackets(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let pair = row.single(1)?;
    let kind = row.optional(2).and_then(BracketType::from_abbr);

    let mut properties = vec![Property::BidiPairedBracket(pair)];
    if let Some(kind) = kind {
        properties.push(Property::BidiPairedBracketType(kind));
    }

    let mut updates = vec![Update::set(CodePointValue::Single(code), properties)];
    if kind == Some(BracketType::Open) {
        updates.push(Update::Bracket {
            open: code,
            close: pair,
        });
    }
    Ok(updates)
}

/// `<code>; <mirrored glyph>`
pub fn bidi_mirroring(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let glyph = row.single(1)?;
    Ok(vec![
        Update::set(
            CodePointValue::Single(code),
            Property::BidiMirroringGlyph(glyph),
        ),
        Update::Mirror { code, glyph },
    ])
}

#[cfg(test)]
use super::row;

#[test]
fn check_brackets() {
    let updates = bidi_brackets(&row(&["0028", "0029", "o"])).unwrap();
    assert_eq!(
        updates,
        vec![
            Update::set(
                CodePointValue::Single(0x28),
                vec![
                    Property::BidiPairedBracket(0x29),
                    Property::BidiPairedBracketType(BracketType::Open),
                ]
            ),
            Update::Bracket {
                open: 0x28,
                close: 0x29,
            },
        ]
    );

    let updates = bidi_brackets(&row(&["0029", "0028", "c"])).unwrap();
    assert_eq!(updates.len(), 1);
}

#[test]
fn check_arabic_shaping() {
    assert_eq!(
        arabic_shaping(&row(&["0628", "BEH", "D", "BEH"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x628),
            vec![
                Property::JoiningType(JoiningType::DualJoining),
                Property::JoiningGroup("BEH".into()),
            ]
        )]
    );
}

#[test]
fn check_mirroring() {
    assert_eq!(
        bidi_mirroring(&row(&["0028", "0029"])).unwrap()[1],
        Update::Mirror {
            code: 0x28,
            glyph: 0x29,
        }
    );
}
