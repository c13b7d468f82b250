//! Parse the contents of `CaseFolding.txt`.
//!
//! File format is:
//! ```text
//! <code>; <status>; <mapping>; # <name>
//! ```
//! A code point may have several rows (e.g. a simple and a full folding); all
//! of them are kept.

use log::warn;

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::enums::CaseFoldingStatus;
use crate::error::Result;
use crate::record::{CaseFolding, Property};

pub fn parse(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let status = row.required(1)?;
    let mapping = row.sequence(2)?;

    let status = CaseFoldingStatus::from_abbr(status).or_else(|| {
        warn!("U+{:04X}: unknown case folding status {:?}", code, status);
        None
    });

    Ok(vec![Update::set(
        CodePointValue::Single(code),
        Property::CaseFolding(CaseFolding { status, mapping }),
    )])
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::constants::{LATIN_CAPITAL_LETTER_A, LATIN_SMALL_LETTER_A, LATIN_SMALL_LETTER_SHARP_S};

#[test]
fn check_case_folding() {
    assert_eq!(
        parse(&row(&["0041", "C", "0061", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(LATIN_CAPITAL_LETTER_A),
            Property::CaseFolding(CaseFolding {
                status: Some(CaseFoldingStatus::Common),
                mapping: vec![LATIN_SMALL_LETTER_A],
            })
        )]
    );

    assert_eq!(
        parse(&row(&["00DF", "F", "0073 0073", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(LATIN_SMALL_LETTER_SHARP_S),
            Property::CaseFolding(CaseFolding {
                status: Some(CaseFoldingStatus::Full),
                mapping: vec![0x73, 0x73],
            })
        )]
    );

    assert!(parse(&row(&["0041", "C", "zz"])).is_err());
}
