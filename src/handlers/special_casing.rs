//! Processes `SpecialCasing.txt` to extract all special casing information.
//!
//! Format:
//! ```text
//! <code>; <lower>; <title>; <upper>; (<condition_list>;)? # <comment>
//! ```
//! Conditional and unconditional rows for the same code point accumulate on
//! its record in file order.

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::error::Result;
use crate::record::{Property, SpecialCasing};

pub fn parse(row: &Row) -> Result<Vec<Update>> {
    let code = row.single(0)?;
    let casing = SpecialCasing {
        lower: row.sequence(1)?,
        title: row.sequence(2)?,
        upper: row.sequence(3)?,
        condition: row.optional(4).map(str::to_string),
    };

    Ok(vec![Update::set(
        CodePointValue::Single(code),
        Property::SpecialCasing(casing),
    )])
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::constants::{GREEK_CAPITAL_LETTER_SIGMA, LATIN_SMALL_LETTER_SHARP_S};

#[test]
fn check_special_casing() {
    // Special casing for U+00DF LATIN SMALL LETTER SHARP S.
    assert_eq!(
        parse(&row(&["00DF", "00DF", "0053 0073", "0053 0053", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(LATIN_SMALL_LETTER_SHARP_S),
            Property::SpecialCasing(SpecialCasing {
                lower: vec![LATIN_SMALL_LETTER_SHARP_S],
                title: vec![0x53, 0x73],
                upper: vec![0x53, 0x53],
                condition: None,
            })
        )]
    );

    // Special casing for U+03A3 GREEK CAPITAL LETTER SIGMA.
    assert_eq!(
        parse(&row(&["03A3", "03C2", "03A3", "03A3", "Final_Sigma", ""])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(GREEK_CAPITAL_LETTER_SIGMA),
            Property::SpecialCasing(SpecialCasing {
                lower: vec![0x3C2],
                title: vec![GREEK_CAPITAL_LETTER_SIGMA],
                upper: vec![GREEK_CAPITAL_LETTER_SIGMA],
                condition: Some("Final_Sigma".into()),
            })
        )]
    );

    // A removal: COMBINING DOT ABOVE vanishes when lowercased after I in
    // Turkish.
    let updates = parse(&row(&["0307", "", "0307", "0307", "tr After_I", ""])).unwrap();
    let Update::Set { patch, .. } = &updates[0] else {
        panic!("expected a set");
    };
    assert!(matches!(
        &patch.properties()[0],
        Property::SpecialCasing(SpecialCasing { lower, .. }) if lower.is_empty()
    ));
}
