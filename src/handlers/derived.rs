//! Handlers for the `extracted/` files, run after every base file has been
//! applied.
//!
//! `DerivedName.txt` lists the name of every named code point, with whole
//! ideograph blocks given as a range and a name template:
//! ```text
//! 4E00..9FFF    ; CJK UNIFIED IDEOGRAPH-*
//! ```
//! Explicit names from the base phase always win over these.
//!
//! `DerivedNumericValues.txt` is
//! ```text
//! <code or range> ; <decimal> ; ; <rational> # <comment>
//! ```

use super::{Row, Update};
use crate::code_point::CodePointValue;
use crate::constants::{HEX_WIDTH, NAME_TEMPLATE_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::record::Property;

pub fn name(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let name = row.required(1)?;

    if name.contains(NAME_TEMPLATE_PLACEHOLDER) {
        let range = match target {
            CodePointValue::Single(code) => (code, code),
            CodePointValue::Range(first, last) => (first, last),
            CodePointValue::Sequence(_) => {
                return Err(Error::SequenceTarget {
                    text: target.to_string(),
                })
            }
        };
        return Ok(vec![Update::DerivedNames {
            range,
            template: name.to_string(),
        }]);
    }

    Ok(vec![Update::set(target, Property::DerivedName(name.to_string()))])
}

/// Substitute the zero-padded hex of `code` for the template's placeholder.
pub fn expand_name_template(template: &str, code: u32) -> String {
    let hex = format!("{:0width$X}", code, width = HEX_WIDTH);
    template.replacen(NAME_TEMPLATE_PLACEHOLDER, &hex, 1)
}

/// The rational column is exact, so it decides whenever it holds a fraction;
/// otherwise the decimal column is used.
pub fn numeric_values(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;

    let value = match row.optional(3) {
        Some(rational) if rational.contains('/') => parse_rational(rational)?,
        _ => {
            let decimal = row.required(1)?;
            decimal.parse::<f64>().map_err(|_| Error::BadNumber {
                text: decimal.to_string(),
            })?
        }
    };

    Ok(vec![Update::set(target, Property::NumericValue(value))])
}

/// Parse `n` or `numerator/denominator` into a float.  A zero denominator, or
/// anything else not producing a finite number, is an error.
pub fn parse_rational(text: &str) -> Result<f64> {
    let bad = || Error::BadFraction {
        text: text.to_string(),
    };

    let value = match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = numerator.trim().parse::<f64>().map_err(|_| bad())?;
            let denominator = denominator.trim().parse::<f64>().map_err(|_| bad())?;
            if denominator == 0.0 {
                return Err(bad());
            }
            numerator / denominator
        }
        None => text.trim().parse::<f64>().map_err(|_| Error::BadNumber {
            text: text.to_string(),
        })?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(bad())
    }
}

#[cfg(test)]
use super::row;

#[test]
fn check_rationals() {
    assert!((parse_rational("1/3").unwrap() - 0.333333).abs() < 1e-6);
    assert_eq!(parse_rational("-1/2").unwrap(), -0.5);
    assert_eq!(parse_rational("1000000000000").unwrap(), 1e12);
    assert!(matches!(parse_rational("1/0"), Err(Error::BadFraction { .. })));
    assert!(matches!(parse_rational("0/0"), Err(Error::BadFraction { .. })));
    assert!(matches!(parse_rational("a/b"), Err(Error::BadFraction { .. })));
    assert!(matches!(parse_rational("NaN"), Err(Error::BadFraction { .. })));
}

#[test]
fn check_name_rows() {
    assert_eq!(
        name(&row(&["4E00..9FFF", "CJK UNIFIED IDEOGRAPH-*"])).unwrap(),
        vec![Update::DerivedNames {
            range: (0x4E00, 0x9FFF),
            template: "CJK UNIFIED IDEOGRAPH-*".into(),
        }]
    );
    assert_eq!(
        name(&row(&["0020", "SPACE"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x20),
            Property::DerivedName("SPACE".into())
        )]
    );
    assert_eq!(
        expand_name_template("CJK UNIFIED IDEOGRAPH-*", 0x4E00),
        "CJK UNIFIED IDEOGRAPH-4E00"
    );
    assert_eq!(
        expand_name_template("TANGUT IDEOGRAPH-*", 0x17000),
        "TANGUT IDEOGRAPH-17000"
    );
    assert_eq!(expand_name_template("X-*", 0xA), "X-000A");
}

#[test]
fn check_numeric_rows() {
    assert_eq!(
        numeric_values(&row(&["2153", "0.3333333333", "", "1/3"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x2153),
            Property::NumericValue(1.0 / 3.0)
        )]
    );
    assert_eq!(
        numeric_values(&row(&["0030", "0.0", "", "0"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x30),
            Property::NumericValue(0.0)
        )]
    );
    assert!(numeric_values(&row(&["2153", "0.3", "", "1/0"])).is_err());
}
