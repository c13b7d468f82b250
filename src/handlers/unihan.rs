//! The Unihan database, one tab-separated file per field family:
//! ```text
//! U+<code>	k<Field>	<value>
//! ```
//! Fields are recorded under their file's [`UnihanCategory`], keyed by the
//! camel-cased field name without its `k`.  `Unihan_Variants.txt` fields are
//! one-shot per code point.

use super::{Row, Update};
use crate::enums::{camel_case, HanVariantKind, UnihanCategory};
use crate::error::Result;
use crate::record::Property;

pub fn dictionary_indices(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::DictionaryIndices)
}

pub fn dictionary_like_data(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::DictionaryLikeData)
}

pub fn irg_sources(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::IrgSources)
}

pub fn numeric_values(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::NumericValues)
}

pub fn other_mappings(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::OtherMappings)
}

pub fn radical_stroke_counts(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::RadicalStrokeCounts)
}

pub fn readings(row: &Row) -> Result<Vec<Update>> {
    field(row, UnihanCategory::Readings)
}

/// Known variant kinds are one-shot; any other field of the file is kept like
/// an ordinary Unihan field.
pub fn variants(row: &Row) -> Result<Vec<Update>> {
    match HanVariantKind::from_abbr(row.required(1)?) {
        Some(kind) => {
            let target = row.code_point(0)?;
            let value = row.field(2).to_string();
            Ok(vec![Update::set(target, Property::HanVariant { kind, value })])
        }
        None => field(row, UnihanCategory::Variants),
    }
}

fn field(row: &Row, category: UnihanCategory) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let key = row.required(1)?;
    let key = camel_case(key.strip_prefix('k').unwrap_or(key));
    let value = row.field(2).to_string();
    Ok(vec![Update::set(
        target,
        Property::Unihan {
            category,
            key,
            value,
        },
    )])
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::code_point::CodePointValue;
#[cfg(test)]
use crate::constants::CJK_UNIFIED_IDEOGRAPH_FIRST;

#[test]
fn check_unihan_fields() {
    assert_eq!(
        readings(&row(&["U+4E00", "kDefinition", "one; a, an; alone"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(CJK_UNIFIED_IDEOGRAPH_FIRST),
            Property::Unihan {
                category: UnihanCategory::Readings,
                key: "definition".into(),
                value: "one; a, an; alone".into(),
            }
        )]
    );
    assert_eq!(
        radical_stroke_counts(&row(&["U+4E00", "kRSUnicode", "1.0"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(CJK_UNIFIED_IDEOGRAPH_FIRST),
            Property::Unihan {
                category: UnihanCategory::RadicalStrokeCounts,
                key: "rsUnicode".into(),
                value: "1.0".into(),
            }
        )]
    );
}

#[test]
fn check_unihan_variants() {
    assert_eq!(
        variants(&row(&["U+4E7E", "kSimplifiedVariant", "U+5E72"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x4E7E),
            Property::HanVariant {
                kind: HanVariantKind::Simplified,
                value: "U+5E72".into(),
            }
        )]
    );
    assert_eq!(
        variants(&row(&["U+4E7E", "kNewVariant", "U+5E72"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x4E7E),
            Property::Unihan {
                category: UnihanCategory::Variants,
                key: "newVariant".into(),
                value: "U+5E72".into(),
            }
        )]
    );
}
