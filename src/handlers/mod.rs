//! One handler per UCD source file.
//!
//! A handler is a pure transform from one split line of its file (a [`Row`])
//! to the [`Update`]s that line implies.  Handlers never see the database, so
//! every file can be parsed independently; the loader applies the updates
//! afterwards, in table order.

use crate::code_point::CodePointValue;
use crate::constants::COMMENT_MARKER;
use crate::error::{Error, Result};
use crate::line_source::LineOptions;
use crate::record::{Patch, Property};
use crate::types::{CodePointRange, CodePointSequence};

pub mod bidi;
pub mod case_folding;
pub mod derived;
pub mod derived_core_properties;
pub mod ideographs;
pub mod property_aliases;
pub mod sequences;
pub mod special_casing;
pub mod unicode_data;
pub mod unihan;
pub mod values;

/// Loading happens in two phases; the second runs only after every update of
/// the first has been applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Base,
    /// Handlers that only fill in what the base phase left unset.
    Derived,
}

pub type RowParser = fn(&Row) -> Result<Vec<Update>>;

pub struct Handler {
    /// Path relative to the UCD root, without the `.txt` extension.
    pub file: &'static str,
    pub delimiter: char,
    pub phase: Phase,
    pub parse: RowParser,
}

impl Handler {
    const fn new(file: &'static str, parse: RowParser) -> Handler {
        Handler {
            file,
            delimiter: ';',
            phase: Phase::Base,
            parse,
        }
    }

    const fn tabbed(file: &'static str, parse: RowParser) -> Handler {
        Handler {
            delimiter: '\t',
            ..Handler::new(file, parse)
        }
    }

    const fn derived(file: &'static str, parse: RowParser) -> Handler {
        Handler {
            phase: Phase::Derived,
            ..Handler::new(file, parse)
        }
    }

    pub fn line_options(&self) -> LineOptions {
        LineOptions::new(Some(self.delimiter), Some(COMMENT_MARKER))
    }
}

/// Every file the loader reads.
pub static HANDLERS: &[Handler] = &[
    Handler::new("UnicodeData", unicode_data::parse),
    Handler::new("auxiliary/GraphemeBreakProperty", values::grapheme_cluster_break),
    Handler::new("auxiliary/SentenceBreakProperty", values::sentence_break),
    Handler::new("auxiliary/WordBreakProperty", values::word_break),
    Handler::new("ArabicShaping", bidi::arabic_shaping),
    Handler::new("BidiBrackets", bidi::bidi_brackets),
    Handler::new("BidiMirroring", bidi::bidi_mirroring),
    Handler::new("Blocks", values::blocks),
    Handler::new("CaseFolding", case_folding::parse),
    Handler::new("CJKRadicals", ideographs::cjk_radicals),
    Handler::new("CompositionExclusions", derived_core_properties::composition_exclusions),
    Handler::new("DerivedAge", values::age),
    Handler::new("DerivedCoreProperties", derived_core_properties::parse),
    Handler::new("EastAsianWidth", values::east_asian_width),
    Handler::new("emoji/emoji-data", derived_core_properties::parse),
    Handler::new("emoji/emoji-variation-sequences", sequences::emoji_variation_sequences),
    Handler::new("EmojiSources", ideographs::emoji_sources),
    Handler::new("EquivalentUnifiedIdeograph", ideographs::equivalent_unified_ideograph),
    Handler::new("HangulSyllableType", values::hangul_syllable_type),
    Handler::new("IndicPositionalCategory", values::indic_positional_category),
    Handler::new("IndicSyllabicCategory", values::indic_syllabic_category),
    Handler::new("Jamo", values::jamo_short_name),
    Handler::new("LineBreak", values::line_break),
    Handler::new("NameAliases", sequences::name_aliases),
    Handler::new("NamedSequences", sequences::named_sequences),
    Handler::new("NamedSequencesProv", sequences::provisional_named_sequences),
    Handler::tabbed("NushuSources", ideographs::sources),
    Handler::new("PropertyAliases", property_aliases::parse),
    Handler::new("PropList", derived_core_properties::parse),
    Handler::new("ScriptExtensions", values::script_extensions),
    Handler::new("Scripts", values::script),
    Handler::new("SpecialCasing", special_casing::parse),
    Handler::new("StandardizedVariants", sequences::standardized_variants),
    Handler::tabbed("TangutSources", ideographs::sources),
    Handler::new("VerticalOrientation", values::vertical_orientation),
    Handler::tabbed("unihan/Unihan_DictionaryIndices", unihan::dictionary_indices),
    Handler::tabbed("unihan/Unihan_DictionaryLikeData", unihan::dictionary_like_data),
    Handler::tabbed("unihan/Unihan_IRGSources", unihan::irg_sources),
    Handler::tabbed("unihan/Unihan_NumericValues", unihan::numeric_values),
    Handler::tabbed("unihan/Unihan_OtherMappings", unihan::other_mappings),
    Handler::tabbed("unihan/Unihan_RadicalStrokeCounts", unihan::radical_stroke_counts),
    Handler::tabbed("unihan/Unihan_Readings", unihan::readings),
    Handler::tabbed("unihan/Unihan_Variants", unihan::variants),
    Handler::derived("extracted/DerivedName", derived::name),
    Handler::derived("extracted/DerivedNumericValues", derived::numeric_values),
];

/// A change to the database implied by one source line.
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    /// Apply a patch to a code point, or uniformly to every code point of a
    /// range.
    Set {
        target: CodePointValue,
        patch: Patch,
    },

    /// The `<..., First>` row of a `UnicodeData.txt` range; paired with the
    /// following [`Update::RangeLast`] before anything is applied.
    RangeFirst { code: u32, patch: Patch },
    RangeLast { code: u32 },

    /// Name every unnamed code point of the range after `template`, with the
    /// placeholder replaced by that code point's hex digits.
    DerivedNames {
        range: CodePointRange,
        template: String,
    },

    Block { name: String, range: CodePointRange },
    Bracket { open: u32, close: u32 },
    Mirror { code: u32, glyph: u32 },
    Radical {
        number: String,
        character: Option<u32>,
        unified_ideograph: u32,
    },
    NamedSequence {
        provisional: bool,
        name: String,
        sequence: CodePointSequence,
    },
    PropertyAliases(Vec<String>),
    VariationSequence {
        sequence: CodePointSequence,
        description: String,
        environments: Vec<String>,
    },
}

impl Update {
    pub(crate) fn set<P: Into<Patch>>(target: CodePointValue, patch: P) -> Update {
        Update::Set {
            target,
            patch: patch.into(),
        }
    }
}

/// Merge each `RangeFirst`/`RangeLast` pair into a single ranged `Set`.
pub(crate) fn pair_ranges(updates: Vec<(usize, Update)>) -> Result<Vec<(usize, Update)>> {
    let mut paired = Vec::with_capacity(updates.len());
    let mut open: Option<(usize, u32, Patch)> = None;

    for (line, update) in updates {
        match update {
            Update::RangeFirst { code, patch } => {
                if let Some((line, code, _)) = open {
                    return Err(Error::UnpairedRange { code }.at("UnicodeData", line));
                }
                open = Some((line, code, patch));
            }
            Update::RangeLast { code: last } => match open.take() {
                Some((first_line, first, patch)) if first <= last => {
                    paired.push((first_line, Update::set(CodePointValue::Range(first, last), patch)));
                }
                _ => return Err(Error::UnpairedRange { code: last }.at("UnicodeData", line)),
            },
            update => paired.push((line, update)),
        }
    }

    match open {
        Some((line, code, _)) => Err(Error::UnpairedRange { code }.at("UnicodeData", line)),
        None => Ok(paired),
    }
}

/// The fields of one line, with typed accessors that report which field was
/// at fault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Row {
        Row { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The field's text, or `""` past the end of the line.
    pub fn field(&self, i: usize) -> &str {
        self.fields.get(i).map(String::as_str).unwrap_or("")
    }

    /// The field's text, if present and non-empty.
    pub fn optional(&self, i: usize) -> Option<&str> {
        Some(self.field(i)).filter(|f| !f.is_empty())
    }

    pub fn required(&self, i: usize) -> Result<&str> {
        self.optional(i).ok_or(Error::MissingField { field: i })
    }

    /// A mandatory code point value in any notation.
    pub fn code_point(&self, i: usize) -> Result<CodePointValue> {
        let text = self.required(i)?;
        CodePointValue::parse(text).ok_or_else(|| Error::BadCodePoint {
            text: text.to_string(),
        })
    }

    /// A mandatory single code point.
    pub fn single(&self, i: usize) -> Result<u32> {
        let text = self.required(i)?;
        CodePointValue::parse(text)
            .and_then(|value| value.as_single())
            .ok_or_else(|| Error::BadCodePoint {
                text: text.to_string(),
            })
    }

    /// An optional single code point: absent when empty or malformed.
    pub fn optional_single(&self, i: usize) -> Option<u32> {
        self.optional(i)
            .and_then(CodePointValue::parse)
            .and_then(|value| value.as_single())
    }

    /// A possibly empty code point sequence; malformed text is an error.
    pub fn sequence(&self, i: usize) -> Result<CodePointSequence> {
        match self.optional(i) {
            None => Ok(vec![]),
            Some(text) => CodePointValue::parse(text)
                .map(|value| value.code_points())
                .ok_or_else(|| Error::BadCodePoint {
                    text: text.to_string(),
                }),
        }
    }
}

/// `<code or range>; <value>` rows recording a single string property.
pub(crate) fn value_row(row: &Row, property: fn(String) -> Property) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let value = row.field(1).to_string();
    Ok(vec![Update::set(target, property(value))])
}

#[cfg(test)]
pub(crate) fn row(fields: &[&str]) -> Row {
    Row::new(fields.iter().map(|f| f.to_string()).collect())
}

#[test]
fn handler_files_are_unique() {
    let mut files = HANDLERS.iter().map(|h| h.file).collect::<Vec<_>>();
    files.sort_unstable();
    let count = files.len();
    files.dedup();
    assert_eq!(files.len(), count);
    assert_eq!(
        HANDLERS.iter().filter(|h| h.phase == Phase::Derived).count(),
        2
    );
}

#[test]
fn row_accessors() {
    let r = row(&["0041", "", "U+0061 0301", "XYZ"]);
    assert_eq!(r.single(0).unwrap(), 0x41);
    assert_eq!(r.optional(1), None);
    assert!(matches!(r.required(1), Err(Error::MissingField { field: 1 })));
    assert_eq!(r.sequence(1).unwrap(), Vec::<u32>::new());
    assert_eq!(r.sequence(2).unwrap(), vec![0x61, 0x301]);
    assert!(matches!(r.single(2), Err(Error::BadCodePoint { .. })));
    assert_eq!(r.optional_single(3), None);
    assert_eq!(r.field(9), "");
}

#[test]
fn range_rows_pair_up() {
    let patch = Patch::from(Property::Script("Han".into()));
    let updates = vec![
        (1, Update::RangeFirst { code: 0x3400, patch: patch.clone() }),
        (2, Update::RangeLast { code: 0x4DBF }),
        (3, Update::set(CodePointValue::Single(0x4DC0), patch.clone())),
    ];
    let paired = pair_ranges(updates).unwrap();
    assert_eq!(
        paired,
        vec![
            (1, Update::set(CodePointValue::Range(0x3400, 0x4DBF), patch.clone())),
            (3, Update::set(CodePointValue::Single(0x4DC0), patch.clone())),
        ]
    );

    let dangling = vec![(7, Update::RangeFirst { code: 0xAC00, patch })];
    assert!(pair_ranges(dangling).is_err());
    assert!(pair_ranges(vec![(1, Update::RangeLast { code: 0xD7A3 })]).is_err());
}
