//! The per-code-point property record, and the patches that build it.
//!
//! Every property the UCD tables can populate is a typed field of
//! [`CharRecord`].  Handlers never touch a record directly: they describe
//! changes as [`Property`] values, grouped into a [`Patch`], which the record
//! store applies with [`CharRecord::apply`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::enums::{
    BidiClass, BracketType, CaseFoldingStatus, EastAsianWidth, GeneralCategory, HanVariantKind,
    JoiningType, NameAliasType, SourceTag, UnihanCategory, VerticalOrientation,
};
use crate::error::{Error, Result};
use crate::handlers::derived_core_properties::BinaryProperty;
use crate::types::CodePointSequence;

/// A decomposition mapping from `UnicodeData.txt`.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    /// The compatibility formatting tag (`font`, `compat`, ...), absent for
    /// canonical decompositions.
    pub tag: Option<String>,
    pub mapping: CodePointSequence,
}

/// One row of `CaseFolding.txt`.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseFolding {
    pub status: Option<CaseFoldingStatus>,
    pub mapping: CodePointSequence,
}

/// One row of `SpecialCasing.txt`.  An empty mapping means the code point is
/// removed under that condition.
#[derive(Clone, Debug, PartialEq)]
pub struct SpecialCasing {
    pub lower: CodePointSequence,
    pub title: CodePointSequence,
    pub upper: CodePointSequence,
    /// Space-separated language and context conditions, e.g. `tr After_I`.
    pub condition: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NameAlias {
    pub alias: String,
    pub kind: Option<NameAliasType>,
}

/// Shift-JIS codes of the three Japanese carriers' emoji sets, from
/// `EmojiSources.txt`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShiftJisCodes {
    pub docomo: Option<u32>,
    pub kddi: Option<u32>,
    pub softbank: Option<u32>,
}

/// The Unicode version a code point was assigned in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age {
    pub major: u8,
    pub minor: u8,
}

impl Age {
    pub fn parse(text: &str) -> Result<Age> {
        let bad = || Error::BadNumber {
            text: text.to_string(),
        };
        let (major, minor) = text.trim().split_once('.').ok_or_else(bad)?;
        Ok(Age {
            major: major.parse().map_err(|_| bad())?,
            minor: minor.parse().map_err(|_| bad())?,
        })
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Han ideograph data from the Unihan database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HanData {
    /// Field values by Unihan file, then by camel-cased field name with the
    /// leading `k` removed (`kDefinition` -> `definition`).
    pub fields: BTreeMap<UnihanCategory, BTreeMap<String, String>>,

    /// Raw values of the variant fields, each recorded at most once.
    pub variants: BTreeMap<HanVariantKind, String>,
}

/// Every property of a single code point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharRecord {
    pub name: Option<String>,
    pub general_category: Option<GeneralCategory>,
    pub combining_class: Option<u8>,
    pub bidi_class: Option<BidiClass>,
    pub decomposition: Option<Decomposition>,
    pub decimal_digit_value: Option<u32>,
    pub digit_value: Option<u32>,
    pub numeric_value: Option<f64>,
    pub mirrored: bool,
    pub unicode1_name: Option<String>,
    pub iso10646_comment: Option<String>,
    pub upper_case_mapping: Option<u32>,
    pub lower_case_mapping: Option<u32>,
    pub title_case_mapping: Option<u32>,

    pub grapheme_cluster_break: Option<String>,
    pub sentence_break: Option<String>,
    pub word_break: Option<String>,
    pub line_break: Option<String>,

    pub joining_type: Option<JoiningType>,
    pub joining_group: Option<String>,
    pub bidi_paired_bracket: Option<u32>,
    pub bidi_paired_bracket_type: Option<BracketType>,
    pub bidi_mirroring_glyph: Option<u32>,

    pub block: Option<String>,
    pub age: Option<Age>,
    pub script: Option<String>,
    pub script_extensions: Vec<String>,
    pub east_asian_width: Option<EastAsianWidth>,
    pub vertical_orientation: Option<VerticalOrientation>,
    pub hangul_syllable_type: Option<String>,
    pub indic_positional_category: Option<String>,
    pub indic_syllabic_category: Option<String>,
    pub indic_conjunct_break: Option<String>,
    pub jamo_short_name: Option<String>,

    pub case_folding: Vec<CaseFolding>,
    pub special_casing: Vec<SpecialCasing>,
    pub aliases: Vec<NameAlias>,

    /// Binary properties this code point has.
    pub properties: BTreeSet<BinaryProperty>,
    /// Binary properties missing from [`BinaryProperty`], camel-cased.
    pub other_properties: BTreeSet<String>,

    pub cjk_radical: Option<String>,
    pub equivalent_unified_ideograph: Option<u32>,
    pub shift_jis: Option<ShiftJisCodes>,
    pub nushu_source: Option<String>,
    pub nushu_common_reading: Option<String>,
    pub tangut_merged_source: Option<String>,
    pub radical_stroke_indexes: Option<String>,
    /// Nushu and Tangut source fields with tags missing from [`SourceTag`],
    /// keyed by the raw tag.
    pub other_sources: BTreeMap<String, String>,
    pub han: Option<HanData>,
}

impl CharRecord {
    pub fn has(&self, property: BinaryProperty) -> bool {
        self.properties.contains(&property)
    }

    /// Apply one property of a patch.  `code` is only used to report errors.
    pub(crate) fn apply(&mut self, code: u32, property: Property) -> Result<()> {
        match property {
            Property::Flag(flag) => {
                self.properties.insert(flag);
            }
            Property::OtherFlag(name) => {
                self.other_properties.insert(name);
            }
            Property::Name(name) => self.name = Some(name),
            Property::DerivedName(name) => {
                if self.name.is_none() {
                    self.name = Some(name);
                }
            }
            Property::GeneralCategory(gc) => self.general_category = Some(gc),
            Property::CombiningClass(ccc) => self.combining_class = Some(ccc),
            Property::BidiClass(bc) => self.bidi_class = Some(bc),
            Property::Decomposition(d) => self.decomposition = Some(d),
            Property::DecimalDigitValue(v) => self.decimal_digit_value = Some(v),
            Property::DigitValue(v) => self.digit_value = Some(v),
            Property::NumericValue(v) => self.numeric_value = Some(v),
            Property::Mirrored(m) => self.mirrored = m,
            Property::Unicode1Name(name) => self.unicode1_name = Some(name),
            Property::Iso10646Comment(comment) => self.iso10646_comment = Some(comment),
            Property::UpperCaseMapping(c) => self.upper_case_mapping = Some(c),
            Property::LowerCaseMapping(c) => self.lower_case_mapping = Some(c),
            Property::TitleCaseMapping(c) => self.title_case_mapping = Some(c),
            Property::GraphemeClusterBreak(v) => self.grapheme_cluster_break = Some(v),
            Property::SentenceBreak(v) => self.sentence_break = Some(v),
            Property::WordBreak(v) => self.word_break = Some(v),
            Property::LineBreak(v) => self.line_break = Some(v),
            Property::JoiningType(jt) => self.joining_type = Some(jt),
            Property::JoiningGroup(v) => self.joining_group = Some(v),
            Property::BidiPairedBracket(c) => self.bidi_paired_bracket = Some(c),
            Property::BidiPairedBracketType(t) => self.bidi_paired_bracket_type = Some(t),
            Property::BidiMirroringGlyph(c) => self.bidi_mirroring_glyph = Some(c),
            Property::Block(name) => self.block = Some(name),
            Property::Age(age) => self.age = Some(age),
            Property::Script(v) => self.script = Some(v),
            Property::ScriptExtensions(scripts) => self.script_extensions = scripts,
            Property::EastAsianWidth(w) => self.east_asian_width = Some(w),
            Property::VerticalOrientation(o) => self.vertical_orientation = Some(o),
            Property::HangulSyllableType(v) => self.hangul_syllable_type = Some(v),
            Property::IndicPositionalCategory(v) => self.indic_positional_category = Some(v),
            Property::IndicSyllabicCategory(v) => self.indic_syllabic_category = Some(v),
            Property::IndicConjunctBreak(v) => self.indic_conjunct_break = Some(v),
            Property::JamoShortName(v) => self.jamo_short_name = Some(v),
            Property::CaseFolding(folding) => push_unique(&mut self.case_folding, folding),
            Property::SpecialCasing(casing) => push_unique(&mut self.special_casing, casing),
            Property::Alias(alias) => push_unique(&mut self.aliases, alias),
            Property::CjkRadical(number) => self.cjk_radical = Some(number),
            Property::EquivalentUnifiedIdeograph(c) => self.equivalent_unified_ideograph = Some(c),
            Property::ShiftJis(codes) => self.shift_jis = Some(codes),
            Property::Source(tag, value) => {
                let slot = match tag {
                    SourceTag::NushuSource => &mut self.nushu_source,
                    SourceTag::NushuCommonReading => &mut self.nushu_common_reading,
                    SourceTag::TangutMergedSource => &mut self.tangut_merged_source,
                    SourceTag::RadicalStrokeIndexes => &mut self.radical_stroke_indexes,
                };
                *slot = Some(value);
            }
            Property::OtherSource(tag, value) => {
                self.other_sources.insert(tag, value);
            }
            Property::Unihan {
                category,
                key,
                value,
            } => {
                self.han
                    .get_or_insert_with(HanData::default)
                    .fields
                    .entry(category)
                    .or_default()
                    .insert(key, value);
            }
            Property::HanVariant { kind, value } => {
                let variants = &mut self.han.get_or_insert_with(HanData::default).variants;
                match variants.get(&kind) {
                    Some(existing) if *existing == value => {}
                    Some(existing) => {
                        return Err(Error::ConflictingVariant {
                            code,
                            kind,
                            existing: existing.clone(),
                            new: value,
                        })
                    }
                    None => {
                        variants.insert(kind, value);
                    }
                }
            }
        }
        Ok(())
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// A single property assignment: a property name paired with its value.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Flag(BinaryProperty),
    OtherFlag(String),
    Name(String),
    /// A name that applies only if the code point has no explicit name.
    DerivedName(String),
    GeneralCategory(GeneralCategory),
    CombiningClass(u8),
    BidiClass(BidiClass),
    Decomposition(Decomposition),
    DecimalDigitValue(u32),
    DigitValue(u32),
    NumericValue(f64),
    Mirrored(bool),
    Unicode1Name(String),
    Iso10646Comment(String),
    UpperCaseMapping(u32),
    LowerCaseMapping(u32),
    TitleCaseMapping(u32),
    GraphemeClusterBreak(String),
    SentenceBreak(String),
    WordBreak(String),
    LineBreak(String),
    JoiningType(JoiningType),
    JoiningGroup(String),
    BidiPairedBracket(u32),
    BidiPairedBracketType(BracketType),
    BidiMirroringGlyph(u32),
    Block(String),
    Age(Age),
    Script(String),
    ScriptExtensions(Vec<String>),
    EastAsianWidth(EastAsianWidth),
    VerticalOrientation(VerticalOrientation),
    HangulSyllableType(String),
    IndicPositionalCategory(String),
    IndicSyllabicCategory(String),
    IndicConjunctBreak(String),
    JamoShortName(String),
    /// Appended unless an identical entry exists.
    CaseFolding(CaseFolding),
    /// Appended unless an identical entry exists.
    SpecialCasing(SpecialCasing),
    /// Appended unless an identical entry exists.
    Alias(NameAlias),
    CjkRadical(String),
    EquivalentUnifiedIdeograph(u32),
    ShiftJis(ShiftJisCodes),
    Source(SourceTag, String),
    /// A source field whose tag is not a known [`SourceTag`].
    OtherSource(String, String),
    Unihan {
        category: UnihanCategory,
        key: String,
        value: String,
    },
    /// One-shot: a different value for an already recorded kind is an error.
    HanVariant { kind: HanVariantKind, value: String },
}

/// A set of property assignments applied together to one code point or to
/// every code point of a range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Patch(pub Vec<Property>);

impl Patch {
    pub fn properties(&self) -> &[Property] {
        &self.0
    }
}

/// A presence-only property, recorded as set.
impl From<BinaryProperty> for Patch {
    fn from(flag: BinaryProperty) -> Patch {
        Patch(vec![Property::Flag(flag)])
    }
}

impl From<Property> for Patch {
    fn from(property: Property) -> Patch {
        Patch(vec![property])
    }
}

impl From<Vec<Property>> for Patch {
    fn from(properties: Vec<Property>) -> Patch {
        Patch(properties)
    }
}

#[test]
fn derived_name_does_not_replace_explicit_name() {
    let mut record = CharRecord::default();
    record
        .apply(0x41, Property::DerivedName("FIRST".into()))
        .unwrap();
    record
        .apply(0x41, Property::DerivedName("SECOND".into()))
        .unwrap();
    assert_eq!(record.name.as_deref(), Some("FIRST"));

    record.apply(0x41, Property::Name("EXPLICIT".into())).unwrap();
    assert_eq!(record.name.as_deref(), Some("EXPLICIT"));
}

#[test]
fn accumulating_fields_do_not_duplicate() {
    let alias = NameAlias {
        alias: "NUL".into(),
        kind: Some(NameAliasType::Abbreviation),
    };
    let mut record = CharRecord::default();
    for _ in 0..2 {
        record.apply(0, Property::Alias(alias.clone())).unwrap();
    }
    record
        .apply(
            0,
            Property::Alias(NameAlias {
                alias: "NULL".into(),
                kind: Some(NameAliasType::Control),
            }),
        )
        .unwrap();
    assert_eq!(record.aliases.len(), 2);
}

#[test]
fn han_variants_are_one_shot() {
    let mut record = CharRecord::default();
    let variant = |value: &str| Property::HanVariant {
        kind: HanVariantKind::Simplified,
        value: value.to_string(),
    };
    record.apply(0x4E7E, variant("U+5E72")).unwrap();
    record.apply(0x4E7E, variant("U+5E72")).unwrap();
    match record.apply(0x4E7E, variant("U+4E7E")) {
        Err(Error::ConflictingVariant { code, kind, .. }) => {
            assert_eq!(code, 0x4E7E);
            assert_eq!(kind, HanVariantKind::Simplified);
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
}

#[test]
fn age_parsing() {
    assert_eq!(Age::parse("15.1").unwrap(), Age { major: 15, minor: 1 });
    assert_eq!(Age::parse(" 1.1 ").unwrap().to_string(), "1.1");
    assert!(Age::parse("one").is_err());
}
