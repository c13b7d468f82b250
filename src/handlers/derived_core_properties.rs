//! Processes the binary property files: `DerivedCoreProperties.txt`,
//! `PropList.txt`, `emoji/emoji-data.txt`, plus `CompositionExclusions.txt`
//! which lists code points without naming a property.
//!
//! File format is:
//! ```text
//! <code or range> ; <property> (; <value>)? # <comment>
//! ```

use std::fmt;

use log::debug;

use super::{Row, Update};
use crate::enums::camel_case;
use crate::error::Result;
use crate::record::{Patch, Property};

macro_rules! binary_properties {
    ($($variant:ident = $name:literal,)*) => {
        /// A presence-only property: a code point either has it or not.
        #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub enum BinaryProperty {
            $($variant,)*
        }

        impl BinaryProperty {
            pub const ALL: &'static [BinaryProperty] = &[$(BinaryProperty::$variant),*];

            /// Look up a property by its name in the source files.
            pub fn from_name(name: &str) -> Option<BinaryProperty> {
                match name {
                    $($name => Some(BinaryProperty::$variant),)*
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(BinaryProperty::$variant => $name,)*
                }
            }
        }
    };
}

binary_properties! {
    // DerivedCoreProperties.txt
    Math = "Math",
    Alphabetic = "Alphabetic",
    Lowercase = "Lowercase",
    Uppercase = "Uppercase",
    Cased = "Cased",
    CaseIgnorable = "Case_Ignorable",
    ChangesWhenLowercased = "Changes_When_Lowercased",
    ChangesWhenUppercased = "Changes_When_Uppercased",
    ChangesWhenTitlecased = "Changes_When_Titlecased",
    ChangesWhenCasefolded = "Changes_When_Casefolded",
    ChangesWhenCasemapped = "Changes_When_Casemapped",
    IdStart = "ID_Start",
    IdContinue = "ID_Continue",
    XidStart = "XID_Start",
    XidContinue = "XID_Continue",
    DefaultIgnorableCodePoint = "Default_Ignorable_Code_Point",
    GraphemeExtend = "Grapheme_Extend",
    GraphemeBase = "Grapheme_Base",
    GraphemeLink = "Grapheme_Link",

    // PropList.txt
    WhiteSpace = "White_Space",
    BidiControl = "Bidi_Control",
    JoinControl = "Join_Control",
    Dash = "Dash",
    Hyphen = "Hyphen",
    QuotationMark = "Quotation_Mark",
    TerminalPunctuation = "Terminal_Punctuation",
    OtherMath = "Other_Math",
    HexDigit = "Hex_Digit",
    AsciiHexDigit = "ASCII_Hex_Digit",
    OtherAlphabetic = "Other_Alphabetic",
    Ideographic = "Ideographic",
    Diacritic = "Diacritic",
    Extender = "Extender",
    OtherLowercase = "Other_Lowercase",
    OtherUppercase = "Other_Uppercase",
    NoncharacterCodePoint = "Noncharacter_Code_Point",
    OtherGraphemeExtend = "Other_Grapheme_Extend",
    IdsBinaryOperator = "IDS_Binary_Operator",
    IdsTrinaryOperator = "IDS_Trinary_Operator",
    IdsUnaryOperator = "IDS_Unary_Operator",
    Radical = "Radical",
    UnifiedIdeograph = "Unified_Ideograph",
    OtherDefaultIgnorableCodePoint = "Other_Default_Ignorable_Code_Point",
    Deprecated = "Deprecated",
    SoftDotted = "Soft_Dotted",
    LogicalOrderException = "Logical_Order_Exception",
    OtherIdStart = "Other_ID_Start",
    OtherIdContinue = "Other_ID_Continue",
    IdCompatMathContinue = "ID_Compat_Math_Continue",
    IdCompatMathStart = "ID_Compat_Math_Start",
    SentenceTerminal = "Sentence_Terminal",
    VariationSelector = "Variation_Selector",
    PatternWhiteSpace = "Pattern_White_Space",
    PatternSyntax = "Pattern_Syntax",
    PrependedConcatenationMark = "Prepended_Concatenation_Mark",
    RegionalIndicator = "Regional_Indicator",
    ModifierCombiningMark = "Modifier_Combining_Mark",

    // emoji/emoji-data.txt
    Emoji = "Emoji",
    EmojiPresentation = "Emoji_Presentation",
    EmojiModifier = "Emoji_Modifier",
    EmojiModifierBase = "Emoji_Modifier_Base",
    EmojiComponent = "Emoji_Component",
    ExtendedPictographic = "Extended_Pictographic",

    // CompositionExclusions.txt
    CompositionExclusion = "Composition_Exclusion",
}

impl fmt::Display for BinaryProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The one property in `DerivedCoreProperties.txt` with a value column.
const INDIC_CONJUNCT_BREAK: &str = "InCB";

pub fn parse(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    let name = row.required(1)?;

    let property = match (name, row.optional(2)) {
        (INDIC_CONJUNCT_BREAK, Some(value)) => Property::IndicConjunctBreak(value.to_string()),
        _ => match BinaryProperty::from_name(name) {
            Some(flag) => Property::Flag(flag),
            None => {
                debug!("keeping unrecognized binary property {}", name);
                Property::OtherFlag(camel_case(name))
            }
        },
    };

    Ok(vec![Update::set(target, property)])
}

pub fn composition_exclusions(row: &Row) -> Result<Vec<Update>> {
    let target = row.code_point(0)?;
    Ok(vec![Update::set(
        target,
        Patch::from(BinaryProperty::CompositionExclusion),
    )])
}

#[cfg(test)]
use super::row;
#[cfg(test)]
use crate::code_point::CodePointValue;

#[test]
fn check_binary_property_rows() {
    assert_eq!(
        parse(&row(&["0041..005A", "Alphabetic"])).unwrap(),
        vec![Update::set(
            CodePointValue::Range(0x41, 0x5A),
            Property::Flag(BinaryProperty::Alphabetic)
        )]
    );
    assert_eq!(
        parse(&row(&["094D", "InCB", "Linker"])).unwrap(),
        vec![Update::set(
            CodePointValue::Single(0x94D),
            Property::IndicConjunctBreak("Linker".into())
        )]
    );
    assert_eq!(
        parse(&row(&["1F1E6..1F1FF", "Some_New_Property"])).unwrap(),
        vec![Update::set(
            CodePointValue::Range(0x1F1E6, 0x1F1FF),
            Property::OtherFlag("someNewProperty".into())
        )]
    );
    assert!(parse(&row(&["0041"])).is_err());
}

#[test]
fn check_binary_property_names() {
    for &p in BinaryProperty::ALL {
        assert_eq!(BinaryProperty::from_name(p.name()), Some(p));
    }
}
