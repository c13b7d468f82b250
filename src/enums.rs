//! Enumerated property values and the fixed abbreviation tables that name
//! them in the UCD source files.

use std::fmt;

/// Declare an enumeration together with its abbreviation table: the short
/// form used in the source files and the long form recorded in the model.
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($abbr:literal, $long:literal),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Look up a value by the abbreviation used in the source files.
            pub fn from_abbr(abbr: &str) -> Option<$name> {
                match abbr {
                    $($abbr => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn abbr(self) -> &'static str {
                match self {
                    $($name::$variant => $abbr,)*
                }
            }

            pub fn long_name(self) -> &'static str {
                match self {
                    $($name::$variant => $long,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.long_name())
            }
        }
    };
}

enumeration! {
    /// The General_Category property.  Besides the two-letter values found in
    /// `UnicodeData.txt`, the grouping values (`L`, `LC`, ...) are included.
    pub enum GeneralCategory {
        /// An uppercase letter.
        UppercaseLetter = ("Lu", "Uppercase_Letter"),
        /// A lowercase letter.
        LowercaseLetter = ("Ll", "Lowercase_Letter"),
        /// A digraphic character, with first part uppercase.
        TitlecaseLetter = ("Lt", "Titlecase_Letter"),
        /// Lu | Ll | Lt
        CasedLetter = ("LC", "Cased_Letter"),
        ModifierLetter = ("Lm", "Modifier_Letter"),
        /// Other letters, including syllables and ideographs.
        OtherLetter = ("Lo", "Other_Letter"),
        Letter = ("L", "Letter"),
        /// A nonspacing combining mark (zero advance width).
        NonspacingMark = ("Mn", "Nonspacing_Mark"),
        /// A spacing combining mark (positive advance width).
        SpacingMark = ("Mc", "Spacing_Mark"),
        EnclosingMark = ("Me", "Enclosing_Mark"),
        Mark = ("M", "Mark"),
        DecimalNumber = ("Nd", "Decimal_Number"),
        LetterNumber = ("Nl", "Letter_Number"),
        OtherNumber = ("No", "Other_Number"),
        Number = ("N", "Number"),
        ConnectorPunctuation = ("Pc", "Connector_Punctuation"),
        DashPunctuation = ("Pd", "Dash_Punctuation"),
        OpenPunctuation = ("Ps", "Open_Punctuation"),
        ClosePunctuation = ("Pe", "Close_Punctuation"),
        InitialPunctuation = ("Pi", "Initial_Punctuation"),
        FinalPunctuation = ("Pf", "Final_Punctuation"),
        OtherPunctuation = ("Po", "Other_Punctuation"),
        Punctuation = ("P", "Punctuation"),
        MathSymbol = ("Sm", "Math_Symbol"),
        CurrencySymbol = ("Sc", "Currency_Symbol"),
        ModifierSymbol = ("Sk", "Modifier_Symbol"),
        OtherSymbol = ("So", "Other_Symbol"),
        Symbol = ("S", "Symbol"),
        SpaceSeparator = ("Zs", "Space_Separator"),
        /// U+2028 LINE SEPARATOR only.
        LineSeparator = ("Zl", "Line_Separator"),
        /// U+2029 PARAGRAPH SEPARATOR only.
        ParagraphSeparator = ("Zp", "Paragraph_Separator"),
        Separator = ("Z", "Separator"),
        /// A C0 or C1 control code.
        Control = ("Cc", "Control"),
        Format = ("Cf", "Format"),
        Surrogate = ("Cs", "Surrogate"),
        PrivateUse = ("Co", "Private_Use"),
        /// A reserved unassigned code point or a noncharacter.
        Unassigned = ("Cn", "Unassigned"),
        Other = ("C", "Other"),
    }
}

enumeration! {
    pub enum BidiClass {
        LeftToRight = ("L", "Left_To_Right"),
        RightToLeft = ("R", "Right_To_Left"),
        ArabicLetter = ("AL", "Arabic_Letter"),
        EuropeanNumber = ("EN", "European_Number"),
        EuropeanSeparator = ("ES", "European_Separator"),
        EuropeanTerminator = ("ET", "European_Terminator"),
        ArabicNumber = ("AN", "Arabic_Number"),
        CommonSeparator = ("CS", "Common_Separator"),
        NonspacingMark = ("NSM", "Nonspacing_Mark"),
        BoundaryNeutral = ("BN", "Boundary_Neutral"),
        ParagraphSeparator = ("B", "Paragraph_Separator"),
        SegmentSeparator = ("S", "Segment_Separator"),
        WhiteSpace = ("WS", "White_Space"),
        OtherNeutral = ("ON", "Other_Neutral"),
        LeftToRightEmbedding = ("LRE", "Left_To_Right_Embedding"),
        LeftToRightOverride = ("LRO", "Left_To_Right_Override"),
        RightToLeftEmbedding = ("RLE", "Right_To_Left_Embedding"),
        RightToLeftOverride = ("RLO", "Right_To_Left_Override"),
        PopDirectionalFormat = ("PDF", "Pop_Directional_Format"),
        LeftToRightIsolate = ("LRI", "Left_To_Right_Isolate"),
        RightToLeftIsolate = ("RLI", "Right_To_Left_Isolate"),
        FirstStrongIsolate = ("FSI", "First_Strong_Isolate"),
        PopDirectionalIsolate = ("PDI", "Pop_Directional_Isolate"),
    }
}

/// The broad grouping of bidi classes used by the bidirectional algorithm.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum BidiType {
    Strong,
    Weak,
    Neutral,
    Explicit,
}

impl BidiClass {
    pub fn kind(self) -> BidiType {
        use BidiClass::*;
        match self {
            LeftToRight | RightToLeft | ArabicLetter => BidiType::Strong,
            EuropeanNumber | EuropeanSeparator | EuropeanTerminator | ArabicNumber
            | CommonSeparator | NonspacingMark | BoundaryNeutral => BidiType::Weak,
            ParagraphSeparator | SegmentSeparator | WhiteSpace | OtherNeutral => {
                BidiType::Neutral
            }
            LeftToRightEmbedding | LeftToRightOverride | RightToLeftEmbedding
            | RightToLeftOverride | PopDirectionalFormat | LeftToRightIsolate
            | RightToLeftIsolate | FirstStrongIsolate | PopDirectionalIsolate => {
                BidiType::Explicit
            }
        }
    }
}

enumeration! {
    /// Joining_Type, from `ArabicShaping.txt`.
    pub enum JoiningType {
        RightJoining = ("R", "Right_Joining"),
        LeftJoining = ("L", "Left_Joining"),
        DualJoining = ("D", "Dual_Joining"),
        JoinCausing = ("C", "Join_Causing"),
        NonJoining = ("U", "Non_Joining"),
        Transparent = ("T", "Transparent"),
    }
}

enumeration! {
    /// Bidi_Paired_Bracket_Type, from `BidiBrackets.txt`.
    pub enum BracketType {
        Open = ("o", "Open"),
        Close = ("c", "Close"),
    }
}

enumeration! {
    /// The status column of `CaseFolding.txt`.
    pub enum CaseFoldingStatus {
        Common = ("C", "Common"),
        Full = ("F", "Full"),
        Simple = ("S", "Simple"),
        /// Mappings for uppercase I and dotted uppercase I in Turkic languages.
        Turkic = ("T", "Turkic"),
    }
}

enumeration! {
    pub enum EastAsianWidth {
        Ambiguous = ("A", "Ambiguous"),
        Fullwidth = ("F", "Fullwidth"),
        Halfwidth = ("H", "Halfwidth"),
        Neutral = ("N", "Neutral"),
        Narrow = ("Na", "Narrow"),
        Wide = ("W", "Wide"),
    }
}

enumeration! {
    pub enum VerticalOrientation {
        Upright = ("U", "Upright"),
        Rotated = ("R", "Rotated"),
        TransformedUpright = ("Tu", "Transformed_Upright"),
        TransformedRotated = ("Tr", "Transformed_Rotated"),
    }
}

enumeration! {
    /// The type column of `NameAliases.txt`.
    pub enum NameAliasType {
        Correction = ("correction", "correction"),
        Control = ("control", "control"),
        Alternate = ("alternate", "alternate"),
        Figment = ("figment", "figment"),
        Abbreviation = ("abbreviation", "abbreviation"),
    }
}

enumeration! {
    /// The Unihan files, each grouping a family of `k`-prefixed fields.
    pub enum UnihanCategory {
        DictionaryIndices = ("DictionaryIndices", "dictionaryIndices"),
        DictionaryLikeData = ("DictionaryLikeData", "dictionaryLikeData"),
        IrgSources = ("IRGSources", "irgSources"),
        NumericValues = ("NumericValues", "numericValues"),
        OtherMappings = ("OtherMappings", "otherMappings"),
        RadicalStrokeCounts = ("RadicalStrokeCounts", "radicalStrokeCounts"),
        Readings = ("Readings", "readings"),
        Variants = ("Variants", "variants"),
    }
}

enumeration! {
    /// The variant fields of `Unihan_Variants.txt`.
    pub enum HanVariantKind {
        Semantic = ("kSemanticVariant", "semantic"),
        Simplified = ("kSimplifiedVariant", "simplified"),
        SpecializedSemantic = ("kSpecializedSemanticVariant", "specialisedSemantic"),
        Spoofing = ("kSpoofingVariant", "spoofing"),
        Traditional = ("kTraditionalVariant", "traditional"),
        Z = ("kZVariant", "z"),
    }
}

enumeration! {
    /// The tag column of `NushuSources.txt` and `TangutSources.txt`.
    pub enum SourceTag {
        NushuSource = ("kSrc_NushuDuben", "nushuSource"),
        NushuCommonReading = ("kReading", "nushuCommonReading"),
        TangutMergedSource = ("kTGT_MergedSrc", "tangutMergedSource"),
        RadicalStrokeIndexes = ("kRSTUnicode", "radicalStrokeIndexes"),
    }
}

/// Convert a UCD identifier such as `White_Space`, `IDS_Binary_Operator` or
/// (with its `k` already removed) the Unihan field `RSUnicode` into the
/// lower camel case used for record keys: `whiteSpace`, `idsBinaryOperator`,
/// `rsUnicode`.
pub fn camel_case(name: &str) -> String {
    let upper_run = name.chars().take_while(char::is_ascii_uppercase).count();
    // An acronym running into a capitalised word keeps the word's capital:
    // `RSUnicode` -> `rsUnicode`.
    let lowered = match name.chars().nth(upper_run) {
        Some(next) if upper_run >= 2 && next.is_ascii_lowercase() => upper_run - 1,
        _ => upper_run,
    };

    name.chars()
        .enumerate()
        .filter(|&(_, c)| c != '_')
        .map(|(i, c)| if i < lowered { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[test]
fn abbreviations_round_trip() {
    for &gc in GeneralCategory::ALL {
        assert_eq!(GeneralCategory::from_abbr(gc.abbr()), Some(gc));
    }
    for &bc in BidiClass::ALL {
        assert_eq!(BidiClass::from_abbr(bc.abbr()), Some(bc));
    }
    assert_eq!(GeneralCategory::from_abbr("Xx"), None);
    assert_eq!(
        GeneralCategory::from_abbr("Lu").map(GeneralCategory::long_name),
        Some("Uppercase_Letter")
    );
    assert_eq!(EastAsianWidth::Narrow.to_string(), "Narrow");
}

#[test]
fn bidi_class_kinds() {
    assert_eq!(BidiClass::ArabicLetter.kind(), BidiType::Strong);
    assert_eq!(BidiClass::NonspacingMark.kind(), BidiType::Weak);
    assert_eq!(BidiClass::WhiteSpace.kind(), BidiType::Neutral);
    assert_eq!(BidiClass::FirstStrongIsolate.kind(), BidiType::Explicit);
}

#[test]
fn camel_case_names() {
    assert_eq!(camel_case("White_Space"), "whiteSpace");
    assert_eq!(camel_case("ID_Start"), "idStart");
    assert_eq!(camel_case("IDS_Binary_Operator"), "idsBinaryOperator");
    assert_eq!(camel_case("Emoji_Modifier_Base"), "emojiModifierBase");
    assert_eq!(camel_case("RSUnicode"), "rsUnicode");
    assert_eq!(camel_case("IRG_GSource"), "irgGSource");
    assert_eq!(camel_case("Cantonese"), "cantonese");
    assert_eq!(camel_case("Math"), "math");
}
