//! End-to-end loads of small UCD directories written to a temporary
//! directory.

use std::fs;

use tempfile::TempDir;
use unitome::constants::{
    CHARACTER_TABULATION, CJK_UNIFIED_IDEOGRAPH_FIRST, LATIN_CAPITAL_LETTER_A,
    LATIN_SMALL_LETTER_A, LINE_FEED, SPACE, VARIATION_SELECTOR_16, VULGAR_FRACTION_ONE_THIRD,
};
use unitome::enums::{GeneralCategory, HanVariantKind};
use unitome::{BinaryProperty, Error, Loader, Ucd};

fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (file, contents) in files {
        let path = dir.path().join(format!("{}.txt", file));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

fn load(dir: &TempDir, files: &[&str]) -> unitome::Result<Ucd> {
    Loader::new(dir.path()).only(files.iter().copied()).load()
}

/// The innermost error beneath any file/line location.
fn innermost(e: &Error) -> &Error {
    match e {
        Error::AtLine { source, .. } => innermost(source),
        e => e,
    }
}

#[test]
fn unicode_data_line() {
    let dir = fixture(&[(
        "UnicodeData",
        "# leading comment\n\
         0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
         \n\
         0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\n",
    )]);
    let ucd = load(&dir, &["UnicodeData"]).unwrap();

    let a = ucd.get(LATIN_CAPITAL_LETTER_A).unwrap();
    assert_eq!(a.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
    assert_eq!(a.general_category, Some(GeneralCategory::UppercaseLetter));
    assert_eq!(
        a.general_category.map(|gc| gc.to_string()).as_deref(),
        Some("Uppercase_Letter")
    );
    assert_eq!(a.lower_case_mapping, Some(LATIN_SMALL_LETTER_A));
    assert_eq!(a.upper_case_mapping, None);
    assert!(!a.mirrored);

    let small = ucd.get(LATIN_SMALL_LETTER_A).unwrap();
    assert_eq!(small.upper_case_mapping, Some(LATIN_CAPITAL_LETTER_A));
    assert_eq!(ucd.chars().len(), 2);
}

#[test]
fn blocks_cover_their_whole_range() {
    let dir = fixture(&[("Blocks", "0000..007F; Basic Latin\n0080..00FF; Latin-1 Supplement\n")]);
    let ucd = load(&dir, &["Blocks"]).unwrap();

    for code in 0x00..=0x7F {
        assert_eq!(
            ucd.get(code).and_then(|r| r.block.as_deref()),
            Some("Basic Latin"),
            "U+{:04X}",
            code
        );
    }
    assert_eq!(ucd.get(0x80).unwrap().block.as_deref(), Some("Latin-1 Supplement"));
    assert_eq!(ucd.block("Basic Latin"), Some(0x00..=0x7F));
    assert_eq!(
        ucd.blocks().map(|(name, _)| name).collect::<Vec<_>>(),
        ["Basic Latin", "Latin-1 Supplement"]
    );
    assert!(ucd.get(0x100).is_none());
}

#[test]
fn white_space_flags() {
    let dir = fixture(&[(
        "PropList",
        "0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>\n\
         0020          ; White_Space # Zs       SPACE\n\
         0021          ; Some_Future_Property\n",
    )]);
    let ucd = load(&dir, &["PropList"]).unwrap();

    let spaces = ucd.with_property(BinaryProperty::WhiteSpace);
    assert!(spaces.contains(&CHARACTER_TABULATION));
    assert!(spaces.contains(&LINE_FEED));
    assert!(spaces.contains(&SPACE));
    assert_eq!(spaces.len(), 6);

    let other = &ucd.get(0x21).unwrap().other_properties;
    assert!(other.contains("someFutureProperty"));
}

#[test]
fn explicit_names_win_over_derived_names() {
    let dir = fixture(&[
        (
            "UnicodeData",
            "4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n\
             4E05;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;\n\
             4E06;EXPLICIT NAME;Lo;0;L;;;;;N;;;;;\n",
        ),
        (
            "extracted/DerivedName",
            "4E00..4E06    ; CJK UNIFIED IDEOGRAPH-*\n0041          ; LATIN CAPITAL LETTER A\n",
        ),
    ]);
    let ucd = load(&dir, &["UnicodeData", "extracted/DerivedName"]).unwrap();

    // The First/Last pair annotated the whole range, without a name.
    for code in CJK_UNIFIED_IDEOGRAPH_FIRST..=0x4E05 {
        let record = ucd.get(code).unwrap();
        assert_eq!(record.general_category, Some(GeneralCategory::OtherLetter));
        assert_eq!(
            record.name.clone(),
            Some(format!("CJK UNIFIED IDEOGRAPH-{:04X}", code))
        );
    }
    assert_eq!(ucd.get(0x4E06).unwrap().name.as_deref(), Some("EXPLICIT NAME"));
    assert_eq!(
        ucd.chars().full_name(LATIN_CAPITAL_LETTER_A),
        "U+0041 LATIN CAPITAL LETTER A"
    );
}

#[test]
fn unpaired_first_row_is_fatal() {
    let dir = fixture(&[("UnicodeData", "AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;\n")]);
    let e = load(&dir, &["UnicodeData"]).unwrap_err();
    assert!(matches!(innermost(&e), Error::UnpairedRange { code: 0xAC00 }));
}

#[test]
fn derived_numeric_values_prefer_the_rational() {
    let dir = fixture(&[
        (
            "UnicodeData",
            "2153;VULGAR FRACTION ONE THIRD;No;0;ON;<fraction> 0031 2044 0033;;;1/3;N;FRACTION ONE THIRD;;;;\n",
        ),
        (
            "extracted/DerivedNumericValues",
            "2153          ; 0.333333    ; ; 1/3 # No       VULGAR FRACTION ONE THIRD\n\
             0035          ; 5.0         ; ; 5 # Nd       DIGIT FIVE\n",
        ),
    ]);
    let ucd = load(&dir, &["UnicodeData", "extracted/DerivedNumericValues"]).unwrap();

    let third = ucd.get(VULGAR_FRACTION_ONE_THIRD).unwrap().numeric_value.unwrap();
    assert!((third - 0.333333).abs() < 1e-6);
    assert_eq!(ucd.get(0x35).unwrap().numeric_value, Some(5.0));
}

#[test]
fn zero_denominator_is_fatal() {
    let dir = fixture(&[("extracted/DerivedNumericValues", "2153 ; 0.0 ; ; 1/0\n")]);
    let e = load(&dir, &["extracted/DerivedNumericValues"]).unwrap_err();
    assert!(matches!(innermost(&e), Error::BadFraction { .. }));
    assert!(e.to_string().starts_with("extracted/DerivedNumericValues:1:"));
}

#[test]
fn missing_file_is_fatal() {
    let dir = fixture(&[("Blocks", "0000..007F; Basic Latin\n")]);
    match load(&dir, &["Blocks", "Scripts"]) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("Scripts.txt")),
        other => panic!("expected an I/O error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn han_variants() {
    let dir = fixture(&[(
        "unihan/Unihan_Variants",
        "U+4E7E\tkSimplifiedVariant\tU+5E72\n\
         U+4E7E\tkSimplifiedVariant\tU+5E72\n",
    )]);
    let ucd = load(&dir, &["unihan/Unihan_Variants"]).unwrap();
    let han = ucd.get(0x4E7E).unwrap().han.as_ref().unwrap();
    assert_eq!(
        han.variants.get(&HanVariantKind::Simplified).map(String::as_str),
        Some("U+5E72")
    );

    let dir = fixture(&[(
        "unihan/Unihan_Variants",
        "U+4E7E\tkSimplifiedVariant\tU+5E72\n\
         U+4E7E\tkSimplifiedVariant\tU+4E81\n",
    )]);
    let e = load(&dir, &["unihan/Unihan_Variants"]).unwrap_err();
    assert!(matches!(
        innermost(&e),
        Error::ConflictingVariant {
            code: 0x4E7E,
            kind: HanVariantKind::Simplified,
            ..
        }
    ));
    assert!(e.to_string().starts_with("unihan/Unihan_Variants:2:"));
}

#[test]
fn aliases_and_sequences() {
    let dir = fixture(&[
        (
            "PropertyAliases",
            "# Property aliases\nsc  ; Script\nscf ; Simple_Case_Folding ; sfc\n",
        ),
        (
            "NamedSequences",
            "KEYCAP NUMBER SIGN;0023 FE0F 20E3\n",
        ),
        (
            "NamedSequencesProv",
            "TAMIL SYLLABLE KSSA;0B95 0BCD 0BB7\n",
        ),
        (
            "emoji/emoji-variation-sequences",
            "0023 FE0F  ; emoji style;  # (1.1) NUMBER SIGN\n",
        ),
    ]);
    let ucd = load(
        &dir,
        &[
            "PropertyAliases",
            "NamedSequences",
            "NamedSequencesProv",
            "emoji/emoji-variation-sequences",
        ],
    )
    .unwrap();

    let aliases = ucd.property_aliases();
    assert_eq!(aliases.get("sc").unwrap(), ["Script"]);
    assert_eq!(aliases.get("sfc").unwrap(), ["scf", "Simple_Case_Folding"]);

    assert_eq!(
        ucd.named_sequence("KEYCAP NUMBER SIGN"),
        Some(&[0x23, VARIATION_SELECTOR_16, 0x20E3][..])
    );
    assert_eq!(
        ucd.named_sequence("TAMIL SYLLABLE KSSA"),
        Some(&[0x0B95, 0x0BCD, 0x0BB7][..])
    );
    assert!(ucd.named_sequences().provisional.contains_key("TAMIL SYLLABLE KSSA"));

    let variation = ucd.variation_sequence(&[0x23, VARIATION_SELECTOR_16]).unwrap();
    assert_eq!(variation.description, "emoji style");

    // None of these files annotate code points.
    assert!(ucd.chars().is_empty());
}

#[test]
fn unknown_source_tags_are_kept() {
    let dir = fixture(&[(
        "TangutSources",
        "U+18B00\tkTGT_MergedSrc\tL2008-0001\n\
         U+18B00\tkTGT_NewField\tL2008-0002\n",
    )]);
    let ucd = load(&dir, &["TangutSources"]).unwrap();

    let record = ucd.get(0x18B00).unwrap();
    assert_eq!(record.tangut_merged_source.as_deref(), Some("L2008-0001"));
    assert_eq!(
        record.other_sources.get("kTGT_NewField").map(String::as_str),
        Some("L2008-0002")
    );
}
