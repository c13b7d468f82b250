//! The loaded database: per-code-point records plus the tables that are keyed
//! by something other than a single code point.
//!
//! A [`Ucd`] is only ever handed out fully loaded, and exposes no mutation.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::path::Path;

use indexmap::IndexMap;

use crate::code_point::CodePointValue;
use crate::code_point_table::{CodePointTable, CodePointTableIter};
use crate::error::{Error, Result};
use crate::handlers::derived::expand_name_template;
use crate::handlers::derived_core_properties::BinaryProperty;
use crate::handlers::property_aliases::PropertyAliases;
use crate::handlers::Update;
use crate::loader::Loader;
use crate::record::{CharRecord, Property};
use crate::types::{CodePointRange, CodePointSequence, CodePointSet};

/// An entry of `CJKRadicals.txt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CjkRadical {
    /// The radical's own character, when it has one.
    pub character: Option<u32>,
    pub unified_ideograph: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariationSequence {
    pub description: String,
    /// Shaping environments (`isolate`, `medial`, ...), if restricted.
    pub environments: BTreeSet<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamedSequences {
    pub approved: IndexMap<String, CodePointSequence>,
    pub provisional: IndexMap<String, CodePointSequence>,
}

#[derive(Clone, Debug, Default)]
pub struct Ucd {
    pub(crate) chars: CodePointTable,
    pub(crate) blocks: IndexMap<String, CodePointRange>,
    pub(crate) brackets: BTreeMap<u32, u32>,
    pub(crate) mirrored: BTreeMap<u32, u32>,
    pub(crate) radicals: IndexMap<String, CjkRadical>,
    pub(crate) named_sequences: NamedSequences,
    pub(crate) variation_sequences: IndexMap<CodePointSequence, VariationSequence>,
    pub(crate) property_aliases: PropertyAliases,
}

impl Ucd {
    /// Load every file under `root` using the default [`Loader`].
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Ucd> {
        Loader::new(root.as_ref()).load()
    }

    pub fn get(&self, code: u32) -> Option<&CharRecord> {
        self.chars.get(code)
    }

    pub fn chars(&self) -> &CodePointTable {
        &self.chars
    }

    /// `(code point, record)` pairs in insertion order.
    pub fn iter(&self) -> CodePointTableIter<'_> {
        self.chars.iter()
    }

    /// Every code point having `property`, in ascending order.
    pub fn with_property(&self, property: BinaryProperty) -> CodePointSet {
        self.iter()
            .filter(|(_, record)| record.has(property))
            .map(|(code, _)| code)
            .collect()
    }

    pub fn block(&self, name: &str) -> Option<RangeInclusive<u32>> {
        self.blocks.get(name).map(|&(first, last)| first..=last)
    }

    /// Block names and ranges in file order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, RangeInclusive<u32>)> {
        self.blocks
            .iter()
            .map(|(name, &(first, last))| (name.as_str(), first..=last))
    }

    /// The closing bracket paired with an opening one.
    pub fn closing_bracket(&self, open: u32) -> Option<u32> {
        self.brackets.get(&open).copied()
    }

    pub fn mirror(&self, code: u32) -> Option<u32> {
        self.mirrored.get(&code).copied()
    }

    pub fn radical(&self, number: &str) -> Option<&CjkRadical> {
        self.radicals.get(number)
    }

    pub fn named_sequences(&self) -> &NamedSequences {
        &self.named_sequences
    }

    /// An approved named sequence, falling back to a provisional one.
    pub fn named_sequence(&self, name: &str) -> Option<&[u32]> {
        self.named_sequences
            .approved
            .get(name)
            .or_else(|| self.named_sequences.provisional.get(name))
            .map(Vec::as_slice)
    }

    pub fn variation_sequence(&self, sequence: &[u32]) -> Option<&VariationSequence> {
        self.variation_sequences.get(sequence)
    }

    pub fn variation_sequences(&self) -> impl Iterator<Item = (&[u32], &VariationSequence)> {
        self.variation_sequences
            .iter()
            .map(|(sequence, variation)| (sequence.as_slice(), variation))
    }

    pub fn property_aliases(&self) -> &PropertyAliases {
        &self.property_aliases
    }

    pub(crate) fn apply(&mut self, update: Update) -> Result<()> {
        match update {
            Update::Set { target, patch } => self.chars.set(&target, patch)?,
            Update::DerivedNames {
                range: (first, last),
                template,
            } => {
                for code in first..=last {
                    let name = expand_name_template(&template, code);
                    self.chars
                        .set(&CodePointValue::Single(code), Property::DerivedName(name))?;
                }
            }
            Update::Block { name, range } => {
                self.blocks.insert(name, range);
            }
            Update::Bracket { open, close } => {
                self.brackets.insert(open, close);
            }
            Update::Mirror { code, glyph } => {
                self.mirrored.insert(code, glyph);
            }
            Update::Radical {
                number,
                character,
                unified_ideograph,
            } => {
                self.radicals.insert(
                    number,
                    CjkRadical {
                        character,
                        unified_ideograph,
                    },
                );
            }
            Update::NamedSequence {
                provisional,
                name,
                sequence,
            } => {
                let table = if provisional {
                    &mut self.named_sequences.provisional
                } else {
                    &mut self.named_sequences.approved
                };
                table.insert(name, sequence);
            }
            Update::PropertyAliases(names) => self.property_aliases.insert(&names),
            Update::VariationSequence {
                sequence,
                description,
                environments,
            } => {
                let variation = self.variation_sequences.entry(sequence).or_default();
                variation.description = description;
                variation.environments.extend(environments);
            }
            // Paired up by the loader before anything is applied.
            Update::RangeFirst { code, .. } | Update::RangeLast { code } => {
                return Err(Error::UnpairedRange { code })
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ucd {
    type Item = (u32, &'a CharRecord);
    type IntoIter = CodePointTableIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn derived_names_fill_only_unnamed_code_points() {
    let mut ucd = Ucd::default();
    ucd.apply(Update::set(
        CodePointValue::Single(0x4E01),
        Property::Name("EXPLICIT".into()),
    ))
    .unwrap();
    ucd.apply(Update::DerivedNames {
        range: (0x4E00, 0x4E02),
        template: "CJK UNIFIED IDEOGRAPH-*".into(),
    })
    .unwrap();

    let names = ucd
        .iter()
        .map(|(code, record)| (code, record.name.clone().unwrap_or_default()))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            (0x4E01, "EXPLICIT".to_string()),
            (0x4E00, "CJK UNIFIED IDEOGRAPH-4E00".to_string()),
            (0x4E02, "CJK UNIFIED IDEOGRAPH-4E02".to_string()),
        ]
    );
}

#[test]
fn variation_sequences_merge() {
    let mut ucd = Ucd::default();
    for environments in [vec!["isolate".to_string()], vec!["medial".to_string()]] {
        ucd.apply(Update::VariationSequence {
            sequence: vec![0x1820, 0x180B],
            description: "second form".into(),
            environments,
        })
        .unwrap();
    }
    let variation = ucd.variation_sequence(&[0x1820, 0x180B]).unwrap();
    assert_eq!(variation.environments.len(), 2);
    assert!(ucd.variation_sequence(&[0x1820]).is_none());
}

#[test]
fn unpaired_range_rows_are_rejected() {
    let mut ucd = Ucd::default();
    assert!(ucd.apply(Update::RangeLast { code: 0x9FFF }).is_err());
}
