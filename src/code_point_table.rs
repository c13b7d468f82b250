//! The record store: one [`CharRecord`] per code point, kept in the order the
//! code points were first touched.

use indexmap::map::Iter;
use indexmap::IndexMap;

use crate::code_point::{format_code_point, CodePointValue};
use crate::error::{Error, Result};
use crate::record::{CharRecord, Patch};

type CodePointMap = IndexMap<u32, CharRecord>;

#[derive(Clone, Debug, Default)]
pub struct CodePointTable {
    map: CodePointMap,
}

pub struct CodePointTableIter<'a> {
    iter: Iter<'a, u32, CharRecord>,
}

impl<'a> Iterator for CodePointTableIter<'a> {
    type Item = (u32, &'a CharRecord);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(code, record)| (*code, record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl CodePointTable {
    pub fn new() -> CodePointTable {
        CodePointTable::default()
    }

    /// Look up a code point's record, without side effects.
    pub fn get(&self, code: u32) -> Option<&CharRecord> {
        self.map.get(&code)
    }

    /// Get-or-create: reading a code point that has no record yet inserts an
    /// empty one.  This is the normal way for loading code to reach a record,
    /// not an error path.
    pub(crate) fn get_or_create(&mut self, code: u32) -> &mut CharRecord {
        self.map.entry(code).or_default()
    }

    /// Apply `patch` to `target`: to the code point itself, or to every code
    /// point of an inclusive range exactly once.  Fields named by the patch
    /// overwrite same-named scalar fields; everything else is left alone.
    pub(crate) fn set<P: Into<Patch>>(&mut self, target: &CodePointValue, patch: P) -> Result<()> {
        let patch = patch.into();
        match *target {
            CodePointValue::Single(code) => self.apply(code, &patch),
            CodePointValue::Range(first, last) => {
                for code in first..=last {
                    self.apply(code, &patch)?;
                }
                Ok(())
            }
            CodePointValue::Sequence(_) => Err(Error::SequenceTarget {
                text: target.to_string(),
            }),
        }
    }

    fn apply(&mut self, code: u32, patch: &Patch) -> Result<()> {
        let record = self.get_or_create(code);
        for property in patch.properties() {
            record.apply(code, property.clone())?;
        }
        Ok(())
    }

    pub fn contains(&self, code: u32) -> bool {
        self.map.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Code points and their records, in first-insertion order.
    pub fn iter(&self) -> CodePointTableIter<'_> {
        CodePointTableIter {
            iter: self.map.iter(),
        }
    }

    pub fn name(&self, code: u32) -> Option<&str> {
        self.get(code).and_then(|record| record.name.as_deref())
    }

    /// `U+0041 LATIN CAPITAL LETTER A`, or just the code for unnamed points.
    pub fn full_name(&self, code: u32) -> String {
        match self.name(code) {
            Some(name) => format!("{} {}", format_code_point(code), name),
            None => format_code_point(code),
        }
    }
}

impl<'a> IntoIterator for &'a CodePointTable {
    type Item = (u32, &'a CharRecord);
    type IntoIter = CodePointTableIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
use crate::constants::LATIN_CAPITAL_LETTER_A;
#[cfg(test)]
use crate::handlers::derived_core_properties::BinaryProperty;
#[cfg(test)]
use crate::record::Property;

#[test]
fn get_or_create_is_distinct_from_get() {
    let mut table = CodePointTable::new();
    assert!(table.get(LATIN_CAPITAL_LETTER_A).is_none());
    assert!(table.is_empty());

    assert_eq!(*table.get_or_create(LATIN_CAPITAL_LETTER_A), CharRecord::default());
    assert!(table.contains(LATIN_CAPITAL_LETTER_A));
    assert_eq!(table.len(), 1);
}

#[test]
fn set_merges_without_discarding() {
    let mut table = CodePointTable::new();
    let a = CodePointValue::Single(LATIN_CAPITAL_LETTER_A);

    table
        .set(&a, Property::Name("LATIN CAPITAL LETTER A".into()))
        .unwrap();
    table.set(&a, BinaryProperty::Alphabetic).unwrap();
    table
        .set(
            &a,
            vec![
                Property::Script("Latin".into()),
                Property::Block("Basic Latin".into()),
            ],
        )
        .unwrap();

    let record = table.get(LATIN_CAPITAL_LETTER_A).unwrap();
    assert_eq!(record.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
    assert!(record.has(BinaryProperty::Alphabetic));
    assert_eq!(record.script.as_deref(), Some("Latin"));
    assert_eq!(table.full_name(LATIN_CAPITAL_LETTER_A), "U+0041 LATIN CAPITAL LETTER A");
    assert_eq!(table.full_name(0x378), "U+0378");
}

#[test]
fn ranges_touch_each_code_point_once() {
    let mut table = CodePointTable::new();
    table.set(&CodePointValue::Single(0x10), Property::Script("Before".into())).unwrap();
    table
        .set(&CodePointValue::Range(0x20, 0x2F), Property::Script("Common".into()))
        .unwrap();

    let touched = table
        .iter()
        .filter(|(_, record)| record.script.as_deref() == Some("Common"))
        .map(|(code, _)| code)
        .collect::<Vec<_>>();
    assert_eq!(touched, (0x20..=0x2F).collect::<Vec<_>>());
    assert!(!table.contains(0x1F));
    assert!(!table.contains(0x30));

    // Insertion order, not numeric order.
    assert_eq!(table.iter().next().map(|(code, _)| code), Some(0x10));
}

#[test]
fn sequences_are_not_targets() {
    let mut table = CodePointTable::new();
    let sequence = CodePointValue::parse("0023 FE0F").unwrap();
    assert!(matches!(
        table.set(&sequence, BinaryProperty::Emoji),
        Err(Error::SequenceTarget { .. })
    ));
    assert!(table.is_empty());
}
