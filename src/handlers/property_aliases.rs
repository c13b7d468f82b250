//! `PropertyAliases.txt`: each line names one property by its short name,
//! long name and any further aliases.
//! ```text
//! scf ; Simple_Case_Folding ; sfc
//! ```
//! Unlike every other file this annotates no code point; it builds the
//! symmetric [`PropertyAliases`] table.

use indexmap::IndexMap;

use super::{Row, Update};
use crate::error::Result;

pub fn parse(row: &Row) -> Result<Vec<Update>> {
    let names = (0..row.len())
        .filter_map(|i| row.optional(i))
        .map(str::to_string)
        .collect::<Vec<_>>();
    if names.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![Update::PropertyAliases(names)])
}

/// Every property name mapped to all of its other names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyAliases {
    map: IndexMap<String, Vec<String>>,
}

impl PropertyAliases {
    /// Record a group of names for one property.  A lone name maps to itself.
    pub(crate) fn insert(&mut self, names: &[String]) {
        for name in names {
            let mut others = names
                .iter()
                .filter(|other| *other != name)
                .cloned()
                .collect::<Vec<_>>();
            if others.is_empty() {
                others.push(name.clone());
            }
            self.map.insert(name.clone(), others);
        }
    }

    /// The other names of `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.map.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
use super::row;

#[test]
fn check_alias_table_is_symmetric() {
    let mut aliases = PropertyAliases::default();
    for line in [
        row(&["scf", "Simple_Case_Folding", "sfc"]),
        row(&["age", "Age"]),
    ] {
        for update in parse(&line).unwrap() {
            match update {
                Update::PropertyAliases(names) => aliases.insert(&names),
                other => panic!("unexpected update {:?}", other),
            }
        }
    }

    assert_eq!(aliases.get("age").unwrap(), ["Age"]);
    assert_eq!(aliases.get("Age").unwrap(), ["age"]);
    assert_eq!(aliases.get("scf").unwrap(), ["Simple_Case_Folding", "sfc"]);
    assert_eq!(aliases.get("sfc").unwrap(), ["scf", "Simple_Case_Folding"]);
    assert_eq!(aliases.len(), 5);

    aliases.insert(&["kIICore".to_string()]);
    assert_eq!(aliases.get("kIICore").unwrap(), ["kIICore"]);
    assert_eq!(aliases.get("missing"), None);
}
