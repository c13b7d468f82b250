//! A crate that loads the Unicode Character Database, a directory of
//! semicolon- and tab-separated text files, into one queryable in-memory
//! database of per-code-point records.
//!
//! ```no_run
//! let ucd = unitome::Ucd::load("ucd")?;
//! let a = ucd.get(0x41).expect("loaded");
//! assert_eq!(a.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
//! # Ok::<(), unitome::Error>(())
//! ```

pub mod code_point;
pub mod code_point_table;
pub mod constants;
pub mod database;
pub mod enums;
pub mod error;
pub mod handlers;
pub mod line_source;
pub mod loader;
pub mod record;
pub mod types;

pub use code_point::{format_code_point, CodePointValue};
pub use code_point_table::CodePointTable;
pub use database::{CjkRadical, NamedSequences, Ucd, VariationSequence};
pub use error::{Error, Result};
pub use handlers::derived_core_properties::BinaryProperty;
pub use handlers::property_aliases::PropertyAliases;
pub use loader::Loader;
pub use record::CharRecord;
