//! The error type shared by every stage of loading the database.

use std::io;
use std::path::PathBuf;

use crate::enums::HanVariantKind;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("field {field} is missing")]
    MissingField { field: usize },

    #[error("malformed code point {text:?}")]
    BadCodePoint { text: String },

    #[error("malformed number {text:?}")]
    BadNumber { text: String },

    #[error("bad fraction {text:?}")]
    BadFraction { text: String },

    #[error("U+{code:04X}: {kind} variant {new:?} conflicts with recorded {existing:?}")]
    ConflictingVariant {
        code: u32,
        kind: HanVariantKind,
        existing: String,
        new: String,
    },

    #[error("cannot assign properties to the sequence {text}")]
    SequenceTarget { text: String },

    #[error("range starting at U+{code:04X} has no closing row")]
    UnpairedRange { code: u32 },

    #[error("no handler reads a file named {name:?}")]
    UnknownFile { name: String },

    #[error("worker reading {file} panicked")]
    WorkerPanicked { file: &'static str },

    #[error("{file}:{line}: {source}")]
    AtLine {
        file: &'static str,
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the source file and line number a row-level error came from.
    pub(crate) fn at(self, file: &'static str, line: usize) -> Error {
        match self {
            // Already located, or not about a particular row.
            e @ (Error::AtLine { .. } | Error::Io { .. } | Error::WorkerPanicked { .. }) => e,
            e => Error::AtLine {
                file,
                line,
                source: Box::new(e),
            },
        }
    }
}

#[test]
fn located_errors_name_file_and_line() {
    let e = Error::BadFraction {
        text: "1/0".to_string(),
    }
    .at("extracted/DerivedNumericValues", 12);
    assert_eq!(
        e.to_string(),
        "extracted/DerivedNumericValues:12: bad fraction \"1/0\""
    );

    // Locating twice keeps the innermost location.
    let e = e.at("Blocks", 1);
    assert!(e.to_string().starts_with("extracted/DerivedNumericValues:12:"));
}
