//! Orchestrates every file handler against a fresh [`Ucd`].
//!
//! Loading runs in two phases.  Within a phase each file is read and parsed on
//! its own thread, since handlers are pure; the resulting updates are then
//! applied in handler table order, so the outcome does not depend on thread
//! scheduling.  The derived phase starts only after every base update has
//! been applied.  Any failure aborts the whole load.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::thread;

use log::{debug, info};

use crate::database::Ucd;
use crate::error::{Error, Result};
use crate::handlers::{pair_ranges, Handler, Phase, Row, Update, HANDLERS};
use crate::line_source::{Line, LineSource};

#[derive(Clone, Debug)]
pub struct Loader {
    root: PathBuf,
    only: Option<BTreeSet<String>>,
    concurrent: bool,
}

impl Loader {
    /// A loader reading every known file under `root`, concurrently.
    pub fn new<P: Into<PathBuf>>(root: P) -> Loader {
        Loader {
            root: root.into(),
            only: None,
            concurrent: true,
        }
    }

    /// Restrict loading to the named files, given as handler paths without
    /// extension (`UnicodeData`, `extracted/DerivedName`, ...).  Files not
    /// named are not read at all; named files must exist, and a name that is
    /// no known file fails the load with [`Error::UnknownFile`].
    pub fn only<I, S>(mut self, files: I) -> Loader
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Parse files one after another on the calling thread instead.
    pub fn concurrent(mut self, concurrent: bool) -> Loader {
        self.concurrent = concurrent;
        self
    }

    pub fn load(&self) -> Result<Ucd> {
        if let Some(only) = &self.only {
            if let Some(name) = only
                .iter()
                .find(|name| !HANDLERS.iter().any(|handler| handler.file == name.as_str()))
            {
                return Err(Error::UnknownFile { name: name.clone() });
            }
        }

        let mut ucd = Ucd::default();
        self.run_phase(Phase::Base, &mut ucd)?;
        self.run_phase(Phase::Derived, &mut ucd)?;
        info!(
            "loaded {} code points from {}",
            ucd.chars().len(),
            self.root.display()
        );
        Ok(ucd)
    }

    fn handlers(&self, phase: Phase) -> Vec<&'static Handler> {
        HANDLERS
            .iter()
            .filter(|handler| handler.phase == phase)
            .filter(|handler| match &self.only {
                Some(only) => only.contains(handler.file),
                None => true,
            })
            .collect()
    }

    pub(crate) fn run_phase(&self, phase: Phase, ucd: &mut Ucd) -> Result<()> {
        let handlers = self.handlers(phase);

        let parsed = if self.concurrent {
            thread::scope(|scope| {
                let workers = handlers
                    .iter()
                    .map(|&handler| (handler, scope.spawn(move || self.read(handler))))
                    .collect::<Vec<_>>();
                workers
                    .into_iter()
                    .map(|(handler, worker)| {
                        worker.join().unwrap_or_else(|_| {
                            Err(Error::WorkerPanicked {
                                file: handler.file,
                            })
                        })
                    })
                    .collect::<Vec<_>>()
            })
        } else {
            handlers
                .iter()
                .map(|&handler| self.read(handler))
                .collect()
        };

        for (handler, updates) in handlers.iter().zip(parsed) {
            let updates = updates?;
            let count = updates.len();
            for (line, update) in updates {
                ucd.apply(update).map_err(|e| e.at(handler.file, line))?;
            }
            debug!("applied {} updates from {}", count, handler.file);
        }

        info!("{:?} phase complete: {} files", phase, handlers.len());
        Ok(())
    }

    /// Read and parse one file into its updates, each tagged with the line it
    /// came from.
    fn read(&self, handler: &Handler) -> Result<Vec<(usize, Update)>> {
        let path = self.root.join(format!("{}.txt", handler.file));
        let io_error = |source| Error::Io {
            path: path.clone(),
            source,
        };

        let mut updates = vec![];
        for line in LineSource::open(&path, handler.line_options()).map_err(io_error)? {
            let Line { number, fields } = line.map_err(io_error)?;
            let row = Row::new(fields);
            let parsed = (handler.parse)(&row).map_err(|e| e.at(handler.file, number))?;
            updates.extend(parsed.into_iter().map(|update| (number, update)));
        }

        debug!("read {} updates from {}", updates.len(), path.display());
        pair_ranges(updates)
    }
}

#[cfg(test)]
fn fixture(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temporary directory");
    for (file, contents) in files {
        let path = dir.path().join(format!("{}.txt", file));
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create directory");
        std::fs::write(path, contents).expect("write fixture");
    }
    dir
}

#[test]
fn base_phase_twice_is_idempotent() {
    let dir = fixture(&[
        ("UnicodeData", "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n"),
        ("Blocks", "0000..007F; Basic Latin\n"),
        ("NameAliases", "0041;LETTER A;alternate\n"),
        ("SpecialCasing", "0041; 0061; 0041; 0041; # LATIN CAPITAL LETTER A\n"),
        ("unihan/Unihan_Variants", "U+4E7E\tkSimplifiedVariant\tU+5E72\n"),
    ]);
    let loader = Loader::new(dir.path()).only([
        "UnicodeData",
        "Blocks",
        "NameAliases",
        "SpecialCasing",
        "unihan/Unihan_Variants",
    ]);

    let mut once = Ucd::default();
    loader.run_phase(Phase::Base, &mut once).unwrap();
    let mut twice = Ucd::default();
    loader.run_phase(Phase::Base, &mut twice).unwrap();
    loader.run_phase(Phase::Base, &mut twice).unwrap();

    assert_eq!(once.chars().len(), twice.chars().len());
    for (code, record) in once.iter() {
        assert_eq!(Some(record), twice.get(code), "U+{:04X}", code);
    }
    let a = twice.get(0x41).unwrap();
    assert_eq!(a.aliases.len(), 1);
    assert_eq!(a.special_casing.len(), 1);
}

#[test]
fn sequential_and_concurrent_loads_agree() {
    let dir = fixture(&[
        ("UnicodeData", "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\n"),
        ("Scripts", "0041..005A ; Latin\n0061..007A ; Latin\n"),
    ]);
    let loader = Loader::new(dir.path()).only(["UnicodeData", "Scripts"]);

    let concurrent = loader.load().unwrap();
    let sequential = loader.clone().concurrent(false).load().unwrap();

    let codes = |ucd: &Ucd| ucd.iter().map(|(code, _)| code).collect::<Vec<_>>();
    assert_eq!(codes(&concurrent), codes(&sequential));
    assert_eq!(concurrent.get(0x61), sequential.get(0x61));
    // UnicodeData comes first in the handler table.
    assert_eq!(&codes(&concurrent)[..2], &[0x41, 0x61]);
}

#[test]
fn missing_selected_file_is_fatal() {
    let dir = fixture(&[]);
    match Loader::new(dir.path()).only(["Blocks"]).load() {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("Blocks.txt")),
        other => panic!("expected an I/O error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn unknown_selected_file_is_rejected() {
    let dir = fixture(&[("Blocks", "0000..007F; Basic Latin\n")]);
    match Loader::new(dir.path()).only(["Blocks", "Blokcs"]).load() {
        Err(Error::UnknownFile { name }) => assert_eq!(name, "Blokcs"),
        other => panic!("expected an unknown file error, got {:?}", other.map(|_| ())),
    }
}
