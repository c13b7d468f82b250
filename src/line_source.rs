//! Reading UCD text files as a lazy sequence of logical lines.
//!
//! File format is, for nearly every file:
//! ```text
//! <field>; <field>; ... # <comment>
//! ```
//! with the Unihan family (and a few others) separating fields by tabs.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// How a file's lines are split into fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineOptions {
    /// Field separator, or `None` to deliver each line as a single field.
    pub delimiter: Option<char>,

    /// Everything from this character to the end of the line is dropped.
    pub comment: Option<char>,
}

impl LineOptions {
    pub const fn new(delimiter: Option<char>, comment: Option<char>) -> LineOptions {
        LineOptions { delimiter, comment }
    }
}

/// One non-blank logical line, already split into trimmed fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// 1-based physical line number within the file.
    pub number: usize,
    pub fields: Vec<String>,
}

pub struct LineSource<R> {
    reader: R,
    options: LineOptions,
    number: usize,
    buf: String,
}

impl LineSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P, options: LineOptions) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(LineSource::new(BufReader::new(file), options))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, options: LineOptions) -> LineSource<R> {
        LineSource {
            reader,
            options,
            number: 0,
            buf: String::new(),
        }
    }

    fn split(&self, text: &str) -> Vec<String> {
        match self.options.delimiter {
            Some(delimiter) => text
                .split(delimiter)
                .map(|field| field.trim().to_string())
                .collect(),
            None => vec![text.to_string()],
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.number += 1;

            let line = self.buf.trim_end_matches(|c| c == '\n' || c == '\r');
            let line = match self.options.comment {
                Some(marker) => line.split(marker).next().unwrap_or(""),
                None => line,
            };
            if line.trim().is_empty() {
                continue;
            }

            let fields = self.split(line);
            return Some(Ok(Line {
                number: self.number,
                fields,
            }));
        }
    }
}

#[cfg(test)]
fn collect(text: &str, options: LineOptions) -> Vec<Line> {
    LineSource::new(text.as_bytes(), options)
        .collect::<io::Result<Vec<_>>>()
        .expect("reading from memory")
}

#[test]
fn strips_comments_and_blank_lines() {
    let text = "# Blocks-15.1.0.txt\n\n0000..007F; Basic Latin\r\n0080..00FF; Latin-1 Supplement # trailing\n   # indented comment\n";
    let lines = collect(text, LineOptions::new(Some(';'), Some('#')));
    assert_eq!(
        lines,
        vec![
            Line {
                number: 3,
                fields: vec!["0000..007F".to_string(), "Basic Latin".to_string()],
            },
            Line {
                number: 4,
                fields: vec!["0080..00FF".to_string(), "Latin-1 Supplement".to_string()],
            },
        ]
    );
}

#[test]
fn tab_delimited_and_whole_lines() {
    let lines = collect(
        "U+4E00\tkDefinition\tone; a, an; alone\n",
        LineOptions::new(Some('\t'), Some('#')),
    );
    assert_eq!(lines[0].fields, ["U+4E00", "kDefinition", "one; a, an; alone"]);

    let lines = collect("a;b # c\n", LineOptions::new(None, None));
    assert_eq!(lines[0].fields, ["a;b # c"]);
}

#[test]
fn final_line_without_newline() {
    let lines = collect("0041;A\n0042;B", LineOptions::new(Some(';'), None));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].fields, ["0042", "B"]);
}
