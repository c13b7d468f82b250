use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use unitome::constants::MAX_BMP;
use unitome::enums::GeneralCategory;
use unitome::line_source::{LineOptions, LineSource};
use unitome::{format_code_point, BinaryProperty, CodePointValue, Ucd};

/// Look up characters in a local copy of the Unicode Character Database.
///
/// Each argument is either a code point value (`U+0041`, `1F600`,
/// `0041..005A`, `0041 0301`) whose code points are shown, or text whose
/// characters are shown.  With no arguments and piped input, every character
/// of standard input is shown in short form.
#[derive(Debug, Parser)]
struct CliArgs {
    /// Directory holding the UCD text files.
    #[arg(long, env = "UNITOME_UCD", default_value = "ucd")]
    ucd: PathBuf,

    /// One line per code point: `U+0041 LATIN CAPITAL LETTER A`.
    #[arg(long)]
    short: bool,

    /// Log more while loading; repeat for more still.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    inputs: Vec<String>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> unitome::Result<()> {
    let CliArgs {
        ucd, short, inputs, ..
    } = args;

    let ucd = Ucd::load(&ucd)?;
    log::debug!(
        "{} blocks, {} property names",
        ucd.blocks().count(),
        ucd.property_aliases().len()
    );

    if inputs.is_empty() && !io::stdin().is_terminal() {
        let stdin = io::stdin().lock();
        for line in LineSource::new(stdin, LineOptions::new(None, None)) {
            let line = line.map_err(|source| unitome::Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
            for text in &line.fields {
                text.chars().for_each(|c| show(&ucd, c as u32, true));
            }
        }
        return Ok(());
    }

    for input in &inputs {
        match CodePointValue::parse(input) {
            Some(value) => value
                .code_points()
                .into_iter()
                .for_each(|code| show(&ucd, code, short)),
            None => input.chars().for_each(|c| show(&ucd, c as u32, short)),
        }
    }
    Ok(())
}

fn show(ucd: &Ucd, code: u32, short: bool) {
    if short {
        println!("{}", ucd.chars().full_name(code));
        return;
    }

    let Some(record) = ucd.get(code) else {
        println!("{}: not in the database", format_code_point(code));
        return;
    };

    println!("{}", ucd.chars().full_name(code));
    if code > MAX_BMP {
        let mut units = [0u16; 2];
        if let Some(c) = char::from_u32(code) {
            let units = c.encode_utf16(&mut units);
            println!("UTF-16: {:04X} {:04X}", units[0], units[1]);
        }
    }

    let printable = record.general_category != Some(GeneralCategory::Control)
        && !record.has(BinaryProperty::WhiteSpace);
    if printable && io::stdout().is_terminal() {
        if let Some(c) = char::from_u32(code) {
            // DEC double-height line, top half then bottom half.
            println!("\x1B#3{c}\n\x1B#4{c}");
        }
    }

    println!("{:#?}", record);
}
