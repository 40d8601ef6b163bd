//! autodoc: generate Amiga-style autodocs from annotated source files.
//!
//! Scans every input for autodoc comment blocks, sorts them by name and
//! prints a single reference document:
//!
//! - a table of contents (unless `-I`)
//! - one entry per block, body lines wrapped once at the line width
//! - a form feed after the table of contents and after each entry (unless `-f`)
//!
//! `autodoc -l 72 src/*.c > library.doc`

mod config;
mod input;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, DEFAULT_LINE_WIDTH};
use log::debug;
use model::AutodocList;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autodoc",
    version,
    about = "Generate Amiga-style autodocs from source code"
)]
struct Cli {
    /// Input files (glob patterns supported)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<String>,

    /// Process only INTERNAL (i) autodocs
    #[arg(short = 'i', long)]
    restrict_internal: bool,

    /// Process only OBSOLETE (o) autodocs
    #[arg(short = 'o', long)]
    restrict_obsolete: bool,

    /// Also process FUTURE (f) autodocs
    #[arg(short = 'u', long)]
    include_future: bool,

    /// Split body lines of this many characters or more
    #[arg(
        short = 'l',
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_LINE_WIDTH,
        value_parser = config::parse_line_width
    )]
    line_width: usize,

    /// Do not convert \* to /* and *\ to */
    #[arg(short = 'c', long)]
    raw_escapes: bool,

    /// No form feeds between entries
    #[arg(short = 'f', long)]
    no_form_feed: bool,

    /// Do not output table of contents before entries
    #[arg(short = 'I', long)]
    no_toc: bool,

    /// Write the document to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            internal_only: self.restrict_internal,
            obsolete_only: self.restrict_obsolete,
            include_future: self.include_future,
            line_width: self.line_width,
            raw_escapes: self.raw_escapes,
            no_form_feed: self.no_form_feed,
            no_toc: self.no_toc,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    // Every input is parsed before anything is written, so a read failure
    // leaves the destination untouched.
    let mut list = collect(&cli.files, &config)?;

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            emit(BufWriter::new(file), &mut list, &config)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => emit(BufWriter::new(io::stdout().lock()), &mut list, &config)
            .context("failed to write to stdout"),
    }
}

/// Parse all inputs, in command-line order, into one list.
fn collect(args: &[String], config: &Config) -> Result<AutodocList> {
    let mut list = AutodocList::new();
    for path in input::expand_inputs(args)? {
        let text = input::read_source(&path)?;
        let docs = parser::parse(&text, config);
        debug!("{}: {} autodoc(s)", path.display(), docs.len());
        list.append(docs);
    }
    if list.is_empty() {
        debug!("no autodocs found");
    } else {
        debug!("{} autodoc(s) total", list.len());
    }
    Ok(list)
}

fn emit<W: Write>(mut out: W, list: &mut AutodocList, config: &Config) -> io::Result<()> {
    render::write_document(&mut out, list, config)?;
    out.flush()
}
