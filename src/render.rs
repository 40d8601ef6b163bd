//! Plain-text renderer: table of contents, then one page per autodoc.

use crate::config::Config;
use crate::model::{Autodoc, AutodocList};
use std::io::{self, Write};

/// Page break written after the table of contents and after every entry.
const FORM_FEED: &[u8] = b"\x0c";

const TOC_HEADER: &str = "TABLE OF CONTENTS";

/// Sort `list` and write the whole document to `out`.
pub fn write_document<W: Write>(
    out: &mut W,
    list: &mut AutodocList,
    config: &Config,
) -> io::Result<()> {
    list.sort();
    Renderer::new(config).render(out, list.as_slice())
}

pub struct Renderer<'c> {
    config: &'c Config,
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c Config) -> Self {
        Renderer { config }
    }

    /// Write `docs` in the given order.
    pub fn render<W: Write>(&self, out: &mut W, docs: &[Autodoc]) -> io::Result<()> {
        if !self.config.no_toc {
            self.write_toc(out, docs)?;
        }
        for doc in docs {
            self.write_entry(out, doc)?;
        }
        Ok(())
    }

    fn write_toc<W: Write>(&self, out: &mut W, docs: &[Autodoc]) -> io::Result<()> {
        writeln!(out, "{}\n", TOC_HEADER)?;
        for doc in docs {
            writeln!(out, "{}", doc.name)?;
        }
        out.write_all(b"\n\n")?;
        self.write_page_break(out)
    }

    fn write_entry<W: Write>(&self, out: &mut W, doc: &Autodoc) -> io::Result<()> {
        writeln!(out, "{}", doc.name)?;

        let mut lines = doc.body.split('\n');
        // `split` always yields at least one piece
        let last = lines.next_back().unwrap_or_default();
        for line in lines {
            self.write_line(out, line)?;
        }

        // The last piece never gets a line feed of its own.
        out.write_all(last.as_bytes())?;
        self.write_page_break(out)
    }

    /// Write one body line, splitting it once if it reaches the line width.
    ///
    /// Only a single split is made, so the second half may still be longer
    /// than the width.
    fn write_line<W: Write>(&self, out: &mut W, line: &str) -> io::Result<()> {
        let keep = self.config.line_width.saturating_sub(1);
        match line.char_indices().nth(keep) {
            Some((split, _)) => {
                out.write_all(line[..split].as_bytes())?;
                out.write_all(b"\n")?;
                out.write_all(line[split..].as_bytes())?;
            }
            None => out.write_all(line.as_bytes())?,
        }
        out.write_all(b"\n")
    }

    fn write_page_break<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.config.no_form_feed {
            return Ok(());
        }
        out.write_all(FORM_FEED)
    }
}
