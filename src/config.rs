//! Options shared by the parser and the renderer.

/// Line width used when `-l` is not given.
pub const DEFAULT_LINE_WIDTH: usize = 78;

/// Parsed command-line options. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Extract only internal (`i`) autodocs
    pub internal_only: bool,
    /// Extract only obsolete (`o`) autodocs
    pub obsolete_only: bool,
    /// Also extract future (`f`) autodocs
    pub include_future: bool,
    /// Body lines at least this long are split once
    pub line_width: usize,
    /// Keep `\*` and `*\` as written
    pub raw_escapes: bool,
    /// Omit the form feed after each section
    pub no_form_feed: bool,
    /// Omit the table of contents
    pub no_toc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            internal_only: false,
            obsolete_only: false,
            include_future: false,
            line_width: DEFAULT_LINE_WIDTH,
            raw_escapes: false,
            no_form_feed: false,
            no_toc: false,
        }
    }
}

/// clap value parser for `--line-width`.
pub fn parse_line_width(value: &str) -> Result<usize, String> {
    let width: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a valid line width", value))?;
    if width == 0 {
        return Err("line width must be at least 1".to_string());
    }
    Ok(width)
}
