//! Autodoc block parser: a two-state scanner over the raw input text.
//!
//! A block looks like this:
//!
//! ```text
//! /****** exec.library/AllocMem ******************************************
//! *
//! *   NAME
//! *       AllocMem -- allocate memory given certain requirements
//! *
//! ******************************************************************************
//! */
//! ```
//!
//! The header carries a classification tag (the character right before the
//! last star of the leading run) and the name. Body lines start with one or
//! more stars which are stripped. A line starting with three or more stars
//! closes the block.

use crate::config::Config;
use crate::model::{Autodoc, Classification};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^/\*\s?\*{3,}(.)\* (\S+) \**").unwrap());

static RE_BODY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*+(.*\n)").unwrap());

static RE_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*{3,}").unwrap());

// -- Scanner state ------------------------------------------------------------

#[derive(Clone, Copy)]
enum State<'a> {
    /// Looking for the next header
    Searching,
    /// Inside the body of the named block
    Collecting { name: &'a str },
}

// -- Public API ---------------------------------------------------------------

/// Extract every admitted autodoc from `input`, in the order they appear.
///
/// Never fails: blocks with an unknown tag, blocks filtered out by `config`
/// and blocks without a trailer are dropped.
pub fn parse(input: &str, config: &Config) -> Vec<Autodoc> {
    let mut docs = Vec::new();
    let mut pos = 0;
    let mut state = State::Searching;

    loop {
        match state {
            State::Searching => {
                let Some(caps) = RE_HEAD.captures_at(input, pos) else {
                    break;
                };
                let Some(header) = caps.get(0) else {
                    break;
                };
                pos = header.end();

                let class = tag(&caps[1]);
                let name = caps.get(2).map_or("", |m| m.as_str());
                if admits(config, class) {
                    state = State::Collecting { name };
                } else {
                    debug!("skipping autodoc {} (tag {})", name, class.tag());
                }
            }
            State::Collecting { name } => match collect_body(input, pos, config) {
                Some((body, next)) => {
                    docs.push(Autodoc::new(name, body));
                    pos = next;
                    state = State::Searching;
                }
                None => {
                    debug!("dropping unterminated autodoc {}", name);
                    break;
                }
            },
        }
    }

    docs
}

/// Whether a block with this tag is extracted under `config`.
///
/// The rules run in order and each one is checked on its own: the two
/// restriction rules reject first, then any of the inclusion rules may
/// admit the block.
pub fn admits(config: &Config, class: Classification) -> bool {
    let mut admitted = false;

    // Exclusion filters
    if config.internal_only && class != Classification::Internal {
        return false;
    }
    if config.obsolete_only && class != Classification::Obsolete {
        return false;
    }

    // Inclusion filters
    if config.internal_only && class == Classification::Internal {
        admitted = true;
    }
    if config.obsolete_only && class == Classification::Obsolete {
        admitted = true;
    }
    if config.include_future && class == Classification::Future {
        admitted = true;
    }
    if class == Classification::Default {
        admitted = true;
    }

    admitted
}

// -- Body collection ----------------------------------------------------------

fn tag(captured: &str) -> Classification {
    // The header pattern captures exactly one character.
    captured
        .chars()
        .next()
        .map_or(Classification::Other(' '), Classification::from)
}

/// Accumulate body lines from `start` up to the trailer.
///
/// Returns the body and the offset just past the trailer line, or `None`
/// when the input ends first.
fn collect_body(input: &str, start: usize, config: &Config) -> Option<(String, usize)> {
    let mut body = String::new();
    let mut offset = start;

    for line in input[start..].split_inclusive('\n') {
        offset += line.len();

        if RE_TAIL.is_match(line) {
            return Some((body, offset));
        }

        if let Some(caps) = RE_BODY.captures(line) {
            let text = &caps[1];
            if config.raw_escapes {
                body.push_str(text);
            } else {
                body.push_str(&convert_escapes(text));
            }
        }
    }

    None
}

/// `\*` → `/*` and `*\` → `*/`, applied in that order.
fn convert_escapes(text: &str) -> String {
    text.replace("\\*", "/*").replace("*\\", "*/")
}
