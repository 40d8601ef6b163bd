//! Input discovery and reading.

use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Turn the positional arguments into the list of files to parse.
///
/// Arguments containing `*`, `?` or `[` are expanded as glob patterns, each
/// pattern's matches sorted. Everything else, and any pattern that matches
/// nothing, is taken as a path as-is so a missing file is reported when it
/// is read. Argument order is kept.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if !is_glob(pattern) || path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        let mut matches = Vec::new();
        for entry in
            glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            let p = entry.with_context(|| format!("failed to read match of {}", pattern))?;
            if p.is_file() {
                matches.push(p);
            }
        }
        if matches.is_empty() {
            files.push(path.to_path_buf());
            continue;
        }
        matches.sort();
        files.extend(matches);
    }

    Ok(files)
}

fn is_glob(arg: &str) -> bool {
    arg.contains(|c| matches!(c, '*' | '?' | '['))
}

/// Read a source file as text with `\n` line endings.
///
/// Invalid UTF-8 is replaced rather than rejected; autodoc comments are
/// usually plain ASCII even when the surrounding file is not.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{}: not valid UTF-8, replacing invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    fn arg(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn plain_paths_kept_in_order() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.c");
        let a = touch(&dir, "a.c");
        let files = expand_inputs(&[arg(&b), arg(&a)]).unwrap();
        assert_eq!(files, [b, a]);
    }

    #[test]
    fn missing_plain_path_passes_through() {
        let files = expand_inputs(&["does/not/exist.c".to_string()]).unwrap();
        assert_eq!(files, [PathBuf::from("does/not/exist.c")]);
    }

    #[test]
    fn glob_matches_sorted() {
        let dir = TempDir::new().unwrap();
        let c = touch(&dir, "c.c");
        let a = touch(&dir, "a.c");
        touch(&dir, "notes.txt");
        let pattern = arg(&dir.path().join("*.c"));
        assert_eq!(expand_inputs(&[pattern]).unwrap(), [a, c]);
    }

    #[test]
    fn unmatched_glob_passes_through() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.c");
        let pattern = arg(&dir.path().join("missing[1].c"));
        let files = expand_inputs(&[arg(&a), pattern.clone()]).unwrap();
        assert_eq!(files, [a, PathBuf::from(&pattern)]);

        let err = read_source(&files[1]).unwrap_err();
        assert!(err.to_string().contains("missing[1].c"));
    }

    #[test]
    fn read_normalizes_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dos.c");
        fs::write(&path, "one\r\ntwo\rthree\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn read_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.c");
        fs::write(&path, b"caf\xe9\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "caf\u{fffd}\n");
    }

    #[test]
    fn read_missing_file_names_path() {
        let err = read_source(Path::new("does/not/exist.c")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.c"));
    }
}
