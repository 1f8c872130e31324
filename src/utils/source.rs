//! Source loading
//!
//! Reads a source file line by line and joins the lines into the single
//! buffer the lexer scans.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::debug;

use crate::utils::{Error, Result};

/// How source lines are joined into one buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum JoinMode {
    /// Every line is followed by `\n`; line numbers are preserved
    #[default]
    Newline,
    /// Every line is followed by a space; everything lands on line 1
    Space,
}

impl JoinMode {
    fn separator(self) -> char {
        match self {
            JoinMode::Newline => '\n',
            JoinMode::Space => ' ',
        }
    }
}

/// Join lines, appending the mode's separator after each one
pub fn join_lines<'a, I>(lines: I, mode: JoinMode) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let sep = mode.separator();
    let mut buffer = String::new();
    for line in lines {
        buffer.push_str(line);
        buffer.push(sep);
    }
    buffer
}

/// Read a source file and join its lines
pub fn load_source(path: &Path, mode: JoinMode) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), &e))?;
    let source = join_lines(raw.lines(), mode);
    debug!(
        "loaded {} ({} bytes, {} lines, {:?} join)",
        path.display(),
        source.len(),
        raw.lines().count(),
        mode
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_newlines() {
        let joined = join_lines(["int x", "x = 1;"], JoinMode::Newline);
        assert_eq!(joined, "int x\nx = 1;\n");
    }

    #[test]
    fn test_join_with_spaces() {
        let joined = join_lines(["int x", "x = 1;"], JoinMode::Space);
        assert_eq!(joined, "int x x = 1; ");
    }

    #[test]
    fn test_join_empty() {
        let joined = join_lines(Vec::<&str>::new(), JoinMode::Newline);
        assert!(joined.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_source(Path::new("definitely/not/here.src"), JoinMode::Newline).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_strips_carriage_returns() {
        let path = std::env::temp_dir().join(format!("lexfront-source-{}.txt", std::process::id()));
        fs::write(&path, "a\r\nb").unwrap();
        let source = load_source(&path, JoinMode::Newline).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(source, "a\nb\n");
    }
}
