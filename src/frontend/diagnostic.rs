//! Lexical diagnostics
//!
//! None of these stop a scan. They are notes on the token stream for callers
//! that want to report degraded input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "character")]
pub enum DiagnosticKind {
    /// A character no rule accepts; emitted as an Unknown token
    UnknownCharacter(char),
    /// A string literal still open at end of input
    UnterminatedString,
    /// A block comment still open at end of input
    UnterminatedComment,
}

/// A note attached to a position in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Short code for the diagnostic kind
    pub fn code(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::UnknownCharacter(_) => "L0001",
            DiagnosticKind::UnterminatedString => "L0002",
            DiagnosticKind::UnterminatedComment => "L0003",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownCharacter(c) => write!(
                f,
                "Unrecognized character at Line {}, Column {}: {:?}",
                self.span.line, self.span.column, c
            ),
            DiagnosticKind::UnterminatedString => write!(
                f,
                "Unterminated string starting at Line {}, Column {}",
                self.span.line, self.span.column
            ),
            DiagnosticKind::UnterminatedComment => write!(
                f,
                "Unterminated block comment starting at Line {}, Column {}",
                self.span.line, self.span.column
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(DiagnosticKind::UnknownCharacter('#'), Span::new(2, 3, 1, 3));
        assert_eq!(diag.to_string(), "Unrecognized character at Line 1, Column 3: '#'");
        assert_eq!(diag.code(), "L0001");

        let diag = Diagnostic::new(DiagnosticKind::UnterminatedComment, Span::new(0, 9, 4, 2));
        assert_eq!(
            diag.to_string(),
            "Unterminated block comment starting at Line 4, Column 2"
        );
    }

    #[test]
    fn test_serialize() {
        let diag = Diagnostic::new(DiagnosticKind::UnknownCharacter('@'), Span::new(0, 1, 1, 1));
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"]["kind"], "UnknownCharacter");
        assert_eq!(json["kind"]["character"], "@");
        assert_eq!(json["span"]["line"], 1);
    }
}
