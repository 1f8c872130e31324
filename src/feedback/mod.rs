//! Structured Feedback Module
//!
//! Machine-readable output for tools downstream of the tokenizer:
//! - JSON token reports
//! - Diagnostic records
//! - Scan statistics
//!
//! The line-per-token text format lives in [`text`].

pub mod text;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::frontend::diagnostic::{Diagnostic, DiagnosticKind};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::Result;

pub use text::{
    parse_stream, parse_token_line, render_diagnostics, render_stream, render_token, TokenLine,
};

// ==================== Token Records ====================

/// One token, shaped like a line of the text format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            value: token.lexeme.clone(),
            line: token.line(),
            column: token.column(),
        }
    }
}

// ==================== Diagnostic Records ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A diagnostic in report form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Diagnostic code (e.g., "L0001")
    pub code: String,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    pub location: Location,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        // Unknown characters still yield a token; open literals and comments
        // lose whatever structure the author intended.
        let severity = match diagnostic.kind {
            DiagnosticKind::UnknownCharacter(_) => Severity::Warning,
            DiagnosticKind::UnterminatedString | DiagnosticKind::UnterminatedComment => {
                Severity::Error
            }
        };
        Self {
            code: diagnostic.code().to_string(),
            severity,
            message: diagnostic.to_string(),
            location: Location {
                line: diagnostic.span.line,
                column: diagnostic.span.column,
            },
        }
    }
}

// ==================== Token Report ====================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Tokens including EOF
    pub token_count: usize,
    /// Lines spanned by the input
    pub line_count: usize,
    /// Token count per kind name
    pub kinds: BTreeMap<String, usize>,
}

/// Complete output of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReport {
    /// Source file, or "<stdin>"-style label
    pub source_file: String,
    /// True when no diagnostics were recorded
    pub clean: bool,
    pub tokens: Vec<TokenRecord>,
    pub diagnostics: Vec<DiagnosticRecord>,
    pub stats: ScanStats,
}

impl TokenReport {
    /// Build a report from a finished scan
    pub fn new(
        source_file: impl Into<String>,
        tokens: &[Token],
        diagnostics: &[Diagnostic],
    ) -> Self {
        let mut kinds = BTreeMap::new();
        for token in tokens {
            *kinds.entry(token.kind.as_str().to_string()).or_insert(0) += 1;
        }
        let line_count = tokens.last().map(|t| t.line()).unwrap_or(1);

        Self {
            source_file: source_file.into(),
            clean: diagnostics.is_empty(),
            tokens: tokens.iter().map(TokenRecord::from).collect(),
            diagnostics: diagnostics.iter().map(DiagnosticRecord::from).collect(),
            stats: ScanStats {
                token_count: tokens.len(),
                line_count,
                kinds,
            },
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Output as compact JSON (for programmatic use)
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
