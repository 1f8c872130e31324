//! lexfront
//!
//! The lexical front end of a small compiler pipeline: source text in,
//! classified tokens out.
//!
//! ```
//! use lexfront::{tokenize, TokenKind};
//!
//! let tokens = tokenize("if x + 5");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert!(tokens.last().unwrap().is_eof());
//! ```

pub mod feedback;
pub mod frontend;
pub mod utils;

pub use frontend::diagnostic::{Diagnostic, DiagnosticKind};
pub use frontend::lexer::{tokenize, tokenize_with_diagnostics, Lexer};
pub use frontend::token::{Token, TokenKind, KEYWORDS};
pub use utils::{Error, Result, Span};
