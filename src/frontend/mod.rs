//! Frontend module - Cursor, Tokens, Lexer

pub mod cursor;
pub mod diagnostic;
pub mod lexer;
pub mod token;
