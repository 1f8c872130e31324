//! Utility module

mod span;
mod error;
pub mod source;

pub use span::Span;
pub use error::{Error, Result};
pub use source::{join_lines, load_source, JoinMode};
