//! Source location tracking

use serde::{Deserialize, Serialize};

/// A span represents a range in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of the first character (1-based)
    pub line: usize,
    /// Column of the first character (1-based, in characters)
    pub column: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }

    /// Create a zero-width span at the given location
    pub fn point(offset: usize, line: usize, column: usize) -> Self {
        Self::new(offset, offset, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_zero_width() {
        let span = Span::point(10, 3, 2);
        assert_eq!(span, Span::new(10, 10, 3, 2));
    }
}
