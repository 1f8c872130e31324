//! Line-per-token text format
//!
//! `Type: <KIND>, Value: <lexeme>, Line: <L>, Column: <C>`, one line per
//! token, last line for EOF. Downstream tools that run the tokenizer as a
//! subprocess read this format back.

use crate::frontend::diagnostic::Diagnostic;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::{Error, Result};

/// A token as read back from the text format. Byte offsets are not part of
/// the format, so only kind, lexeme and position survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenLine {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            value: token.lexeme.clone(),
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Render one token as a line (no trailing newline)
pub fn render_token(token: &Token) -> String {
    format!(
        "Type: {}, Value: {}, Line: {}, Column: {}",
        token.kind,
        token.lexeme,
        token.line(),
        token.column()
    )
}

/// Render a token stream, one line per token
pub fn render_stream(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&render_token(token));
        out.push('\n');
    }
    out
}

/// Parse one line of the text format.
///
/// The value may itself contain `, `, so the numeric fields are anchored on
/// the end of the line.
pub fn parse_token_line(line: &str) -> Result<TokenLine> {
    let rest = line
        .strip_prefix("Type: ")
        .ok_or_else(|| Error::malformed(line, "missing Type field"))?;

    let (kind, rest) = rest
        .split_once(", Value: ")
        .ok_or_else(|| Error::malformed(line, "missing Value field"))?;
    let kind: TokenKind = kind.parse()?;

    let (rest, column) = rest
        .rsplit_once(", Column: ")
        .ok_or_else(|| Error::malformed(line, "missing Column field"))?;
    let (value, line_no) = rest
        .rsplit_once(", Line: ")
        .ok_or_else(|| Error::malformed(line, "missing Line field"))?;

    let line_no = parse_position(line, "Line", line_no)?;
    let column = parse_position(line, "Column", column)?;

    Ok(TokenLine {
        kind,
        value: value.to_string(),
        line: line_no,
        column,
    })
}

fn parse_position(line: &str, field: &str, text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(Error::malformed(
            line,
            format!("{} must be a positive integer, got {:?}", field, text),
        )),
    }
}

/// Parse a whole rendered stream.
///
/// String values may contain newlines, which the renderer writes raw: a line
/// that does not open with `Type: ` continues the previous record. Blank lines
/// before the first record are skipped; parsing stops after the EOF record.
pub fn parse_stream(text: &str) -> Result<Vec<TokenLine>> {
    let mut tokens = Vec::new();
    let mut pending: Option<String> = None;

    for line in text.lines() {
        if line.starts_with("Type: ") {
            if let Some(record) = pending.take() {
                tokens.push(parse_token_line(&record)?);
            }
            // EOF has an empty value, so its record is always one line
            if line.starts_with("Type: EOF, ") {
                tokens.push(parse_token_line(line)?);
                return Ok(tokens);
            }
            pending = Some(line.to_string());
        } else if let Some(record) = pending.as_mut() {
            record.push('\n');
            record.push_str(line);
        } else if !line.trim().is_empty() {
            return Err(Error::malformed(line, "continuation line before any token"));
        }
    }

    if let Some(record) = pending {
        tokens.push(parse_token_line(&record)?);
    }
    Ok(tokens)
}

/// Render diagnostics as `[CODE] message` lines
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&format!("[{}] {}\n", diagnostic.code(), diagnostic));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::{tokenize, tokenize_with_diagnostics};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_stream() {
        let tokens = tokenize("int x = 5;");
        assert_eq!(
            render_stream(&tokens),
            "Type: KEYWORD, Value: int, Line: 1, Column: 1\n\
             Type: IDENTIFIER, Value: x, Line: 1, Column: 5\n\
             Type: OPERATOR, Value: =, Line: 1, Column: 7\n\
             Type: NUMBER, Value: 5, Line: 1, Column: 9\n\
             Type: SEPARATOR, Value: ;, Line: 1, Column: 10\n\
             Type: EOF, Value: , Line: 1, Column: 11\n"
        );
    }

    #[test]
    fn test_parse_reads_back_rendered_stream() {
        let tokens = tokenize("func f(a, b) {\n  \"x, y\" 2.5\n}");
        let parsed = parse_stream(&render_stream(&tokens)).unwrap();
        let expected: Vec<TokenLine> = tokens.iter().map(TokenLine::from).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_reads_back_strings_spanning_lines() {
        let tokens = tokenize("\"a\nb\" c\n\"x\n\ny\" \"\nlead\" \"tail\n\" 1");
        assert_eq!(tokens[0].lexeme, "a\nb");
        assert_eq!(tokens[2].lexeme, "x\n\ny");

        let parsed = parse_stream(&render_stream(&tokens)).unwrap();
        let expected: Vec<TokenLine> = tokens.iter().map(TokenLine::from).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_value_with_field_lookalikes() {
        let line = "Type: STRING, Value: a, Line: 9, Line: 2, Column: 3";
        let token = parse_token_line(line).unwrap();
        assert_eq!(token.value, "a, Line: 9");
        assert_eq!((token.line, token.column), (2, 3));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(matches!(
            parse_token_line("Kind: NUMBER, Value: 1, Line: 1, Column: 1"),
            Err(Error::MalformedTokenLine { .. })
        ));
        assert!(matches!(
            parse_token_line("Type: NUMBER, Value: 1"),
            Err(Error::MalformedTokenLine { .. })
        ));
        assert!(matches!(
            parse_token_line("Type: NUMBER, Value: 1, Line: 0, Column: 1"),
            Err(Error::MalformedTokenLine { .. })
        ));
        assert!(matches!(
            parse_token_line("Type: BOOL_OPERATOR, Value: &&, Line: 1, Column: 1"),
            Err(Error::UnknownTokenKind(ref k)) if k == "BOOL_OPERATOR"
        ));
    }

    #[test]
    fn test_parse_stream_stops_at_eof() {
        let text = "Type: NUMBER, Value: 1, Line: 1, Column: 1\n\n\
                    Type: EOF, Value: , Line: 1, Column: 2\n\
                    trailing garbage\n";
        let tokens = parse_stream(text).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[1].value, "");
    }

    #[test]
    fn test_parse_stream_rejects_leading_continuation() {
        let text = "stray\nType: EOF, Value: , Line: 1, Column: 1\n";
        assert!(matches!(
            parse_stream(text),
            Err(Error::MalformedTokenLine { ref line, .. }) if line == "stray"
        ));
    }

    #[test]
    fn test_render_diagnostics() {
        let (_, diagnostics) = tokenize_with_diagnostics("a #\n\"open");
        assert_eq!(
            render_diagnostics(&diagnostics),
            "[L0001] Unrecognized character at Line 1, Column 3: '#'\n\
             [L0002] Unterminated string starting at Line 2, Column 1\n"
        );
        assert_eq!(render_diagnostics(&[]), "");
    }
}
