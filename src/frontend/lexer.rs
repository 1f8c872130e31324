//! Lexer for lexfront
//!
//! Converts source code into a stream of tokens. Scanning is total: every
//! input produces a finite token stream ending in one EndOfInput token, and
//! characters no rule accepts become Unknown tokens instead of errors.

use log::{debug, trace, warn};

use crate::frontend::cursor::Cursor;
use crate::frontend::diagnostic::{Diagnostic, DiagnosticKind};
use crate::frontend::token::{keyword_from_str, symbol_kind, Token, TokenKind};
use crate::utils::Span;

/// The lexer state
pub struct Lexer<'a> {
    /// Read position over the source
    cursor: Cursor<'a>,
    /// Notes collected while scanning
    diagnostics: Vec<Diagnostic>,
    /// Set once EndOfInput has been produced
    finished: bool,
    /// Tokens produced so far, EndOfInput excluded
    produced: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            diagnostics: Vec::new(),
            finished: false,
            produced: 0,
        }
    }

    /// Diagnostics recorded so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the recorded diagnostics, leaving the list empty
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Check if EndOfInput has been produced
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Span from `start` to the current position
    fn span_from(&self, start: Span) -> Span {
        Span::new(start.start, self.cursor.position(), start.line, start.column)
    }

    /// Create a token running from `start` to the current position
    fn make_token(&mut self, kind: TokenKind, start: Span) -> Token {
        let span = self.span_from(start);
        let lexeme = self.cursor.slice(span.start, span.end);
        self.emit(Token::new(kind, lexeme, span))
    }

    fn emit(&mut self, token: Token) -> Token {
        trace!(
            "{} {:?} at {}:{}",
            token.kind,
            token.lexeme,
            token.line(),
            token.column()
        );
        self.produced += 1;
        token
    }

    fn report(&mut self, kind: DiagnosticKind, span: Span) {
        let diagnostic = Diagnostic::new(kind, span);
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Skip to the end of the line; the newline itself is left for the
    /// whitespace rule
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skip a block comment. The first `*/` closes it; an unclosed comment
    /// runs to end of input.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.here();
        self.cursor.advance(); // skip /
        self.cursor.advance(); // skip *

        loop {
            match self.cursor.lookahead() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return;
                }
                Some(_) => {
                    self.cursor.advance();
                }
                None => {
                    let span = self.span_from(start);
                    self.report(DiagnosticKind::UnterminatedComment, span);
                    return;
                }
            }
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let start = self.cursor.here();
        self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');

        let text = self.cursor.slice(start.start, self.cursor.position());
        let kind = keyword_from_str(text);
        self.make_token(kind, start)
    }

    /// Read a number literal. A `.` joins the literal only when a digit
    /// follows it, and at most once.
    fn read_number(&mut self) -> Token {
        let start = self.cursor.here();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut kind = TokenKind::Number;
        if self.cursor.lookahead() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
        {
            kind = TokenKind::Float;
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        self.make_token(kind, start)
    }

    /// Read a string literal. The lexeme is the text between the quotes; no
    /// escape sequences are recognised.
    fn read_string(&mut self) -> Token {
        let start = self.cursor.here();
        self.cursor.advance(); // consume opening quote

        let body_start = self.cursor.position();
        self.cursor.eat_while(|c| c != '"');
        let body_end = self.cursor.position();

        if self.cursor.lookahead() == Some('"') {
            self.cursor.advance(); // consume closing quote
        } else {
            let span = self.span_from(start);
            self.report(DiagnosticKind::UnterminatedString, span);
        }

        let span = self.span_from(start);
        let body = self.cursor.slice(body_start, body_end);
        self.emit(Token::new(TokenKind::String, body, span))
    }

    /// Read a single-character operator, separator or unknown character
    fn read_symbol(&mut self, c: char) -> Token {
        let start = self.cursor.here();
        self.cursor.advance();

        match symbol_kind(c) {
            Some(kind) => self.make_token(kind, start),
            None => {
                let span = self.span_from(start);
                self.report(DiagnosticKind::UnknownCharacter(c), span);
                self.make_token(TokenKind::Unknown, start)
            }
        }
    }

    fn end_of_input(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            debug!(
                "scan finished: {} tokens, {} diagnostics, {} lines",
                self.produced,
                self.diagnostics.len(),
                self.cursor.line()
            );
        }
        Token::eof(self.cursor.here())
    }

    /// Get the next token
    ///
    /// Once input is exhausted every call returns EndOfInput.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.cursor.lookahead() {
            match c {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek() == Some('/') => self.skip_line_comment(),
                '/' if self.cursor.peek() == Some('*') => self.skip_block_comment(),
                c if c.is_alphabetic() || c == '_' => return self.read_identifier(),
                c if c.is_ascii_digit() => return self.read_number(),
                '"' => return self.read_string(),
                c => return self.read_symbol(c),
            }
        }

        self.end_of_input()
    }

    /// Tokenize the entire source and return all tokens
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token, EndOfInput included, then stops
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

/// Tokenize `source` into a stream ending in exactly one EndOfInput token
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Tokenize `source`, also returning the diagnostics recorded on the way
pub fn tokenize_with_diagnostics(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.take_diagnostics())
}
