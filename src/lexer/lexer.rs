use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, BINOPS, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+$").unwrap();
}

/// Scanning state for one tokenize run.
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    buffer: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            buffer: String::new(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, "emit token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    /// The character after the current one, if any.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Classifies and emits whatever has been accumulated so far.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let lexeme = std::mem::take(&mut self.buffer);
        self.push(MK_TOKEN!(classify_lexeme(&lexeme), lexeme));
    }
}

/// ASCII whitespace, vertical tab included.
pub(crate) fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

/// Resolves a complete lexeme to its token kind.
///
/// Reserved words win over operators, operators over numbers, numbers over
/// punctuation, and anything left over is an identifier.
pub fn classify_lexeme(lexeme: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        return *kind;
    }

    if BINOPS.contains(&lexeme) {
        return TokenKind::BinOp;
    }

    if NUMBER_PATTERN.is_match(lexeme) {
        return TokenKind::Number;
    }

    if let Some(kind) = PUNCTUATION_LOOKUP.get(lexeme) {
        return *kind;
    }

    TokenKind::Identifier
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let ch = lex.at();

        if is_space(ch) {
            lex.flush();
            lex.advance_n(1);
            continue;
        }

        if ch.is_ascii_alphanumeric() {
            lex.buffer.push(ch);
            lex.advance_n(1);
            continue;
        }

        lex.flush();

        if (ch == '=' || ch == '!') && lex.peek() == Some('=') {
            lex.push(MK_TOKEN!(TokenKind::BinOp, format!("{}=", ch)));
            lex.advance_n(2);
        } else {
            let lexeme = ch.to_string();
            lex.push(MK_TOKEN!(classify_lexeme(&lexeme), lexeme));
            lex.advance_n(1);
        }
    }

    lex.flush();

    debug!(count = lex.tokens.len(), "tokenized source");
    lex.tokens
}
