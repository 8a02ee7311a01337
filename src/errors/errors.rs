use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// What the parser actually saw where it wanted a specific token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => write!(f, "none"),
        }
    }
}

/// The first structural failure of a recognition run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("In grammar rule {rule}, expected token #{} to be {expected} but was {found}", .position + 1)]
    SyntaxError {
        rule: &'static str,
        expected: TokenKind,
        found: Found,
        position: usize,
    },
    #[error("In grammar rule {rule}, expected a valid {nonterminal} non-terminal to be present but was not.")]
    MissingNonterminal {
        rule: &'static str,
        nonterminal: &'static str,
    },
    #[error("Only consumed {consumed} of {total} given tokens")]
    TrailingTokens { consumed: usize, total: usize },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::SyntaxError { .. } => "SyntaxError",
            Error::MissingNonterminal { .. } => "MissingNonterminal",
            Error::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    /// Index of the token the run stopped at, when the failure has one.
    pub fn get_position(&self) -> Option<usize> {
        match self {
            Error::SyntaxError { position, .. } => Some(*position),
            Error::MissingNonterminal { .. } => None,
            Error::TrailingTokens { consumed, .. } => Some(*consumed),
        }
    }

    pub fn get_rule(&self) -> Option<&'static str> {
        match self {
            Error::SyntaxError { rule, .. } | Error::MissingNonterminal { rule, .. } => Some(*rule),
            Error::TrailingTokens { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record {record}: unknown token kind {name:?}")]
    UnknownTokenKind { record: usize, name: String },
}

impl RecordError {
    pub fn get_error_name(&self) -> &str {
        match self {
            RecordError::Io(_) => "Io",
            RecordError::UnknownTokenKind { .. } => "UnknownTokenKind",
        }
    }
}
