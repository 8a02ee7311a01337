//! Unit tests for error handling.
//!
//! This module contains tests for error names, positions and the exact
//! message text of every failure kind.

use crate::errors::errors::{Error, Found, RecordError};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_syntax_error_message() {
    let error = Error::SyntaxError {
        rule: "assignment",
        expected: TokenKind::Equal,
        found: Found::Token(TokenKind::Number),
        position: 6,
    };

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        error.to_string(),
        "In grammar rule assignment, expected token #7 to be EQUAL but was NUMBER"
    );
}

#[test]
fn test_end_of_input_is_reported_as_none() {
    let error = Error::SyntaxError {
        rule: "header",
        expected: TokenKind::RightParen,
        found: Found::EndOfInput,
        position: 3,
    };

    assert_eq!(
        error.to_string(),
        "In grammar rule header, expected token #4 to be RIGHT_PARENTHESIS but was none"
    );
}

#[test]
fn test_missing_nonterminal_message() {
    let error = Error::MissingNonterminal { rule: "statement", nonterminal: "statement" };

    assert_eq!(error.get_error_name(), "MissingNonterminal");
    assert_eq!(
        error.to_string(),
        "In grammar rule statement, expected a valid statement non-terminal to be present but was not."
    );
}

#[test]
fn test_trailing_tokens_message() {
    let error = Error::TrailingTokens { consumed: 9, total: 10 };

    assert_eq!(error.get_error_name(), "TrailingTokens");
    assert_eq!(error.to_string(), "Only consumed 9 of 10 given tokens");
}

#[test]
fn test_error_position() {
    let error = Error::SyntaxError {
        rule: "body",
        expected: TokenKind::LeftBrace,
        found: Found::Token(TokenKind::Semicolon),
        position: 42,
    };
    assert_eq!(error.get_position(), Some(42));
    assert_eq!(error.get_rule(), Some("body"));

    let error = Error::MissingNonterminal { rule: "term", nonterminal: "term" };
    assert_eq!(error.get_position(), None);
    assert_eq!(error.get_rule(), Some("term"));

    let error = Error::TrailingTokens { consumed: 5, total: 8 };
    assert_eq!(error.get_position(), Some(5));
    assert_eq!(error.get_rule(), None);
}

#[test]
fn test_found_display() {
    assert_eq!(Found::Token(TokenKind::While).to_string(), "WHILE_KEYWORD");
    assert_eq!(Found::EndOfInput.to_string(), "none");
}

#[test]
fn test_record_errors() {
    let error = RecordError::UnknownTokenKind { record: 3, name: "PLUS".to_string() };
    assert_eq!(error.get_error_name(), "UnknownTokenKind");
    assert_eq!(error.to_string(), "record 3: unknown token kind \"PLUS\"");

    let error = RecordError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(error.to_string(), "i/o error: missing");
}
