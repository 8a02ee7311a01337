//! Lexical analysis for the recognizer.
//!
//! Converts raw source text into the ordered token sequence the parser
//! consumes. It handles:
//!
//! - A single left-to-right character scan with one character of lookahead
//! - Classification of reserved words, operators, numbers and punctuation
//! - Falling back to identifiers for anything unrecognised (the lexer never fails)

pub mod lexer;
pub mod tokens;
