//! Parser state and the recognition entry point.
//!
//! The parser owns a `TokenStream` and a statement lookup table mapping each
//! token kind that can begin a statement to the rule that parses it. The
//! table's keys double as the FIRST set of `Statement`.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    errors::errors::{Error, Found},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_function,
    stream::TokenStream,
    verdict::Verdict,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens being recognized, with the read cursor
    stream: TokenStream,
    /// Lookup table for statement rules, keyed by their first token
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser over `tokens` with an empty lookup table.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            stream: TokenStream::new(tokens),
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the kind of the current token, or `None` past the end.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.stream.current_kind()
    }

    /// Checks the current token's kind without consuming it.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Arguments
    ///
    /// * `rule` - The grammar rule doing the matching, for error reporting
    /// * `expected_kind` - The TokenKind the rule requires here
    ///
    /// # Returns
    ///
    /// Ok if the token matched and was consumed, otherwise a `SyntaxError`
    /// naming what was found instead (`Found::EndOfInput` when the stream is
    /// exhausted). At end of input the error still names the calling rule
    /// and the kind it wanted, where a generic report would read
    /// `In grammar rule EOF, expected token #N to be token but was none`.
    pub fn expect(&mut self, rule: &'static str, expected_kind: TokenKind) -> Result<(), Error> {
        match self.stream.current_kind() {
            Some(kind) if kind == expected_kind => {
                self.stream.advance();
                Ok(())
            }
            found => Err(Error::SyntaxError {
                rule,
                expected: expected_kind,
                found: found.map_or(Found::EndOfInput, Found::Token),
                position: self.stream.position(),
            }),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.stream.is_at_end()
    }

    /// Returns true if the current token can begin a statement.
    pub fn at_statement(&self) -> bool {
        self.current_token_kind()
            .is_some_and(|kind| self.stmt_lookup.contains_key(&kind))
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement rule for the token kind that starts it.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current cursor position in the token stream.
    pub fn get_position(&self) -> usize {
        self.stream.position()
    }

    pub fn token_count(&self) -> usize {
        self.stream.len()
    }
}

/// Recognizes exactly one function in `tokens`.
///
/// The first failure anywhere in the rule chain ends the run. When the
/// grammar is satisfied but tokens remain, the verdict is `TrailingTokens`.
pub fn recognize(tokens: Vec<Token>) -> Verdict {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let result = parse_function(&mut parser).and_then(|()| {
        if parser.has_tokens() {
            Err(Error::TrailingTokens {
                consumed: parser.get_position(),
                total: parser.token_count(),
            })
        } else {
            Ok(())
        }
    });

    let verdict = Verdict::from(result);
    debug!(
        consumed = parser.get_position(),
        total = parser.token_count(),
        parsed = verdict.is_parsed(),
        rule = verdict.error().and_then(|error| error.get_rule()),
        "recognition finished"
    );
    verdict
}
