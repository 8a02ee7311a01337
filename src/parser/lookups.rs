use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

/// Token kinds that can stand alone as a `Term`.
pub const TERM_KINDS: [TokenKind; 2] = [TokenKind::Identifier, TokenKind::Number];

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt(TokenKind::While, parse_while_loop);
    parser.stmt(TokenKind::Return, parse_return);
    parser.stmt(TokenKind::Identifier, parse_assignment);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
