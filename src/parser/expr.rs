use tracing::trace;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{lookups::TERM_KINDS, parser::Parser};

/// `'(' Expression ')'` or `Term { BinOp Term }`.
///
/// A parenthesised expression is not followed by further operators.
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "expression");
    if parser.at(TokenKind::LeftParen) {
        parser.expect("expression", TokenKind::LeftParen)?;
        parse_expr(parser)?;
        return parser.expect("expression", TokenKind::RightParen);
    }

    parse_term(parser)?;

    while parser.at(TokenKind::BinOp) {
        parser.expect("expression", TokenKind::BinOp)?;
        parse_term(parser)?;
    }

    Ok(())
}

pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "term");
    match parser.current_token_kind() {
        Some(kind) if TERM_KINDS.contains(&kind) => parser.expect("term", kind),
        _ => Err(Error::MissingNonterminal { rule: "term", nonterminal: "term" }),
    }
}
