use tracing::trace;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_function(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "function");
    if !parser.has_tokens() {
        return Err(Error::MissingNonterminal { rule: "function", nonterminal: "function" });
    }

    parse_header(parser)?;
    parse_body(parser)
}

pub fn parse_header(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "header");
    if !parser.has_tokens() {
        return Err(Error::MissingNonterminal { rule: "header", nonterminal: "header" });
    }

    parser.expect("header", TokenKind::VarType)?;
    parser.expect("header", TokenKind::Identifier)?;
    parser.expect("header", TokenKind::LeftParen)?;

    if parser.at(TokenKind::VarType) {
        parse_arg_decl(parser)?;
    }

    parser.expect("header", TokenKind::RightParen)
}

pub fn parse_arg_decl(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "arg-decl");
    parser.expect("arg-decl", TokenKind::VarType)?;
    parser.expect("arg-decl", TokenKind::Identifier)?;

    while parser.at(TokenKind::Comma) {
        parser.expect("arg-decl", TokenKind::Comma)?;
        parser.expect("arg-decl", TokenKind::VarType)?;
        parser.expect("arg-decl", TokenKind::Identifier)?;
    }

    Ok(())
}

pub fn parse_body(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "body");
    parser.expect("body", TokenKind::LeftBrace)?;

    if parser.at_statement() {
        parse_statement_list(parser)?;
    }

    parser.expect("body", TokenKind::RightBrace)
}

pub fn parse_statement_list(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "statement-list");
    parse_statement(parser)?;

    while parser.at_statement() {
        parse_statement(parser)?;
    }

    Ok(())
}

pub fn parse_statement(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "statement");
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(Error::MissingNonterminal { rule: "statement", nonterminal: "statement" }),
    }
}

pub fn parse_while_loop(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "while-loop");
    parser.expect("while-loop", TokenKind::While)?;
    parser.expect("while-loop", TokenKind::LeftParen)?;
    parse_expr(parser)?;
    parser.expect("while-loop", TokenKind::RightParen)?;
    parse_body(parser)
}

pub fn parse_return(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "return");
    parser.expect("return", TokenKind::Return)?;
    parse_expr(parser)?;
    parser.expect("return", TokenKind::Semicolon)
}

pub fn parse_assignment(parser: &mut Parser) -> Result<(), Error> {
    trace!(pos = parser.get_position(), "assignment");
    parser.expect("assignment", TokenKind::Identifier)?;
    parser.expect("assignment", TokenKind::Equal)?;
    parse_expr(parser)?;
    parser.expect("assignment", TokenKind::Semicolon)
}
