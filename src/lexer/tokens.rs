use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};

pub const BINOPS: [&str; 5] = ["+", "*", "!=", "==", "%"];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::VarType);
        map.insert("void", TokenKind::VarType);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("(", TokenKind::LeftParen);
        map.insert(")", TokenKind::RightParen);
        map.insert("{", TokenKind::LeftBrace);
        map.insert("}", TokenKind::RightBrace);
        map.insert("=", TokenKind::Equal);
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semicolon);
        map
    };

    pub static ref NAME_LOOKUP: HashMap<&'static str, TokenKind> = TokenKind::ALL
        .iter()
        .map(|kind| (kind.name(), *kind))
        .collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Reserved
    While,
    Return,

    Equal, // =
    Comma,
    Semicolon,

    VarType, // int, void
    Identifier,
    BinOp, // + * != == %
    Number,
}

impl TokenKind {
    pub const ALL: [TokenKind; 13] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::While,
        TokenKind::Return,
        TokenKind::Equal,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::VarType,
        TokenKind::Identifier,
        TokenKind::BinOp,
        TokenKind::Number,
    ];

    /// The symbolic name used in token record files and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PARENTHESIS",
            TokenKind::RightParen => "RIGHT_PARENTHESIS",
            TokenKind::LeftBrace => "LEFT_BRACKET",
            TokenKind::RightBrace => "RIGHT_BRACKET",
            TokenKind::While => "WHILE_KEYWORD",
            TokenKind::Return => "RETURN_KEYWORD",
            TokenKind::Equal => "EQUAL",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "EOL",
            TokenKind::VarType => "VARTYPE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::BinOp => "BINOP",
            TokenKind::Number => "NUMBER",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_LOOKUP.get(s).copied().ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}
