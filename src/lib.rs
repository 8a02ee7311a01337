#![allow(clippy::module_inception)]

use crate::{lexer::lexer::tokenize, parser::parser::recognize, parser::verdict::Verdict};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod records;

extern crate regex;

/// Tokenizes `source` and recognizes the result in one go.
pub fn check(source: &str) -> Verdict {
    recognize(tokenize(source))
}
