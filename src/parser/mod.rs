//! Recursive-descent recognizer for the function grammar.
//!
//! This module checks a token sequence against a fixed LL(1) grammar of one
//! function: a typed header with optional arguments and a body of while
//! loops, returns and assignments. It builds no tree; each rule consumes its
//! tokens or returns the first error, which ends the run.
//!
//! Alternatives and repetitions are decided by peeking at the current token
//! only. The statement rules are dispatched through a lookup table keyed by
//! the token that starts them.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;
pub mod verdict;
