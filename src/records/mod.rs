//! Token record files and verdict output.
//!
//! The tokenizer and the recognizer can run as separate steps that hand
//! tokens over through a plain text file, one `KIND lexeme` record per line.
//! This module reads and writes that format and writes the verdict line.

pub mod records;
