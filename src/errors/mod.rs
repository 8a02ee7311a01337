//! Error types for the recognizer.
//!
//! This module defines:
//!
//! - `Error`, the grammar failures a recognition run can end with
//! - `Found`, what stood where an expected token should have been
//! - `RecordError`, failures reading or writing token record files
//!
//! `Display` for `Error` is exactly the text reported after `Error: ` on the
//! verdict line.

pub mod errors;

#[cfg(test)]
mod tests;
