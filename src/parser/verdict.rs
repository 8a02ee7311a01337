use std::fmt::Display;

use crate::errors::errors::Error;

/// The single outcome of one recognition run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every token was consumed and the grammar was satisfied.
    Parsed,
    /// The run stopped at its first failure.
    Rejected(Error),
}

impl Verdict {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Verdict::Parsed)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Verdict::Parsed => None,
            Verdict::Rejected(error) => Some(error),
        }
    }
}

impl From<Result<(), Error>> for Verdict {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Verdict::Parsed,
            Err(error) => Verdict::Rejected(error),
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Parsed => write!(f, "PARSED!!!"),
            Verdict::Rejected(error) => write!(f, "Error: {}", error),
        }
    }
}
