//! Errors reported by the full-match entry point.
//!
//! Combinators themselves never produce these: inside a grammar a failed
//! parse is just `None`. [`Parser::run_complete`](crate::Parser::run_complete)
//! is the one place where "did not match" and "matched, but left input over"
//! have to be told apart.

use std::fmt;

/// Why a full-match parse was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser did not match at the start of the input
    NoMatch,
    /// The parser matched a prefix but left input unconsumed
    Incomplete {
        /// Byte offset where the unconsumed input starts
        offset: usize,
        /// The unconsumed input
        remainder: String,
    },
}

impl ParseError {
    /// Get a short human-readable message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoMatch => "no match",
            Self::Incomplete { .. } => "unconsumed input",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str(self.message()),
            Self::Incomplete { offset, remainder } => {
                write!(f, "{} at {}: {:?}", self.message(), offset, remainder)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
