//! pcomb Core
//!
//! Minimal parser combinators over character streams. Grammars are built by
//! composing small parsers into bigger ones and run directly from
//! application code; there is no grammar file and no generation step.
//!
//! A parse either succeeds with a value and the unconsumed input, or fails
//! with `None`. There are no error messages, no backtracking and no
//! alternatives: sequencing is strictly left to right.
//!
//! # Architecture
//!
//! - **stream.rs** - `Stream`, the immutable unconsumed-input view
//! - **parser.rs** - `Parser<A>`, `run`, `map`, `followed_by`, `many`
//! - **chars.rs** - `character` primitive and ready-made character parsers
//! - **apply.rs** - `map_apply`/`apply` sequencing sugar and currying helpers
//! - **error.rs** - `ParseError` for full-match runs

pub mod apply;
pub mod chars;
pub mod error;
pub mod parser;
pub mod stream;

pub use apply::{apply, curry2, curry3, map_apply, Curried};
pub use chars::{char_eq, character, digit, identifier, integer, xid_continue, xid_start};
pub use error::ParseError;
pub use parser::Parser;
pub use stream::Stream;
