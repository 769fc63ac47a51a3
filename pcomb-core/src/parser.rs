//! The parser value and its core combinators.
//!
//! A [`Parser<A>`] wraps a single function from a [`Stream`] to either a
//! value plus the remaining stream, or `None` for no match. Every combinator
//! here borrows the parsers it is given and returns a new one; nothing is
//! ever modified after construction.
//!
//! # Example
//!
//! ```
//! use pcomb_core::{character, Parser};
//!
//! let digit = character(|c| c.is_ascii_digit());
//! let digits: Parser<String> = digit.many().map(|ds| ds.into_iter().collect());
//!
//! let (value, rest) = digits.run("123abc").unwrap();
//! assert_eq!(value, "123");
//! assert_eq!(rest, "abc");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;
use crate::stream::Stream;

/// The function a parser wraps: works for a stream borrowed for any lifetime.
type ParseFn<A> = dyn for<'s> Fn(Stream<'s>) -> Option<(A, Stream<'s>)> + Send + Sync;

/// A reusable, immutable unit of parsing behavior producing values of type `A`.
///
/// Cloning is cheap (the function is shared), and parsers are `Send + Sync`
/// so one grammar can serve many threads at once.
pub struct Parser<A> {
    parse: Arc<ParseFn<A>>,
}

impl<A: 'static> Parser<A> {
    /// Build a parser from a parse function.
    ///
    /// The function receives the remaining input and returns the produced
    /// value with the stream after it, or `None` if it does not match. It
    /// must not depend on anything but its input.
    pub fn new<F>(parse: F) -> Self
    where
        F: for<'s> Fn(Stream<'s>) -> Option<(A, Stream<'s>)> + Send + Sync + 'static,
    {
        Self {
            parse: Arc::new(parse),
        }
    }

    /// A parser that always succeeds with `value` and consumes nothing.
    pub fn pure(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |input| Some((value.clone(), input)))
    }

    #[inline]
    pub(crate) fn parse<'s>(&self, input: Stream<'s>) -> Option<(A, Stream<'s>)> {
        (self.parse)(input)
    }

    /// Run the parser once over the start of `input`.
    ///
    /// Success does not imply that all input was consumed; check the
    /// returned stream, or use [`run_complete`](Self::run_complete).
    pub fn run<'s>(&self, input: &'s str) -> Option<(A, Stream<'s>)> {
        self.parse(Stream::new(input))
    }

    /// Run the parser and require it to consume all of `input`.
    pub fn run_complete(&self, input: &str) -> Result<A, ParseError> {
        let (value, rest) = self.run(input).ok_or(ParseError::NoMatch)?;
        if rest.is_empty() {
            Ok(value)
        } else {
            Err(ParseError::Incomplete {
                offset: rest.offset(),
                remainder: rest.as_str().to_string(),
            })
        }
    }

    /// Transform the produced value, leaving the remainder untouched.
    ///
    /// `transform` runs once per successful parse and never on failure.
    pub fn map<T, F>(&self, transform: F) -> Parser<T>
    where
        T: 'static,
        F: Fn(A) -> T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Parser::new(move |input| {
            let (value, rest) = inner.parse(input)?;
            Some((transform(value), rest))
        })
    }

    /// Transform the produced value, turning a `None` from `transform` into
    /// a no-match.
    pub fn filter_map<T, F>(&self, transform: F) -> Parser<T>
    where
        T: 'static,
        F: Fn(A) -> Option<T> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Parser::new(move |input| {
            let (value, rest) = inner.parse(input)?;
            Some((transform(value)?, rest))
        })
    }

    /// Run `self`, then `other` on what `self` left, producing both values.
    ///
    /// If `self` fails, `other` is never run. If `other` fails, the whole
    /// sequence fails; there is no backtracking.
    pub fn followed_by<B: 'static>(&self, other: &Parser<B>) -> Parser<(A, B)> {
        let first = self.clone();
        let second = other.clone();
        Parser::new(move |input| {
            let (a, rest) = first.parse(input)?;
            let (b, rest) = second.parse(rest)?;
            Some(((a, b), rest))
        })
    }

    /// Apply `self` repeatedly, collecting values until it fails.
    ///
    /// Never fails: zero matches give an empty vector and the original
    /// stream. Repetition also stops when `self` succeeds without consuming
    /// anything; that zero-width value is dropped, so `many` terminates on
    /// every parser.
    pub fn many(&self) -> Parser<Vec<A>> {
        let inner = self.clone();
        Parser::new(move |input| {
            let mut values = Vec::new();
            let mut remainder = input;
            while let Some((value, rest)) = inner.parse(remainder) {
                if rest.offset() <= remainder.offset() {
                    break;
                }
                values.push(value);
                remainder = rest;
            }
            Some((values, remainder))
        })
    }
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}
