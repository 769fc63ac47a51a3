//! Applicative-style sequencing.
//!
//! Instead of nesting `followed_by` and unpacking tuples, lift a curried
//! function into a parser with [`map_apply`] and feed it one argument
//! parser at a time with [`apply`]:
//!
//! ```
//! use pcomb_core::{char_eq, curry3, integer, map_apply};
//!
//! fn multiply(x: i64, _op: char, y: i64) -> i64 {
//!     x * y
//! }
//!
//! let product = map_apply(curry3(multiply), &integer())
//!     .apply(&char_eq('*'))
//!     .apply(&integer());
//!
//! let (value, rest) = product.run("12*34").unwrap();
//! assert_eq!(value, 408);
//! assert!(rest.is_empty());
//! ```

use crate::parser::Parser;

/// A boxed single-argument function, the building block of curried functions.
pub type Curried<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

/// Lift `transform` over `parser`. Same as `parser.map(transform)`.
pub fn map_apply<A, B, F>(transform: F, parser: &Parser<A>) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    parser.map(transform)
}

/// Run `function`, then `argument`, and call the parsed function on the
/// parsed argument.
pub fn apply<A, B, F>(function: &Parser<F>, argument: &Parser<A>) -> Parser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    function.followed_by(argument).map(|(f, x)| f(x))
}

impl<F: 'static> Parser<F> {
    /// Method form of [`apply`], for chaining left to right.
    pub fn apply<A, B>(&self, argument: &Parser<A>) -> Parser<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B,
    {
        apply(self, argument)
    }
}

/// Curry a two-argument function.
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Curried<B, R> + Clone + Send + Sync + 'static
where
    A: Clone + Send + Sync + 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + Clone + Send + Sync + 'static,
{
    move |a: A| -> Curried<B, R> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curry a three-argument function.
pub fn curry3<A, B, C, R, F>(
    f: F,
) -> impl Fn(A) -> Curried<B, Curried<C, R>> + Clone + Send + Sync + 'static
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + Clone + Send + Sync + 'static,
{
    move |a: A| -> Curried<B, Curried<C, R>> {
        let f = f.clone();
        Box::new(move |b: B| -> Curried<C, R> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}
