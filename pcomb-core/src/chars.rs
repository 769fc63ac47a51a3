//! Character-level primitives.
//!
//! [`character`] is the one primitive that actually consumes input; the
//! rest of this module is ready-made parsers built on top of it.

use unicode_xid::UnicodeXID;

use crate::parser::Parser;

/// Match one character satisfying `condition`.
///
/// Fails without consuming anything on empty input or when the predicate
/// rejects the next character.
pub fn character<F>(condition: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input| match input.split_first() {
        Some((c, rest)) if condition(c) => Some((c, rest)),
        _ => None,
    })
}

/// Match one ASCII decimal digit.
pub fn digit() -> Parser<char> {
    character(|c| c.is_ascii_digit())
}

/// Match exactly `expected`.
pub fn char_eq(expected: char) -> Parser<char> {
    character(move |c| c == expected)
}

/// Match a character that may start a Unicode identifier (UAX #31 `XID_Start`).
pub fn xid_start() -> Parser<char> {
    character(|c: char| c.is_xid_start())
}

/// Match a character that may continue a Unicode identifier (`XID_Continue`).
pub fn xid_continue() -> Parser<char> {
    character(|c: char| c.is_xid_continue())
}

/// Match an identifier: one `XID_Start` followed by any `XID_Continue`.
///
/// Note `_` is `XID_Continue` but not `XID_Start`, so `_tmp` does not match.
pub fn identifier() -> Parser<String> {
    xid_start()
        .followed_by(&xid_continue().many())
        .map(|(head, tail)| {
            let mut ident = String::with_capacity(tail.len() + 1);
            ident.push(head);
            ident.extend(tail);
            ident
        })
}

/// Match a run of decimal digits as an `i64`.
///
/// Fails when there are no digits or the value overflows.
pub fn integer() -> Parser<i64> {
    digit()
        .many()
        .filter_map(|digits| digits.into_iter().collect::<String>().parse().ok())
}
