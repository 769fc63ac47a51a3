//! Immutable input streams.
//!
//! A [`Stream`] is the unconsumed suffix of some source text. It never
//! changes in place: consuming a character yields a new `Stream` that starts
//! one character later, and the old one stays valid. Streams are `Copy`, so
//! handing one to a parser and keeping the original around costs nothing.
//!
//! Two streams compare equal when their remaining characters are equal,
//! regardless of where they sit in their source. Use [`Stream::offset`] when
//! the position matters.

use std::fmt;

/// The remaining input of a parse.
#[derive(Clone, Copy)]
pub struct Stream<'s> {
    /// Full source text the stream was created from
    source: &'s str,
    /// Byte offset of the first unconsumed character (always a char boundary)
    offset: usize,
}

impl<'s> Stream<'s> {
    /// Create a stream positioned at the start of `source`.
    #[inline]
    pub fn new(source: &'s str) -> Self {
        Self { source, offset: 0 }
    }

    /// The unconsumed text.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        &self.source[self.offset..]
    }

    /// The full text this stream was created from.
    #[inline]
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Bytes consumed from the start of the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if all input has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset == self.source.len()
    }

    /// Peek at the next character without consuming it.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Split off the next character, returning it with the stream after it.
    #[inline]
    pub fn split_first(&self) -> Option<(char, Stream<'s>)> {
        let c = self.first()?;
        Some((
            c,
            Stream {
                source: self.source,
                offset: self.offset + c.len_utf8(),
            },
        ))
    }

    /// The stream with its first character removed.
    ///
    /// An empty stream stays empty.
    #[inline]
    pub fn drop_first(&self) -> Stream<'s> {
        self.split_first().map_or(*self, |(_, rest)| rest)
    }

    /// Check whether this stream is a suffix of `parent`: same source, and
    /// positioned at or after it.
    pub fn is_suffix_of(&self, parent: &Stream<'_>) -> bool {
        std::ptr::eq(self.source, parent.source) && self.offset >= parent.offset
    }
}

impl PartialEq for Stream<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Stream<'_> {}

impl PartialEq<str> for Stream<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Stream<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'s> From<&'s str> for Stream<'s> {
    fn from(source: &'s str) -> Self {
        Stream::new(source)
    }
}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("offset", &self.offset)
            .field("rest", &self.as_str())
            .finish()
    }
}

impl fmt::Display for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
