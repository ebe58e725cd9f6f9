use std::{
    cmp::{max, min},
    ops::Range,
};

/// Represents a highlighted span in a source
/// listing. Offsets are counted in characters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Create an empty span that highlights nothing.
    pub const fn empty() -> Self {
        Self {
            start: 0,
            length: 0,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Adjust this span so that it spans contains `other`.
    /// For instance, if we have two spans:
    /// ```text
    /// type alias Pair = ( Int, Int )
    /// ^^^^              ^^^^^^^^^^^^
    /// span_a            span_b
    /// ```
    ///
    /// ...then `span_a.grow_to_contain(span_b)` would make `span_a` look like
    /// this:
    /// ```text
    /// type alias Pair = ( Int, Int )
    /// ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
    /// span_a
    /// ```
    ///
    /// `span_b.grow_to_contain(span_a)` would produce the same result.
    pub fn grow_to_contain(&mut self, other: &Span) {
        if other.is_empty() {
            // x + 0 = x,
            // so we don't need to do anything
        } else if self.is_empty() {
            // 0 + x = x,
            // so we must take on the value of other
            *self = *other;
        } else {
            // Span from where the earliest start to the latest end
            let start = min(self.start, other.start);
            let end = max(self.end(), other.end());
            self.start = start;
            self.length = end - start;
        }
    }

    /// Returns the one-based line and column where this span starts.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;

        for c in source.chars().take(self.start) {
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }

        (line, col)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end()
    }
}
