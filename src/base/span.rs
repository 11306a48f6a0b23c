use text_size::{TextRange, TextSize};

/// A source-location interval: 0-indexed start/end line plus a byte range
/// into the origin file's text.
///
/// Every token and every AST node carries one. Spans are set once at
/// construction and never mutated afterwards (see `SPEC_FULL.md` §3.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start_line: u32,
    pub end_line: u32,
    pub range: TextRange,
}

impl Span {
    pub fn new(start_line: u32, end_line: u32, start_byte: u32, end_byte: u32) -> Self {
        Self {
            start_line,
            end_line,
            range: TextRange::new(TextSize::from(start_byte), TextSize::from(end_byte)),
        }
    }

    pub fn start_byte(&self) -> u32 {
        self.range.start().into()
    }

    pub fn end_byte(&self) -> u32 {
        self.range.end().into()
    }

    /// Smallest span covering both `self` and `other`, used when a
    /// multi-token production needs the span of its first and last token.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start_line: self.start_line.min(other.start_line),
            end_line: self.end_line.max(other.end_line),
            range: self.range.cover(other.range),
        }
    }

    /// Span invariant checked in tests: the range must fall within a file of
    /// `len` bytes (`SPEC_FULL.md` §8, invariant 1).
    pub fn is_contained_in(&self, len: u32) -> bool {
        self.start_byte() <= self.end_byte() && self.end_byte() <= len
    }
}
