//! Byte-offset to line/column translation.
//!
//! The core hands back pure byte offsets; editors and humans want
//! 1-based line/column pairs. [`LineIndex`] pre-computes line-start
//! offsets once per text for O(log L) lookups, which matters when a
//! document produces hundreds of ranges per scan.

use tint_core::Span;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

/// 1-based line/column position. Columns count characters, not bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Pre-computed table of line-start byte offsets.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start; `starts[0]` is always 0.
    starts: Vec<u32>,
}

impl LineIndex {
    /// Scan the text once, recording every line start.
    pub fn build(text: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { starts }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_at(&self, offset: u32) -> u32 {
        let line_idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based line/column position of `offset`.
    ///
    /// Offsets past the end of `text` clamp to the end.
    pub fn position_at(&self, text: &str, offset: u32) -> Position {
        let line = self.line_at(offset);
        let line_start = self
            .starts
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(text.len());
        let column_chars = text[line_start..offset].chars().count();
        Position {
            line,
            column: u32::try_from(column_chars).unwrap_or(u32::MAX - 1) + 1,
        }
    }

    /// Both endpoints of a span as positions.
    pub fn span_positions(&self, text: &str, span: Span) -> (Position, Position) {
        (
            self.position_at(text, span.start),
            self.position_at(text, span.end),
        )
    }
}
