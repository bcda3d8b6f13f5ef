//! Scanner / depth resolver: one forward pass over the whole text.
//!
//! The scanner owns the surrounding-context tracking the tag reader
//! deliberately lacks: it knows when the cursor sits inside a string, a
//! `//` line comment, a `/* */` block comment, or a `<!-- -->` markup
//! comment, and only consults the reader at a `<` seen in neutral
//! context. Recognized tags are resolved against a stack of open tag
//! keys to get a 1-based nesting depth, and each tag's bracket and name
//! sub-spans are filed under the bucket `(depth - 1) % palette_size`.
//!
//! Malformed input is never an error. Unreadable tags stay plain text,
//! orphan closing tags render at a floored depth, and a mismatched close
//! silently discards the unclosed descendants above its match; source
//! text is usually mid-edit and transiently broken, and the scan must
//! stay useful throughout.

use crate::reader::read_tag;
use crate::{Span, TagKey, TagToken};
use memchr::{memchr, memchr2};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;


/// What the scanner is currently inside of.
///
/// At most one context is ever active, and all four non-neutral contexts
/// are only enterable from [`ScanMode::Neutral`]: a quote inside a
/// comment starts nothing, and a comment opener inside a string is inert.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanMode {
    /// Plain source text; tags and context openers are live here.
    Neutral,
    /// String literal, with the active quote byte (`"`, `'`, or backtick).
    Str(u8),
    /// `//` comment, ends at newline.
    LineComment,
    /// `/* */` comment.
    BlockComment,
    /// `<!-- -->` comment.
    MarkupComment,
}

/// Colorized sub-ranges, bucketed by color index.
///
/// One bucket per palette color; tags at depth `d` land in bucket
/// `(d - 1) % palette_size`, so indices are dense and a plain vector
/// stands in for a map. An empty palette means zero buckets and nothing
/// is ever recorded, a valid silent configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorRanges {
    buckets: Vec<Vec<Span>>,
}

impl ColorRanges {
    fn with_palette(palette_size: usize) -> Self {
        ColorRanges {
            buckets: vec![Vec::new(); palette_size],
        }
    }

    /// Number of buckets (the palette size this scan ran with).
    #[inline]
    pub fn palette_size(&self) -> usize {
        self.buckets.len()
    }

    /// Ranges recorded for one color index, in document order.
    ///
    /// Out-of-range indices yield an empty slice.
    #[inline]
    pub fn bucket(&self, color_index: usize) -> &[Span] {
        self.buckets.get(color_index).map_or(&[], Vec::as_slice)
    }

    /// Iterate `(color_index, ranges)` pairs over all buckets.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Span])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(idx, spans)| (idx, spans.as_slice()))
    }

    /// Total number of recorded ranges across every bucket.
    pub fn total_ranges(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// File one tag's sub-spans under the bucket for `depth`.
    ///
    /// Emits, in document order: the opening bracket (`<` or `</`), the
    /// name span unless empty (fragments), and the terminating bracket
    /// (`>` or `/>`).
    fn record(&mut self, depth: usize, tag: &TagToken) {
        if self.buckets.is_empty() {
            return;
        }
        let color_index = (depth - 1) % self.buckets.len();
        let bucket = &mut self.buckets[color_index];
        bucket.push(tag.open_bracket_span());
        if !tag.name_span.is_empty() {
            bucket.push(tag.name_span);
        }
        bucket.push(tag.close_bracket_span());
    }
}

/// Result of a full scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanOutput {
    /// Colorized sub-ranges bucketed by color index.
    pub ranges: ColorRanges,
    /// Keys of tags still open when the text ended, outermost first.
    pub unclosed: Vec<TagKey>,
}

/// Scan `text` and return colorized ranges bucketed by color index.
///
/// `ignored` holds lowercased tag names to skip entirely; ignored tags
/// neither record ranges nor touch the open-tag stack. The scan is
/// synchronous, allocation-bounded, and keeps no state between calls.
pub fn compute_color_ranges(
    text: &str,
    palette_size: usize,
    ignored: &FxHashSet<String>,
) -> ColorRanges {
    scan(text, palette_size, ignored).ranges
}

/// Scan `text`, returning the colorized ranges plus the tags left open
/// at end of input.
pub fn scan(text: &str, palette_size: usize, ignored: &FxHashSet<String>) -> ScanOutput {
    Scanner {
        text: text.as_bytes(),
        pos: 0,
        mode: ScanMode::Neutral,
        stack: SmallVec::new(),
        ignored,
        out: ColorRanges::with_palette(palette_size),
    }
    .run()
}

/// Per-scan state. Created fresh for every call and discarded afterward.
struct Scanner<'t> {
    text: &'t [u8],
    pos: usize,
    mode: ScanMode,
    /// Keys of currently open tags, most recent last.
    stack: SmallVec<[TagKey; 16]>,
    ignored: &'t FxHashSet<String>,
    out: ColorRanges,
}

/// Word byte for the preceding-character heuristic: letter, digit, or `_`.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl Scanner<'_> {
    fn run(mut self) -> ScanOutput {
        while self.pos < self.text.len() {
            match self.mode {
                ScanMode::Neutral => self.step_neutral(),
                ScanMode::Str(quote) => self.skip_string(quote),
                ScanMode::LineComment => self.skip_line_comment(),
                ScanMode::BlockComment => self.skip_block_comment(),
                ScanMode::MarkupComment => self.skip_markup_comment(),
            }
        }
        ScanOutput {
            ranges: self.out,
            unclosed: self.stack.into_vec(),
        }
    }

    /// One step in neutral context: enter a string/comment, try a tag at
    /// `<`, or move past an ordinary character.
    fn step_neutral(&mut self) {
        let b = self.text[self.pos];
        let next = self.text.get(self.pos + 1).copied();
        match b {
            b'"' | b'\'' | b'`' => {
                self.mode = ScanMode::Str(b);
                self.pos += 1;
            }
            b'/' if next == Some(b'/') => {
                self.mode = ScanMode::LineComment;
                self.pos += 2;
            }
            b'/' if next == Some(b'*') => {
                self.mode = ScanMode::BlockComment;
                self.pos += 2;
            }
            b'<' if self.text[self.pos..].starts_with(b"<!--") => {
                self.mode = ScanMode::MarkupComment;
                self.pos += 4;
            }
            b'<' => self.candidate_tag(),
            _ => self.pos += 1,
        }
    }

    /// Skip string content up to the matching unescaped quote.
    ///
    /// A backslash skips the following byte unconditionally; nothing else
    /// inside a string is ever special. An unterminated string simply
    /// persists to end of input.
    fn skip_string(&mut self, quote: u8) {
        while let Some(off) = memchr2(quote, b'\\', &self.text[self.pos..]) {
            let at = self.pos + off;
            if self.text[at] == b'\\' {
                // The escaped byte may be the last one; clamp for the
                // re-slice on the next pass.
                self.pos = (at + 2).min(self.text.len());
                continue;
            }
            self.mode = ScanMode::Neutral;
            self.pos = at + 1;
            return;
        }
        self.pos = self.text.len();
    }

    /// Skip to just past the terminating newline of a `//` comment.
    fn skip_line_comment(&mut self) {
        match memchr(b'\n', &self.text[self.pos..]) {
            Some(off) => {
                self.mode = ScanMode::Neutral;
                self.pos += off + 1;
            }
            None => self.pos = self.text.len(),
        }
    }

    /// Skip to just past the `*/` of a block comment.
    fn skip_block_comment(&mut self) {
        while let Some(off) = memchr(b'*', &self.text[self.pos..]) {
            let at = self.pos + off;
            if self.text.get(at + 1) == Some(&b'/') {
                self.mode = ScanMode::Neutral;
                self.pos = at + 2;
                return;
            }
            self.pos = at + 1;
        }
        self.pos = self.text.len();
    }

    /// Skip to just past the `-->` of a markup comment.
    fn skip_markup_comment(&mut self) {
        while let Some(off) = memchr(b'-', &self.text[self.pos..]) {
            let at = self.pos + off;
            if self.text[at..].starts_with(b"-->") {
                self.mode = ScanMode::Neutral;
                self.pos = at + 3;
                return;
            }
            self.pos = at + 1;
        }
        self.pos = self.text.len();
    }

    /// Handle a `<` in neutral context: read a tag, weed out generic and
    /// call-expression false positives, resolve depth, record ranges.
    fn candidate_tag(&mut self) {
        let Some(tag) = read_tag(self.text, self.pos) else {
            // Not a tag; the '<' is ordinary text.
            self.pos += 1;
            return;
        };
        let resume = tag.resume_offset();

        // Both suppression heuristics apply to opening tags only; text may
        // legitimately sit right before a closing tag (`text</b>`).
        if !tag.closing {
            // `Array<number>`: a word character right before '<' means
            // generic syntax attached to an identifier, not a tag. This
            // also suppresses adjacent sequences like `x<Foo>`; the
            // trade-off is deliberate, since telling them apart needs the
            // host language's grammar.
            let prev = if self.pos > 0 { self.text[self.pos - 1] } else { b' ' };
            if is_word_byte(prev) {
                self.pos = resume;
                return;
            }
            // `foo<T>(args)`: a '(' right after '>' marks a call expression.
            let after = self.text.get(resume).copied().unwrap_or(b' ');
            if after == b'(' && !tag.key.is_fragment() {
                self.pos = resume;
                return;
            }
        }

        if tag.key.is_ignored(self.ignored) {
            self.pos = resume;
            return;
        }

        let depth = if tag.closing {
            self.resolve_close(&tag.key)
        } else {
            self.resolve_open(&tag)
        };
        if depth > 0 {
            self.out.record(depth, &tag);
        }
        self.pos = resume;
    }

    /// Depth of an opening tag is one past the current ancestry; only
    /// non-self-closing tags join the stack.
    fn resolve_open(&mut self, tag: &TagToken) -> usize {
        let depth = self.stack.len() + 1;
        if !tag.self_closing {
            self.stack.push(tag.key.clone());
        }
        depth
    }

    /// Match a closing tag against the most recent open tag with the same
    /// key. A match truncates the stack through that entry, silently
    /// dropping any unclosed descendants above it. An orphan close leaves
    /// the stack untouched and renders at the floored depth
    /// `max(stack.len(), 1)`.
    fn resolve_close(&mut self, key: &TagKey) -> usize {
        match self.stack.iter().rposition(|open| open == key) {
            Some(found) => {
                self.stack.truncate(found);
                found + 1
            }
            None => self.stack.len().max(1),
        }
    }
}
