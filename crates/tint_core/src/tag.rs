//! Tag tokens produced by the tag reader.

use crate::Span;
use rustc_hash::FxHashSet;

/// Case-insensitive matching key for a tag.
///
/// `Named` holds the lowercased tag name. `Fragment` is the reserved key
/// for the nameless shorthand forms `<>` and `</>`; being a separate
/// variant, it can never collide with a real tag name and never matches
/// an entry of the ignored-tags set.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagKey {
    /// Nameless fragment shorthand (`<>` / `</>`).
    Fragment,
    /// Lowercased tag name.
    Named(Box<str>),
}

impl TagKey {
    /// Build a key from raw ASCII name bytes, lowercasing on the way.
    ///
    /// The reader only ever produces names matching `[A-Za-z_][A-Za-z0-9_.:-]*`,
    /// so the bytes are always valid UTF-8.
    pub(crate) fn from_name_bytes(name: &[u8]) -> Self {
        let lowered: String = name
            .iter()
            .map(|&b| char::from(b.to_ascii_lowercase()))
            .collect();
        TagKey::Named(lowered.into_boxed_str())
    }

    /// Returns `true` for the fragment sentinel.
    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self, TagKey::Fragment)
    }

    /// Lowercased name, or `None` for fragments.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            TagKey::Fragment => None,
            TagKey::Named(name) => Some(name),
        }
    }

    /// Whether this key appears in an ignore set of lowercased tag names.
    ///
    /// Fragments are never ignorable.
    #[inline]
    pub fn is_ignored(&self, ignored: &FxHashSet<String>) -> bool {
        match self {
            TagKey::Fragment => false,
            TagKey::Named(name) => ignored.contains(name.as_ref()),
        }
    }
}

/// One successfully parsed tag.
///
/// `span` covers the whole tag, from the `<` up to (and excluding) the
/// offset just past the terminating `>`, so `span.end` is also the
/// offset where scanning resumes. `name_span` is empty for fragments.
///
/// Invariants: `span.start < name_span.start <= name_span.end < span.end`,
/// and `closing && self_closing` is never produced (a malformed `</x/>`
/// parses as a plain closing tag ending at its `>`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagToken {
    /// Matching key (lowercased name or fragment sentinel).
    pub key: TagKey,
    /// Whole tag, `<` through `>` inclusive, as a half-open range.
    pub span: Span,
    /// The raw name text; empty for fragments.
    pub name_span: Span,
    /// Tag closes itself (`/>`).
    pub self_closing: bool,
    /// Closing tag (`</name>` or `</>`).
    pub closing: bool,
}

impl TagToken {
    /// Offset just past the terminating `>`, where scanning resumes.
    #[inline]
    pub fn resume_offset(&self) -> usize {
        self.span.end as usize
    }

    /// Opening bracket: `<` for opening tags, `</` for closing tags.
    #[inline]
    pub fn open_bracket_span(&self) -> Span {
        let width = if self.closing { 2 } else { 1 };
        Span::new(self.span.start, self.span.start + width)
    }

    /// Terminating bracket: `/>` for self-closing tags, `>` otherwise.
    #[inline]
    pub fn close_bracket_span(&self) -> Span {
        let width = if self.self_closing { 2 } else { 1 };
        Span::new(self.span.end - width, self.span.end)
    }
}
