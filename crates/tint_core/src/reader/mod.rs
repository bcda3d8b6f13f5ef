//! Tag reader: parses one complete tag at a candidate `<`.
//!
//! The reader is a leaf: it knows nothing about comments, strings, or
//! nesting in the surrounding text; that context belongs to the scanner.
//! Given an offset pointing at `<`, it either produces a [`TagToken`]
//! covering one complete tag (open, close, self-close, or fragment) or
//! returns `None`, meaning "not a tag here" and the `<` is plain text.
//!
//! Inside the attribute region the reader skips string literals
//! (honoring backslash escapes), balanced `{...}` expression groups, and
//! one leading run of balanced `<...>` generic parameters, so none of
//! their contents can terminate the tag early.

use crate::{Span, TagKey, TagToken};


/// First character of a tag name: `[A-Za-z_]`.
///
/// Rejecting digits and symbols here is what keeps comparisons like
/// `x < 10` from ever looking like tags.
#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Continuation character of a tag name: `[A-Za-z0-9_.:-]`.
///
/// Covers namespaced (`svg:path`), member (`Foo.Bar`), and custom-element
/// (`my-widget`) names.
#[inline]
fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-')
}

/// Attempt to parse one complete tag starting at `start`.
///
/// `start` must point at a `<` byte. Returns `None` when no well-formed
/// tag begins here: bad first name character, or the input ends before a
/// terminating `>` (no speculative partial tags).
pub fn read_tag(text: &[u8], start: usize) -> Option<TagToken> {
    debug_assert_eq!(text.get(start), Some(&b'<'), "reader must start at '<'");

    let mut i = start + 1;
    let mut closing = false;
    if text.get(i) == Some(&b'/') {
        closing = true;
        i += 1;
    }

    while i < text.len() && text[i].is_ascii_whitespace() {
        i += 1;
    }

    // Fragment shorthand: "<>" or "</>".
    if i < text.len() && text[i] == b'>' {
        return Some(TagToken {
            key: TagKey::Fragment,
            span: Span::from_bounds(start, i + 1),
            name_span: Span::from_bounds(i, i),
            self_closing: false,
            closing,
        });
    }

    let name_start = i;
    match text.get(i) {
        Some(&b) if is_name_start(b) => i += 1,
        _ => return None,
    }
    while i < text.len() && is_name_continue(text[i]) {
        i += 1;
    }
    let name_end = i;
    let key = TagKey::from_name_bytes(&text[name_start..name_end]);
    let name_span = Span::from_bounds(name_start, name_end);

    let mut in_string: Option<u8> = None;
    let mut brace_depth = 0usize; // embedded {...} expressions
    let mut angle_depth = 0usize; // generic parameters <T, U>
    let mut allow_generics = true;

    while i < text.len() {
        let b = text[i];

        if let Some(quote) = in_string {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }

        match b {
            b'"' | b'\'' | b'`' => {
                in_string = Some(b);
                i += 1;
                continue;
            }
            b'{' => {
                brace_depth += 1;
                i += 1;
                continue;
            }
            b'}' => {
                brace_depth = brace_depth.saturating_sub(1);
                i += 1;
                continue;
            }
            _ => {}
        }

        // A '<' right after the name (or a previous generic block) opens a
        // generic parameter block. Any other character at angle depth zero
        // permanently disables the allowance: attribute text can't re-enter
        // generic handling later in the body.
        if allow_generics && brace_depth == 0 && b == b'<' {
            angle_depth += 1;
            i += 1;
            continue;
        }
        if angle_depth > 0 {
            match b {
                b'<' => angle_depth += 1,
                b'>' => angle_depth -= 1,
                _ => {}
            }
            i += 1;
            continue;
        }
        allow_generics = false;

        if brace_depth == 0 {
            if !closing && b == b'/' && text.get(i + 1) == Some(&b'>') {
                return Some(TagToken {
                    key,
                    span: Span::from_bounds(start, i + 2),
                    name_span,
                    self_closing: true,
                    closing,
                });
            }
            if b == b'>' {
                return Some(TagToken {
                    key,
                    span: Span::from_bounds(start, i + 1),
                    name_span,
                    self_closing: false,
                    closing,
                });
            }
        }

        i += 1;
    }

    // Ran out of input without a terminator.
    None
}
