//! Single-pass markup tag scanner and nesting-depth resolver.
//!
//! Finds HTML/JSX/TSX-style tags in arbitrary source text, ignoring
//! anything inside strings, `//` and `/* */` comments, and `<!-- -->`
//! comments, and assigns every recognized tag a 1-based nesting depth by
//! matching closing tags against a stack of open tags. Each tag's
//! bracket and name sub-ranges come back bucketed by
//! `(depth - 1) % palette_size`, ready for a rendering layer to colorize.
//!
//! This crate is standalone and deliberately ignorant of documents,
//! editors, configuration files, and timers. Callers hand in the full
//! text, a palette size, and a set of lowercased tag names to ignore;
//! they get byte-offset spans back. Line/column translation and color
//! values live in `tint_highlight`.
//!
//! # Leniency
//!
//! Nothing in the input is ever a hard error. Constructs that merely
//! look like tags (`x < 10`, `Array<number>`, `foo<T>(...)`) are skipped,
//! mismatched and orphan closing tags render at a best-effort depth, and
//! text ending mid-string or mid-comment simply ends the scan.

mod reader;
mod scanner;
mod span;
mod tag;

pub use reader::read_tag;
pub use scanner::{compute_color_ranges, scan, ColorRanges, ScanOutput};
pub use span::Span;
pub use tag::{TagKey, TagToken};
