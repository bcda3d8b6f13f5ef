//! Host-facing integration layer over [`tint_core`].
//!
//! The core scanner speaks byte offsets and abstract color indices;
//! this crate supplies everything a host needs around it:
//!
//! - [`TintConfig`]: palette colors and ignored tags, deserializable
//!   from a JSON settings file and passed explicitly per call.
//! - [`LineIndex`]: byte-offset to 1-based line/column translation.
//! - [`Language`]: which documents the highlighter runs on at all.
//! - [`highlight`]: one call from text + config to positioned,
//!   color-resolved ranges.
//!
//! Scheduling concerns (debouncing rapid edits, discarding stale
//! results) stay with the host; every call here is synchronous and
//! self-contained.

mod color;
mod config;
mod error;
mod highlight;
mod language;
mod line_index;

pub use color::Rgb;
pub use config::{TintConfig, DEFAULT_COLORS};
pub use error::ConfigError;
pub use highlight::{highlight, ColoredRange, HighlightLayer, Highlights};
pub use language::Language;
pub use line_index::{LineIndex, Position};

// Re-exported so downstream callers don't need a direct core dependency.
pub use tint_core::{compute_color_ranges, scan, ColorRanges, ScanOutput, Span, TagKey};
