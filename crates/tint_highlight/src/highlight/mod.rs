//! End-to-end highlighting: core scan plus boundary translation.

use crate::{ConfigError, LineIndex, Position, Rgb, TintConfig};
use tint_core::Span;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

/// One colorized range with both byte offsets and positions.
///
/// `span` is the half-open byte range `[start, end)`; consumers whose
/// rendering excludes boundary-adjacent cursor positions must interpret
/// the endpoints exactly as given.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColoredRange {
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

/// All ranges sharing one palette color, in document order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightLayer {
    pub color: Rgb,
    pub ranges: Vec<ColoredRange>,
}

/// Result of highlighting one document: one layer per palette color.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Highlights {
    pub layers: Vec<HighlightLayer>,
}

impl Highlights {
    /// Total number of colorized ranges across all layers.
    pub fn total_ranges(&self) -> usize {
        self.layers.iter().map(|layer| layer.ranges.len()).sum()
    }

    /// Iterate all `(color, range)` pairs sorted by document position.
    pub fn sorted_ranges(&self) -> Vec<(Rgb, ColoredRange)> {
        let mut all: Vec<(Rgb, ColoredRange)> = self
            .layers
            .iter()
            .flat_map(|layer| layer.ranges.iter().map(|r| (layer.color, *r)))
            .collect();
        all.sort_by_key(|(_, range)| range.span.start);
        all
    }
}

/// Scan `text` under `config` and translate every range to positions.
///
/// Fails only on an invalid palette color; scanning itself never fails.
pub fn highlight(text: &str, config: &TintConfig) -> Result<Highlights, ConfigError> {
    let palette = config.palette()?;
    let ignored = config.ignored_keys();
    let ranges = tint_core::compute_color_ranges(text, palette.len(), &ignored);
    let index = LineIndex::build(text);

    let layers = palette
        .into_iter()
        .enumerate()
        .map(|(color_index, color)| HighlightLayer {
            color,
            ranges: ranges
                .bucket(color_index)
                .iter()
                .map(|&span| {
                    let (start, end) = index.span_positions(text, span);
                    ColoredRange { span, start, end }
                })
                .collect(),
        })
        .collect();

    Ok(Highlights { layers })
}
