//! User-facing configuration.
//!
//! Settings live in a JSON object mirroring the editor-settings shape:
//!
//! ```json
//! {
//!   "colors": ["#ff5555", "#50fa7b"],
//!   "ignoredTags": ["html", "Body"]
//! }
//! ```
//!
//! Both fields are optional; omitted fields fall back to the defaults.
//! The configuration is an explicit value passed per call; nothing here
//! is process-global, and a host that watches its settings for changes
//! simply builds a fresh `TintConfig` and calls again.

use crate::{ConfigError, Rgb};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

/// Default seven-color palette.
pub const DEFAULT_COLORS: [&str; 7] = [
    "#ff5555", "#ffb86c", "#f1fa8c", "#50fa7b", "#8be9fd", "#bd93f9", "#ff79c6",
];

/// Palette and ignore-list settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TintConfig {
    /// Palette colors as `#rrggbb` strings; depth N renders with color
    /// `(N - 1) % colors.len()`. Empty disables highlighting entirely.
    pub colors: Vec<String>,
    /// Tag names to skip, matched case-insensitively.
    pub ignored_tags: Vec<String>,
}

impl Default for TintConfig {
    fn default() -> Self {
        TintConfig {
            colors: DEFAULT_COLORS.iter().map(ToString::to_string).collect(),
            ignored_tags: Vec::new(),
        }
    }
}

impl TintConfig {
    /// Load and validate a JSON settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TintConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.palette()?;
        Ok(config)
    }

    /// Parse every configured color, in palette order.
    pub fn palette(&self) -> Result<Vec<Rgb>, ConfigError> {
        self.colors.iter().map(|c| c.parse()).collect()
    }

    /// Number of palette colors; the core's `palette_size` input.
    pub fn palette_len(&self) -> usize {
        self.colors.len()
    }

    /// Lowercased ignore set; the core's `ignored` input.
    pub fn ignored_keys(&self) -> FxHashSet<String> {
        self.ignored_tags
            .iter()
            .map(|tag| tag.to_lowercase())
            .collect()
    }
}
