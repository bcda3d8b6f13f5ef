//! Palette colors.

use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// One palette color, parsed from a `#rrggbb` hex string.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// ANSI truecolor foreground escape selecting this color.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI escape restoring the default foreground.
    pub const ANSI_RESET: &'static str = "\x1b[0m";
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(|| invalid())?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        let c: Rgb = "#ff5555".parse().unwrap();
        assert_eq!(c, Rgb { r: 0xff, g: 0x55, b: 0x55 });
        assert_eq!(c.to_string(), "#ff5555");
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let c: Rgb = "#8BE9FD".parse().unwrap();
        assert_eq!(c.to_string(), "#8be9fd");
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["ff5555", "#ff555", "#ff55555", "#gg0000", "#ff 555", "", "#日本語ab"] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn ansi_escape_shape() {
        let c: Rgb = "#01a0ff".parse().unwrap();
        assert_eq!(c.ansi_fg(), "\x1b[38;2;1;160;255m");
    }
}
