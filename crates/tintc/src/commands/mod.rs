//! CLI commands: scan, ansi, check.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tint_highlight::{highlight, ConfigError, Language, Rgb, TintConfig};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

/// Options shared by every command.
#[derive(Clone, Debug, Default)]
pub struct CliOptions {
    /// Explicit settings file; defaults apply when absent.
    pub config_path: Option<PathBuf>,
}

/// Command failures reported to the user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{path}` is not a supported file type (expected .html, .htm, .jsx, or .tsx)")]
    UnsupportedFile { path: PathBuf },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output")]
    Write(#[from] std::io::Error),
}

/// Load the settings file if given, defaults otherwise.
fn load_config(options: &CliOptions) -> Result<TintConfig, CliError> {
    match &options.config_path {
        Some(path) => Ok(TintConfig::load(path)?),
        None => Ok(TintConfig::default()),
    }
}

/// Read a source file, enforcing the supported-language gate.
fn read_source(path: &str) -> Result<(String, Language), CliError> {
    let path_ref = Path::new(path);
    let language = Language::from_path(path_ref).ok_or_else(|| CliError::UnsupportedFile {
        path: path_ref.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path_ref).map_err(|source| CliError::Read {
        path: path_ref.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path,
        language = language.language_id(),
        bytes = text.len(),
        "loaded source"
    );
    Ok((text, language))
}

/// `tint scan`: list every colorized range as `line:col-line:col`.
pub fn scan_file(path: &str, options: &CliOptions) -> Result<i32, CliError> {
    let config = load_config(options)?;
    let (text, _) = read_source(path)?;
    let highlights = highlight(&text, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (color, range) in highlights.sorted_ranges() {
        let snippet = &text[range.span.to_range()];
        writeln!(
            out,
            "{}:{}-{}:{}  {}  {}",
            range.start.line, range.start.column, range.end.line, range.end.column, color, snippet
        )?;
    }
    tracing::debug!(ranges = highlights.total_ranges(), "scan complete");
    Ok(0)
}

/// `tint ansi`: write the file with tag sub-ranges wrapped in truecolor
/// escapes.
pub fn render_ansi(path: &str, options: &CliOptions) -> Result<i32, CliError> {
    let config = load_config(options)?;
    let (text, _) = read_source(path)?;
    let highlights = highlight(&text, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut cursor = 0usize;
    for (color, range) in highlights.sorted_ranges() {
        let span = range.span.to_range();
        out.write_all(text[cursor..span.start].as_bytes())?;
        write!(out, "{}", color.ansi_fg())?;
        out.write_all(text[span.start..span.end].as_bytes())?;
        write!(out, "{}", Rgb::ANSI_RESET)?;
        cursor = span.end;
    }
    out.write_all(text[cursor..].as_bytes())?;
    Ok(0)
}

/// `tint check`: report tags still open at end of file.
///
/// Exit code 1 when the document is unbalanced.
pub fn check_file(path: &str, options: &CliOptions) -> Result<i32, CliError> {
    let config = load_config(options)?;
    let (text, _) = read_source(path)?;
    // Palette size is irrelevant for balance; skip range collection.
    let output = tint_core::scan(&text, 0, &config.ignored_keys());

    if output.unclosed.is_empty() {
        println!("{path}: all tags closed");
        return Ok(0);
    }
    println!("{path}: {} tag(s) left open:", output.unclosed.len());
    for key in &output.unclosed {
        match key.name() {
            Some(name) => println!("  <{name}>"),
            None => println!("  <> (fragment)"),
        }
    }
    Ok(1)
}
