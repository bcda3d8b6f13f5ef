//! Supported host languages.
//!
//! The scanner itself is language-agnostic, but the heuristics are tuned
//! for markup-in-code, so hosts only run it for documents where tags are
//! expected. Anything else simply gets no highlights.

use std::path::Path;

/// Document languages the highlighter runs on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    Html,
    JavascriptReact,
    TypescriptReact,
}

impl Language {
    /// Resolve an editor language identifier.
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id {
            "html" => Some(Language::Html),
            "javascriptreact" => Some(Language::JavascriptReact),
            "typescriptreact" => Some(Language::TypescriptReact),
            _ => None,
        }
    }

    /// Resolve a file path by extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "html" | "htm" => Some(Language::Html),
            "jsx" => Some(Language::JavascriptReact),
            "tsx" => Some(Language::TypescriptReact),
            _ => None,
        }
    }

    /// Editor language identifier for this language.
    pub fn language_id(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::JavascriptReact => "javascriptreact",
            Language::TypescriptReact => "typescriptreact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_ids_round_trip() {
        for lang in [
            Language::Html,
            Language::JavascriptReact,
            Language::TypescriptReact,
        ] {
            assert_eq!(Language::from_language_id(lang.language_id()), Some(lang));
        }
        assert_eq!(Language::from_language_id("rust"), None);
    }

    #[test]
    fn paths_resolve_by_extension() {
        assert_eq!(
            Language::from_path(Path::new("app/Page.tsx")),
            Some(Language::TypescriptReact)
        );
        assert_eq!(
            Language::from_path(Path::new("index.html")),
            Some(Language::Html)
        );
        assert_eq!(Language::from_path(Path::new("main.rs")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }
}
