//! Error types for glossary loading and lookup

use std::fmt;

/// Errors raised while building a glossary from raw records.
///
/// Loading is all-or-nothing: any of these aborts the load and no partial
/// glossary is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The JSON document could not be parsed
    Json(String),
    /// A record did not match the expected entry shape
    InvalidRecord { slug: String, message: String },
    /// A record has no definitions
    MissingDefinitions { slug: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(msg) => write!(f, "Invalid glossary JSON: {msg}"),
            LoadError::InvalidRecord { slug, message } => {
                write!(f, "Invalid record '{slug}': {message}")
            }
            LoadError::MissingDefinitions { slug } => {
                write!(f, "Entry '{slug}' has no definitions")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Error for the hard-failure lookup variant.
///
/// `Glossary::get` returns `Option` and never fails; `Glossary::lookup`
/// returns this when the key resolves to nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// No entry matched the key as slug, word, or slugified word
    NotFound(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound(key) => write!(f, "No glossary entry for key '{key}'"),
        }
    }
}

impl std::error::Error for LookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::MissingDefinitions {
            slug: "want".to_string(),
        };
        assert_eq!(format!("{err}"), "Entry 'want' has no definitions");

        let err = LoadError::Json("expected value at line 1".to_string());
        assert_eq!(
            format!("{err}"),
            "Invalid glossary JSON: expected value at line 1"
        );
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::NotFound("nonesuch".to_string());
        assert_eq!(format!("{err}"), "No glossary entry for key 'nonesuch'");
    }
}
