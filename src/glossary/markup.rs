//! Inline markup rewriting for definition and annotation text
//!
//! Definitions use two inline marker forms for keyword cross-references:
//!
//! ```text
//! |word|     becomes   **WORD**       (bold keyword)
//! _|word|_   becomes   _**WORD**_     (italic bold keyword)
//! ```
//!
//! Plain `_text_` italics pass through unchanged; the underscore means the
//! same thing in AsciiDoc.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Italic keyword reference: `_|word|_`.
/// Must be rewritten before the plain form — `|word|` is a strict substring
/// of this pattern, so running the plain form first would leave stray
/// underscores around an already-converted keyword.
static ITALIC_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"_\|([^|]+)\|_").unwrap());

/// Plain keyword reference: `|word|`.
static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|([^|]+)\|").unwrap());

/// Rewrite the inline keyword markers in one text string to AsciiDoc.
///
/// Markers are non-nested and matched left-to-right; each definition string
/// is rewritten independently of the others.
pub fn rewrite(text: &str) -> String {
    let text = ITALIC_KEYWORD.replace_all(text, |caps: &Captures| {
        format!("_**{}**_", caps[1].to_uppercase())
    });
    KEYWORD
        .replace_all(&text, |caps: &Captures| {
            format!("**{}**", caps[1].to_uppercase())
        })
        .into_owned()
}
