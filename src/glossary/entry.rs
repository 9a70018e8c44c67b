//! Glossary entry record and slug helpers

use std::fmt;

/// Convert a display word to its slug form.
///
/// A slug is the stable identifier derived from the word: lowercase, trimmed,
/// with spaces replaced by hyphens (e.g. "a posteriori" -> "a-posteriori").
/// Slugs are the unique keys of the record set and the targets of every
/// cross-reference.
pub fn to_slug(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "-")
}

/// Convert a slug back to a display word (hyphens become spaces).
pub fn slug_to_word(slug: &str) -> String {
    slug.replace('-', " ")
}

/// One glossary term with its definitions and cross-reference metadata.
///
/// Entries are immutable once constructed; the [`Glossary`](super::index::Glossary)
/// only ever hands out shared references. Every slug-valued field
/// (`opposite_slug`, `see_also`, `parent`) may refer to a slug that does not
/// exist in the loaded set — rendering resolves those with a humanized
/// fallback instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Unique key within the glossary
    pub slug: String,
    /// Display text of the term
    pub word: String,
    /// One or more definition strings; never empty after loading
    pub definitions: Vec<String>,
    /// Language of origin (L., Gr., Heb., Fr.)
    pub origin: Option<String>,
    /// Original-language word shown next to the origin
    pub source_word: Option<String>,
    /// Part of speech (n., adj., adv., v., prep., conj.)
    pub part_of_speech: Option<String>,
    /// Pronunciation guide
    pub pronunciation: Option<String>,
    /// Plural form of the word
    pub plural: Option<String>,
    /// Reason the word is used in an older sense than modern usage
    pub archaic_usage: Option<String>,
    /// Reason the word carries a specific doctrinal meaning
    pub theological_term: Option<String>,
    /// Term not found in standard dictionaries
    pub new_word: bool,
    /// Slug of the antonym entry
    pub opposite_slug: Option<String>,
    /// Alternative translation words
    pub also_translated: Vec<String>,
    /// Slugs of related entries ("See also" cross-references)
    pub see_also: Vec<String>,
    /// Slug of the containing entry, for sub-entries
    pub parent: Option<String>,
}

impl Entry {
    /// Create an entry with the word derived from the slug.
    pub fn new(slug: impl Into<String>, definitions: Vec<String>) -> Self {
        let slug = slug.into();
        let word = slug_to_word(&slug);
        Self {
            slug,
            word,
            definitions,
            origin: None,
            source_word: None,
            part_of_speech: None,
            pronunciation: None,
            plural: None,
            archaic_usage: None,
            theological_term: None,
            new_word: false,
            opposite_slug: None,
            also_translated: Vec::new(),
            see_also: Vec::new(),
            parent: None,
        }
    }

    /// Create a single-definition entry.
    pub fn with_definition(slug: impl Into<String>, definition: &str) -> Self {
        Self::new(slug, vec![definition.to_string()])
    }

    /// Override the display word derived from the slug.
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    /// Check if the entry has a language of origin.
    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    /// Check if the entry has a plural form.
    pub fn has_plural(&self) -> bool {
        self.plural.is_some()
    }

    /// Check if the entry has an antonym.
    pub fn has_opposite(&self) -> bool {
        self.opposite_slug.is_some()
    }

    /// Check if the entry has a parent (is a sub-entry).
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Check if the entry has alternative translations.
    pub fn has_also_translated(&self) -> bool {
        !self.also_translated.is_empty()
    }

    /// Check if the entry carries either an archaic-usage or a theological
    /// reason. Both conditions surface as the single `[misleading]` tag in
    /// the book, so formatting only ever needs the combined predicate.
    pub fn is_misleading(&self) -> bool {
        self.archaic_usage.is_some() || self.theological_term.is_some()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry('{}', {} definitions)",
            self.slug,
            self.definitions.len()
        )
    }
}
