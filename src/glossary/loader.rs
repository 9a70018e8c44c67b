//! Loading a glossary from its JSON record set
//!
//! The source document is a single JSON object whose `entries` member maps
//! slugs to entry records. Schema validation against the external JSON Schema
//! happens upstream; the loader still checks the structural requirements it
//! cannot do without (a record must parse and must carry at least one
//! definition) and fails the whole load on the first violation.
//!
//! serde_json is built with `preserve_order`, so iterating the parsed
//! `entries` object follows file order. That is what makes sub-entry
//! ordering under a parent deterministic for a given input file.

use super::entry::{slug_to_word, Entry};
use super::error::LoadError;
use super::index::Glossary;
use serde::Deserialize;

/// One entry record as it appears in the JSON source.
///
/// Every field except `definitions` is optional; `word` defaults to the
/// slug with hyphens restored. `latin_word` is the wire name for the
/// original-language word displayed next to the origin tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub word: Option<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    pub origin: Option<String>,
    pub latin_word: Option<String>,
    pub part_of_speech: Option<String>,
    pub pronunciation: Option<String>,
    pub plural: Option<String>,
    pub archaic_usage: Option<String>,
    pub theological_term: Option<String>,
    #[serde(default)]
    pub new_word: bool,
    pub opposite_slug: Option<String>,
    #[serde(default)]
    pub also_translated: Vec<String>,
    #[serde(default)]
    pub see_also: Vec<String>,
    pub parent: Option<String>,
}

impl RawEntry {
    /// Validate the record and attach its slug, producing an [`Entry`].
    fn into_entry(self, slug: String) -> Result<Entry, LoadError> {
        if self.definitions.is_empty() {
            return Err(LoadError::MissingDefinitions { slug });
        }
        let word = self.word.unwrap_or_else(|| slug_to_word(&slug));
        Ok(Entry {
            slug,
            word,
            definitions: self.definitions,
            origin: self.origin,
            source_word: self.latin_word,
            part_of_speech: self.part_of_speech,
            pronunciation: self.pronunciation,
            plural: self.plural,
            archaic_usage: self.archaic_usage,
            theological_term: self.theological_term,
            new_word: self.new_word,
            opposite_slug: self.opposite_slug,
            also_translated: self.also_translated,
            see_also: self.see_also,
            parent: self.parent,
        })
    }
}

/// Top-level shape of the glossary document. Metadata members other than
/// `entries` are accepted and ignored.
#[derive(Debug, Deserialize)]
struct RawGlossary {
    entries: serde_json::Map<String, serde_json::Value>,
}

impl Glossary {
    /// Load a glossary from slug/record pairs, in caller-supplied order.
    ///
    /// The pair order defines child ordering under each parent.
    pub fn from_records(records: Vec<(String, RawEntry)>) -> Result<Self, LoadError> {
        let mut entries = Vec::with_capacity(records.len());
        for (slug, raw) in records {
            entries.push(raw.into_entry(slug)?);
        }
        Ok(Glossary::from_entries(entries))
    }

    /// Load a glossary from a JSON document string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawGlossary =
            serde_json::from_str(json).map_err(|e| LoadError::Json(e.to_string()))?;

        let mut records = Vec::with_capacity(raw.entries.len());
        for (slug, value) in raw.entries {
            let record: RawEntry =
                serde_json::from_value(value).map_err(|e| LoadError::InvalidRecord {
                    slug: slug.clone(),
                    message: e.to_string(),
                })?;
            records.push((slug, record));
        }
        Glossary::from_records(records)
    }
}
