//! Glossary collection with derived lookup indexes
//!
//! Entries are stored flat, keyed by slug, with the parent/child hierarchy
//! derived into a separate index at construction time. A glossary is built
//! once from a bulk record set and read-only afterwards; replacing the data
//! means building a new instance.

use super::entry::{to_slug, Entry};
use super::error::LookupError;
use std::collections::{BTreeMap, HashMap};
use std::ops;

/// A collection of glossary entries with slug, word, and hierarchy indexes.
#[derive(Debug)]
pub struct Glossary {
    /// Entries keyed by slug; BTreeMap keeps iteration slug-sorted
    entries: BTreeMap<String, Entry>,
    /// Lowercased display word -> slug
    by_word: HashMap<String, String>,
    /// Parent slug -> child slugs, in the order first seen during load
    children: HashMap<String, Vec<String>>,
}

impl Glossary {
    /// Build a glossary from already-validated entries.
    ///
    /// Duplicate slugs resolve last-write-wins: the later entry replaces the
    /// earlier one while keeping its original position, and a warning is
    /// logged. Child ordering under a parent follows the order entries appear
    /// in `list`, so callers that care about sub-entry order must supply
    /// records in a deterministic order.
    pub fn from_entries(list: Vec<Entry>) -> Self {
        let mut entries: BTreeMap<String, Entry> = BTreeMap::new();
        let mut order: Vec<String> = Vec::new();

        for entry in list {
            let slug = entry.slug.clone();
            if entries.insert(slug.clone(), entry).is_some() {
                log::warn!("duplicate slug '{slug}': later record replaces the earlier one");
            } else {
                order.push(slug);
            }
        }

        let mut by_word: HashMap<String, String> = HashMap::new();
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for slug in &order {
            let entry = &entries[slug];
            by_word.insert(entry.word.to_lowercase(), slug.clone());
            if let Some(parent) = &entry.parent {
                children.entry(parent.clone()).or_default().push(slug.clone());
            }
        }

        Self {
            entries,
            by_word,
            children,
        }
    }

    /// Get an entry by slug or display word.
    ///
    /// Resolution order: exact slug, case-insensitive word, then the
    /// slugified form of the key. First hit wins; `None` when nothing
    /// matches.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        if let Some(entry) = self.entries.get(key) {
            return Some(entry);
        }
        if let Some(slug) = self.by_word.get(&key.to_lowercase()) {
            return self.entries.get(slug);
        }
        self.entries.get(&to_slug(key))
    }

    /// Get an entry by slug or display word, failing loudly on a miss.
    pub fn lookup(&self, key: &str) -> Result<&Entry, LookupError> {
        self.get(key)
            .ok_or_else(|| LookupError::NotFound(key.to_string()))
    }

    /// Check whether a slug or word resolves to an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Child entries of the given parent slug, in load order.
    pub fn children_of(&self, slug: &str) -> Vec<&Entry> {
        self.children
            .get(slug)
            .map(|slugs| slugs.iter().filter_map(|s| self.entries.get(s)).collect())
            .unwrap_or_default()
    }

    /// Entries with no parent, sorted by slug.
    pub fn top_level_entries(&self) -> Vec<&Entry> {
        self.entries.values().filter(|e| !e.has_parent()).collect()
    }

    /// Iterate all entries sorted by slug.
    ///
    /// This ordering is the contract the word-list extractors and the
    /// document renderer rely on for reproducible output.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the glossary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All slugs, sorted.
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// All display words, in slug order.
    pub fn words(&self) -> Vec<&str> {
        self.entries.values().map(|e| e.word.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = &'a Entry;
    type IntoIter = std::collections::btree_map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Indexing by slug or word; panics when the key resolves to nothing.
/// Use [`Glossary::get`] or [`Glossary::lookup`] when absence is expected.
impl ops::Index<&str> for Glossary {
    type Output = Entry;

    fn index(&self, key: &str) -> &Entry {
        match self.get(key) {
            Some(entry) => entry,
            None => panic!("No glossary entry for key '{key}'"),
        }
    }
}
