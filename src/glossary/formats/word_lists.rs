//! Flat word-list reports for the book's front matter
//!
//! Two reports are generated from the entry flags: the new-words list
//! (coinages absent from standard dictionaries) and the misleading-words
//! table (terms used in an archaic or doctrinal sense). Both are simple
//! filter-and-format passes over the glossary's sorted iteration.

use crate::glossary::index::Glossary;

use super::registry::{FormatError, Formatter};

/// Columns in the misleading-words table.
const TABLE_COLUMNS: usize = 4;

/// Header for the new-words section.
const NEW_WORDS_HEADER: &str = "== New Words

There are more than a dozen new words in Swedenborg's Writings, many of them appearing only a few times or in one particular translation. There are five that are frequently used:

// Generated from swedenborg-glossary.json - do not edit below this line
";

/// Header for the misleading-words section.
const MISLEADING_WORDS_HEADER: &str = "== Misleading Words

There are many words that have a different meaning than the average reader would expect. Here are some of them:

// Generated from swedenborg-glossary.json - do not edit below this line
";

/// Uppercased words of all new-word entries, de-duplicated and sorted.
pub fn new_words(glossary: &Glossary) -> Vec<String> {
    let mut words: Vec<String> = glossary
        .iter()
        .filter(|e| e.new_word)
        .map(|e| e.word.to_uppercase())
        .collect();
    words.sort();
    words.dedup();
    words
}

/// Uppercased words of all entries flagged with an archaic or doctrinal
/// reason, de-duplicated and sorted.
pub fn flagged_words(glossary: &Glossary) -> Vec<String> {
    let mut words: Vec<String> = glossary
        .iter()
        .filter(|e| e.is_misleading())
        .map(|e| e.word.to_uppercase())
        .collect();
    words.sort();
    words.dedup();
    words
}

/// New words on a single line, double-space separated.
pub fn format_new_words(words: &[String]) -> String {
    words.join("  ")
}

/// Misleading words as an AsciiDoc table, four columns, borderless, the
/// last row padded with empty cells.
pub fn format_flagged_words(words: &[String]) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "[cols=\"1,1,1,1\", frame=none, grid=none]".to_string(),
        "|===".to_string(),
    ];

    for row in words.chunks(TABLE_COLUMNS) {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        while cells.len() < TABLE_COLUMNS {
            cells.push("");
        }
        lines.push(format!("|{}", cells.join(" |")));
    }

    lines.push("|===".to_string());
    lines.join("\n")
}

/// The complete new-words section.
pub struct NewWordsFormatter;

impl Formatter for NewWordsFormatter {
    fn name(&self) -> &str {
        "new-words"
    }

    fn serialize(&self, glossary: &Glossary) -> Result<String, FormatError> {
        let words = new_words(glossary);
        Ok(format!("{}{}\n", NEW_WORDS_HEADER, format_new_words(&words)))
    }

    fn description(&self) -> &str {
        "Words absent from standard dictionaries, as a single line"
    }
}

/// The complete misleading-words section.
pub struct MisleadingWordsFormatter;

impl Formatter for MisleadingWordsFormatter {
    fn name(&self) -> &str {
        "misleading-words"
    }

    fn serialize(&self, glossary: &Glossary) -> Result<String, FormatError> {
        let words = flagged_words(glossary);
        Ok(format!(
            "{}{}\n",
            MISLEADING_WORDS_HEADER,
            format_flagged_words(&words)
        ))
    }

    fn description(&self) -> &str {
        "Archaic and doctrinal terms, as a four-column table"
    }
}
