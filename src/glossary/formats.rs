//! Output format implementations for glossary serialization
//!
//! This module contains the formatters that turn a loaded glossary into
//! book-ready text:
//! - The sectioned AsciiDoc document of all entries (adoc)
//! - The flat word-list reports for the book's front matter (new-words,
//!   misleading-words)

pub mod adoc;
pub mod registry;
pub mod word_lists;

pub use adoc::{render_document, render_entry, AdocFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use word_lists::{
    flagged_words, new_words, MisleadingWordsFormatter, NewWordsFormatter,
};
