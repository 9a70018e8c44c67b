//! # gloss
//!
//! Data model and rendering engine for a book glossary.
//!
//! A glossary is loaded wholesale from a JSON record set into a read-only
//! [`Glossary`](glossary::index::Glossary), then rendered to AsciiDoc text:
//! nested parent/child entry blocks, cross-references, and the flat word-list
//! reports used in the book's front matter.
//!
//! ## Testing
//!
//! Integration tests build their glossaries from the shared sample corpus in
//! the [testing module](glossary::testing) rather than ad-hoc JSON literals.

pub mod glossary;

// Re-export the main types for convenience
pub use glossary::{
    entry::Entry,
    error::{LoadError, LookupError},
    formats::{FormatError, FormatRegistry, Formatter},
    index::Glossary,
};
