//! Shared sample corpus for glossary tests
//!
//! # Glossary Testing Guidelines
//!
//! Tests should build their glossaries from the sample corpus below instead
//! of scattering JSON literals across test files. The corpus exercises every
//! rendering branch at least once — metadata pieces, flags, hierarchy,
//! cross-references, inline markers — so when the record format changes
//! there is exactly one place to update, and every test keeps running
//! against vetted content.
//!
//! Entries that only one test cares about (duplicate slugs, dangling
//! references) are constructed inline in that test with [`Entry`] literals;
//! everything else comes from here.

use super::index::Glossary;

/// A small but complete glossary document covering all rendering branches:
/// origin metadata, plural, pronunciation, flags, sub-entries, antonyms,
/// alternate translations, see-also references, and inline keyword markers.
pub const SAMPLE_JSON: &str = r#"{
  "entries": {
    "a-posteriori": {
      "origin": "L.",
      "definitions": ["from what comes after; reasoning from observed effects back to causes"]
    },
    "accede": {
      "definitions": ["to agree or give consent"],
      "opposite_slug": "recede"
    },
    "arcanum": {
      "origin": "L.",
      "plural": "arcana",
      "definitions": ["a secret; a piece of hidden knowledge"]
    },
    "astroid": {
      "new_word": true,
      "definitions": ["star-shaped; resembling the gem _|astroites|_"]
    },
    "betroth": {
      "definitions": ["to promise in marriage"],
      "also_translated": ["affiance"]
    },
    "celestial": {
      "theological_term": "Refers to the inmost heaven, not the visible sky.",
      "definitions": ["belonging to the inmost heaven, where love to the Lord reigns"],
      "see_also": ["conjugial"]
    },
    "celestial-angel": {
      "parent": "celestial",
      "definitions": ["an angel of the inmost heaven"]
    },
    "celestial-heaven": {
      "parent": "celestial",
      "definitions": ["the inmost or third heaven"]
    },
    "conjugial": {
      "new_word": true,
      "pronunciation": "conju'jul",
      "definitions": ["of or relating to married love"]
    },
    "want": {
      "archaic_usage": "Means lack or absence, not desire.",
      "definitions": ["lack; the absence of something", "poverty or destitution"]
    }
  }
}"#;

/// Load the sample corpus. Panics only if the corpus itself is broken,
/// which the loader tests would catch first.
pub fn sample_glossary() -> Glossary {
    Glossary::from_json_str(SAMPLE_JSON).expect("sample corpus must load")
}
