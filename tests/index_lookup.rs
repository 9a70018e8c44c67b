//! Tests for glossary loading, indexing, and key resolution

use gloss::glossary::testing::{sample_glossary, SAMPLE_JSON};
use gloss::{Entry, Glossary, LoadError, LookupError};
use rstest::rstest;

#[rstest]
#[case::by_slug("a-posteriori")]
#[case::by_word("a posteriori")]
#[case::by_word_mixed_case("A Posteriori")]
#[case::by_word_upper("A POSTERIORI")]
fn test_lookup_cascade_resolves(#[case] key: &str) {
    let glossary = sample_glossary();
    assert_eq!(glossary.get(key).unwrap().slug, "a-posteriori");
}

#[rstest]
#[case("a priori")]
#[case("recede")]
#[case("")]
fn test_lookup_cascade_misses(#[case] key: &str) {
    let glossary = sample_glossary();
    assert!(glossary.get(key).is_none());
    assert_eq!(
        glossary.lookup(key),
        Err(LookupError::NotFound(key.to_string()))
    );
}

#[test]
fn test_contains_accepts_slug_or_word() {
    let glossary = sample_glossary();
    assert!(glossary.contains("celestial-angel"));
    assert!(glossary.contains("Celestial Angel"));
    assert!(!glossary.contains("celestial archangel"));
}

#[test]
fn test_iteration_is_slug_sorted() {
    let glossary = sample_glossary();
    let slugs: Vec<&str> = glossary.iter().map(|e| e.slug.as_str()).collect();
    let mut sorted = slugs.clone();
    sorted.sort();
    assert_eq!(slugs, sorted);
}

#[test]
fn test_top_level_entries_exclude_sub_entries() {
    let glossary = sample_glossary();
    let top: Vec<&str> = glossary
        .top_level_entries()
        .iter()
        .map(|e| e.slug.as_str())
        .collect();
    assert!(!top.contains(&"celestial-angel"));
    assert!(top.contains(&"celestial"));
}

#[test]
fn test_children_keep_file_order() {
    // celestial-angel precedes celestial-heaven in SAMPLE_JSON
    let glossary = sample_glossary();
    let slugs: Vec<&str> = glossary
        .children_of("celestial")
        .iter()
        .map(|e| e.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["celestial-angel", "celestial-heaven"]);
}

#[test]
fn test_children_of_leaf_is_empty() {
    let glossary = sample_glossary();
    assert!(glossary.children_of("accede").is_empty());
    assert!(glossary.children_of("no-such-slug").is_empty());
}

#[test]
fn test_duplicate_slug_keeps_last_record() {
    let glossary = Glossary::from_entries(vec![
        Entry::with_definition("charity", "early draft"),
        Entry::with_definition("want", "lack"),
        Entry::with_definition("charity", "love toward the neighbor in act"),
    ]);
    assert_eq!(glossary.len(), 2);
    assert_eq!(
        glossary["charity"].definitions[0],
        "love toward the neighbor in act"
    );
}

#[test]
fn test_record_without_definitions_fails_the_whole_load() {
    let result = Glossary::from_json_str(
        r#"{"entries": {
            "accede": {"definitions": ["to agree"]},
            "broken": {}
        }}"#,
    );
    assert_eq!(
        result.err(),
        Some(LoadError::MissingDefinitions {
            slug: "broken".to_string()
        })
    );
}

#[test]
fn test_sample_corpus_is_schema_shaped() {
    // The corpus doubles as the loader's happy-path fixture
    let glossary = Glossary::from_json_str(SAMPLE_JSON).unwrap();
    assert_eq!(glossary.len(), 10);
    assert_eq!(glossary.slugs().first(), Some(&"a-posteriori"));
}

#[test]
fn test_words_follow_slug_order() {
    let glossary = sample_glossary();
    assert_eq!(glossary.words().first(), Some(&"a posteriori"));
    assert_eq!(glossary.words().len(), glossary.len());
}
