//! Document-level rendering tests
//!
//! The full-document test pins the exact output for the sample corpus, byte
//! for byte; the remaining tests pin the structural properties individually
//! so a failure points at the branch that broke.

use gloss::glossary::formats::render_document;
use gloss::glossary::testing::sample_glossary;
use gloss::{Entry, Glossary};

#[test]
fn test_render_document_matches_expected() {
    let rendered = render_document(&sample_glossary());

    let expected = "\
== A

[[a-posteriori]]
**A POSTERIORI** (L.) = from what comes after; reasoning from observed effects back to causes

[[accede]]
**ACCEDE** = to agree or give consent +
Opp. **RECEDE**

[[arcanum]]
**ARCANUM** (pl. arcana) (L.) = a secret; a piece of hidden knowledge

[[astroid]]
**ASTROID** [new word] = star-shaped; resembling the gem _**ASTROITES**_


== B

[[betroth]]
**BETROTH** = to promise in marriage +
(also transl. **AFFIANCE**)


== C

[[celestial]]
**CELESTIAL** [misleading] = belonging to the inmost heaven, where love to the Lord reigns +
See also: xref:conjugial[**CONJUGIAL**] +
{nbsp}{nbsp}[[celestial-angel]]
{nbsp}{nbsp}**CELESTIAL ANGEL** = an angel of the inmost heaven +
{nbsp}{nbsp}[[celestial-heaven]]
{nbsp}{nbsp}**CELESTIAL HEAVEN** = the inmost or third heaven

[[conjugial]]
**CONJUGIAL** /conju'jul/ [new word] = of or relating to married love


== W

[[want]]
**WANT** [misleading] =
1. lack; the absence of something
2. poverty or destitution
";

    assert_eq!(rendered, expected);
}

#[test]
fn test_sections_appear_in_slug_order() {
    let rendered = render_document(&sample_glossary());

    let a = rendered.find("== A").expect("A section");
    let b = rendered.find("== B").expect("B section");
    let c = rendered.find("== C").expect("C section");
    let w = rendered.find("== W").expect("W section");
    assert!(a < b && b < c && c < w);
}

#[test]
fn test_children_render_only_under_their_parent() {
    let rendered = render_document(&sample_glossary());

    // Sub-entries appear exactly once, nested, not as top-level blocks
    assert_eq!(rendered.matches("[[celestial-angel]]").count(), 1);
    assert_eq!(rendered.matches("[[celestial-heaven]]").count(), 1);
    assert!(rendered.contains("{nbsp}{nbsp}[[celestial-angel]]"));

    let parent = rendered.find("[[celestial]]").expect("parent anchor");
    let angel = rendered.find("[[celestial-angel]]").expect("angel anchor");
    let next = rendered.find("[[conjugial]]").expect("next top-level anchor");
    assert!(parent < angel && angel < next);
}

#[test]
fn test_letter_grouping_follows_slug_order_not_letters() {
    // A slug that sorts under "a" but displays a "Z" word drags its section
    // out of alphabetical position; the renderer reproduces that rather
    // than re-sorting by letter.
    let glossary = Glossary::from_entries(vec![
        Entry::with_definition("aardvark", "a burrowing animal").with_word("zebra"),
        Entry::with_definition("badger", "another burrowing animal"),
    ]);
    let rendered = render_document(&glossary);

    let z = rendered.find("== Z").expect("Z section");
    let b = rendered.find("== B").expect("B section");
    assert!(z < b);
}

#[test]
fn test_repeated_letters_repeat_the_section() {
    // Same coupling as above: sections follow traversal order, so a letter
    // can head more than one section when slug order interleaves it.
    let glossary = Glossary::from_entries(vec![
        Entry::with_definition("alpha", "first letter"),
        Entry::with_definition("beta", "second letter").with_word("burrow"),
        Entry::with_definition("gamma", "third letter").with_word("another"),
    ]);
    let rendered = render_document(&glossary);

    // Traversal order is alpha (A), beta->burrow (B), gamma->another (A)
    assert_eq!(rendered.matches("== A").count(), 2);
    assert_eq!(rendered.matches("== B").count(), 1);
}

#[test]
fn test_empty_glossary_renders_empty_document() {
    let glossary = Glossary::from_entries(Vec::new());
    assert_eq!(render_document(&glossary), "");
}
