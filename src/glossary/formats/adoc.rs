//! AsciiDoc rendering of glossary entries
//!
//! Produces the nested, cross-referenced entry blocks of the printed
//! glossary. The shape of one block:
//!
//! ```text
//! [[conjugial]]
//! **CONJUGIAL** /conju'jul/ [new word] = of or relating to marriage love +
//! Opp. **SCORTATORY** +
//! See also: xref:conjugial-love[**CONJUGIAL LOVE**]
//! ```
//!
//! Sub-entries follow their parent, indented with `{nbsp}` pairs and joined
//! with the AsciiDoc ` +` soft line continuation so the whole family renders
//! as one paragraph in the book.

use crate::glossary::entry::{slug_to_word, Entry};
use crate::glossary::index::Glossary;
use crate::glossary::markup;

use super::registry::{FormatError, Formatter};

/// Nesting levels of sub-entries the renderer will follow. The data has two;
/// anything deeper than this means a parent cycle in the source records.
const MAX_CHILD_DEPTH: usize = 4;

/// Render one entry (and its sub-entries) to an AsciiDoc block.
pub fn render_entry(entry: &Entry, glossary: &Glossary) -> String {
    render_entry_at(entry, glossary, 0)
}

fn render_entry_at(entry: &Entry, glossary: &Glossary, depth: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Anchor first, so xref cross-references can target every entry
    lines.push(format!("[[{}]]", entry.slug));

    let word_upper = entry.word.to_uppercase();
    let metadata = metadata_cluster(entry);

    if entry.definitions.len() == 1 {
        let defn = markup::rewrite(&entry.definitions[0]);
        lines.push(match &metadata {
            Some(meta) => format!("**{word_upper}** {meta} = {defn}"),
            None => format!("**{word_upper}** = {defn}"),
        });
    } else {
        lines.push(match &metadata {
            Some(meta) => format!("**{word_upper}** {meta} ="),
            None => format!("**{word_upper}** ="),
        });
        for (i, defn) in entry.definitions.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, markup::rewrite(defn)));
        }
    }

    if let Some(opposite) = &entry.opposite_slug {
        let word = resolve_word(glossary, opposite);
        soft_continue(&mut lines);
        lines.push(format!("Opp. **{}**", word.to_uppercase()));
    }

    if entry.has_also_translated() {
        let alternates = entry
            .also_translated
            .iter()
            .map(|w| format!("**{}**", w.to_uppercase()))
            .collect::<Vec<_>>()
            .join(" and ");
        soft_continue(&mut lines);
        lines.push(format!("(also transl. {alternates})"));
    }

    if !entry.see_also.is_empty() {
        let refs = entry
            .see_also
            .iter()
            .map(|slug| {
                format!(
                    "xref:{}[**{}**]",
                    slug,
                    resolve_word(glossary, slug).to_uppercase()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        soft_continue(&mut lines);
        lines.push(format!("See also: {refs}"));
    }

    let children = glossary.children_of(&entry.slug);
    if !children.is_empty() {
        if depth >= MAX_CHILD_DEPTH {
            log::warn!(
                "entry '{}' nests deeper than {} levels; skipping its sub-entries",
                entry.slug,
                MAX_CHILD_DEPTH
            );
        } else {
            for child in children {
                let block = render_entry_at(child, glossary, depth + 1);
                // {nbsp} pairs survive the PDF pipeline where leading spaces don't
                let indented: Vec<String> = block
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| format!("{{nbsp}}{{nbsp}}{line}"))
                    .collect();
                if !indented.is_empty() {
                    soft_continue(&mut lines);
                    lines.extend(indented);
                }
            }
        }
    }

    lines.join("\n")
}

/// Render the whole glossary: top-level entries in slug order, grouped into
/// a letter section whenever the first letter of the display word changes.
///
/// The grouping is a side effect of slug ordering, not an independent sort.
/// A record set whose slugs disagree with the display-word initials will
/// produce out-of-order or repeated letter sections; that coupling is part
/// of the output contract.
pub fn render_document(glossary: &Glossary) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_letter: Option<String> = None;

    for entry in glossary.top_level_entries() {
        let first_letter = entry
            .word
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string());

        if first_letter != current_letter {
            if current_letter.is_some() {
                lines.push(String::new()); // blank line before the new section
            }
            if let Some(letter) = &first_letter {
                lines.push(format!("== {letter}"));
                lines.push(String::new());
            }
            current_letter = first_letter;
        }

        lines.push(render_entry(entry, glossary));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// The parenthesized metadata pieces after the headword, in display order.
fn metadata_cluster(entry: &Entry) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(plural) = &entry.plural {
        parts.push(format!("(pl. {plural})"));
    }
    if let Some(origin) = &entry.origin {
        match &entry.source_word {
            Some(source) => parts.push(format!("({origin} _{}_)", source.to_uppercase())),
            None => parts.push(format!("({origin})")),
        }
    }
    if let Some(pos) = &entry.part_of_speech {
        parts.push(format!("({pos})"));
    }
    if let Some(pronunciation) = &entry.pronunciation {
        parts.push(format!("/{pronunciation}/"));
    }
    // Archaic and doctrinal reasons share one visible tag in the book
    if entry.is_misleading() {
        parts.push("[misleading]".to_string());
    }
    if entry.new_word {
        parts.push("[new word]".to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Resolve a referenced slug to its display word, falling back to the
/// humanized slug text when the reference dangles.
fn resolve_word(glossary: &Glossary, slug: &str) -> String {
    match glossary.get(slug) {
        Some(entry) => entry.word.clone(),
        None => {
            log::warn!("unresolved cross-reference '{slug}'; using the slug text");
            slug_to_word(slug)
        }
    }
}

/// Mark the previous line as soft-continued with the AsciiDoc ` +` marker.
fn soft_continue(lines: &mut [String]) {
    if let Some(last) = lines.last_mut() {
        last.push_str(" +");
    }
}

/// The full sectioned glossary document.
pub struct AdocFormatter;

impl Formatter for AdocFormatter {
    fn name(&self) -> &str {
        "adoc"
    }

    fn serialize(&self, glossary: &Glossary) -> Result<String, FormatError> {
        Ok(render_document(glossary))
    }

    fn description(&self) -> &str {
        "All entries as sectioned AsciiDoc, sub-entries nested under their parents"
    }
}
