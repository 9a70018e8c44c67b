//! Command-line interface for gloss
//! This binary renders a glossary JSON file into the book's AsciiDoc artifacts.
//!
//! Usage:
//!   gloss export `<input.json>` [output.adoc] [--format `<format>`]  - Render one format to a file or stdout
//!   gloss word-lists `<input.json>` `<output-dir>`                     - Write the front-matter word-list files
//!   gloss list-formats                                             - List all registered formats

use clap::{Arg, Command};
use std::path::{Path, PathBuf};

use gloss::glossary::formats::FormatRegistry;
use gloss::Glossary;

fn main() {
    env_logger::init();

    let matches = Command::new("gloss")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering a glossary into book-ready AsciiDoc")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("export")
                .about("Render the glossary with a registered format")
                .arg(
                    Arg::new("input")
                        .help("Path to the glossary JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Output file (default: stdout)")
                        .index(2),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'adoc', 'new-words')")
                        .default_value("adoc"),
                ),
        )
        .subcommand(
            Command::new("word-lists")
                .about("Write new-words.adoc and archaic-words.adoc into a directory")
                .arg(
                    Arg::new("input")
                        .help("Path to the glossary JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output_dir")
                        .help("Directory for the generated .adoc files (e.g., book/)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("export", export_matches)) => {
            let input = export_matches.get_one::<String>("input").unwrap();
            let output = export_matches.get_one::<String>("output");
            let format = export_matches.get_one::<String>("format").unwrap();
            handle_export_command(input, output.map(String::as_str), format);
        }
        Some(("word-lists", word_list_matches)) => {
            let input = word_list_matches.get_one::<String>("input").unwrap();
            let output_dir = word_list_matches.get_one::<String>("output_dir").unwrap();
            handle_word_lists_command(input, output_dir);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Load a glossary from a JSON file, exiting on any failure.
fn load_glossary(path: &str) -> Glossary {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        std::process::exit(1);
    });

    Glossary::from_json_str(&source).unwrap_or_else(|e| {
        eprintln!("Error loading {path}: {e}");
        std::process::exit(1);
    })
}

/// Handle the export command
fn handle_export_command(input: &str, output: Option<&str>, format: &str) {
    let glossary = load_glossary(input);

    let registry = FormatRegistry::with_defaults();
    let rendered = registry.serialize(&glossary, format).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            std::fs::write(path, &rendered).unwrap_or_else(|e| {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            });
            eprintln!("Wrote {path}");
        }
        None => print!("{rendered}"),
    }
}

/// Handle the word-lists command
fn handle_word_lists_command(input: &str, output_dir: &str) {
    let dir = PathBuf::from(output_dir);
    if !dir.is_dir() {
        eprintln!("Error: {output_dir} is not a directory");
        std::process::exit(1);
    }

    let glossary = load_glossary(input);
    let registry = FormatRegistry::with_defaults();

    write_report(&registry, &glossary, "new-words", &dir.join("new-words.adoc"));
    write_report(
        &registry,
        &glossary,
        "misleading-words",
        &dir.join("archaic-words.adoc"),
    );
}

fn write_report(registry: &FormatRegistry, glossary: &Glossary, format: &str, path: &Path) {
    let content = registry.serialize(glossary, format).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    std::fs::write(path, content).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    });
    eprintln!("Wrote {}", path.display());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        match registry.get(&name) {
            Some(formatter) => {
                println!("  {name}");
                println!("    {}", formatter.description());
            }
            None => println!("  {name}"),
        }
    }
}
