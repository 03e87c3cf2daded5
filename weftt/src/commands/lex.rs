//! Lex command implementation.
//!
//! Scans a template file and prints its item stream, either as readable
//! text lines or as JSON. A lexical error is rendered with the offending
//! source line and a caret under the position it starts at.

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use serde_json::json;
use tracing::debug;
use weft_lex::{Item, ItemKind, Lexer};
use weft_util::{column_at, line_at, line_span};

use crate::error::{Result, WefttError};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Template file to scan.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
}

/// How the item stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One item per line: position, kind, rendered text.
    Text,
    /// A JSON array of item objects.
    Json,
}

/// Execute the lex command.
///
/// # Arguments
/// * `args` - The parsed command arguments
///
/// # Returns
/// * `Result<()>` - Success, or the first error encountered
pub fn run_lex(args: LexArgs) -> Result<()> {
    let source = fs::read_to_string(&args.file)?;
    let name = args.file.display().to_string();
    debug!(file = %name, bytes = source.len(), "scanning template");

    let mut lexer = Lexer::new(name.clone(), source.as_str());
    let mut items = Vec::new();
    let error = loop {
        let item = lexer.next_item();
        match item.kind {
            ItemKind::Eof => break None,
            ItemKind::Error => break Some(item),
            _ => items.push(item),
        }
    };

    print_items(&items, args.format)?;
    debug!(items = items.len(), "scan finished");
    if args.verbose {
        eprintln!("scanned {} items from {}", items.len(), name);
    }

    if let Some(item) = error {
        report_error(&name, &source, &item);
        return Err(WefttError::Lex {
            file: name,
            line: line_at(&source, item.pos),
            message: item.text,
        });
    }
    Ok(())
}

/// Print the collected items in the requested format.
fn print_items(items: &[Item], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}\t{:?}\t{}", item.pos, item.kind, item);
            }
        }
        OutputFormat::Json => {
            let values: Vec<_> = items
                .iter()
                .map(|item| {
                    json!({
                        "kind": item.kind,
                        "pos": item.pos,
                        "text": item.text,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }
    Ok(())
}

/// Write the offending source line and a caret marker to stderr.
fn report_error(name: &str, source: &str, item: &Item) {
    let line = line_at(source, item.pos);
    let column = column_at(source, item.pos);
    eprintln!("error: {}", item.text);
    eprintln!("  --> {name}:{line}:{column}");
    if let Ok(text) = line_span(source, item.pos).text_in(source) {
        eprintln!("   | {text}");
        eprintln!("   | {}^", " ".repeat(column.saturating_sub(1)));
    }
}
