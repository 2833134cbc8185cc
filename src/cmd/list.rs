//! List command implementation.

use crate::OutputFormat;
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::naming::lower_first;
use crate::scan::discover_documents;
use crate::ui::stdout_supports_color;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;

/// Check if stdout supports colors (delegates to centralized ui module)
fn use_colors() -> bool {
    stdout_supports_color()
}

/// Create an identifier cell (cyan, bold when colors enabled)
fn id_cell(text: &str) -> Cell {
    if use_colors() {
        Cell::new(text)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(text)
    }
}

/// Create a header cell (bold when colors enabled)
fn header_cell(text: &str) -> Cell {
    if use_colors() {
        Cell::new(text).add_attribute(Attribute::Bold)
    } else {
        Cell::new(text)
    }
}

/// Serializable document summary for JSON output
#[derive(Serialize)]
struct DocumentSummary {
    identifier: String,
    path: String,
    bytes: usize,
}

/// List discovered documents and the identifiers they map to.
///
/// Identifiers are derived without validation so collisions stay visible.
pub fn list(config: &Config, output: OutputFormat) -> anyhow::Result<Vec<Diagnostic>> {
    let options = config.generator_options();
    let documents = match discover_documents(&options) {
        Ok(docs) => docs,
        Err(e) => return Ok(vec![e.into()]),
    };

    let summaries: Vec<DocumentSummary> = documents
        .iter()
        .map(|doc| DocumentSummary {
            identifier: lower_first(&doc.base_name),
            path: doc.relative_path.display().to_string(),
            bytes: doc.content.len(),
        })
        .collect();

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Plain => {
            for s in &summaries {
                println!("{}\t{}\t{}", s.identifier, s.path, s.bytes);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(
                    ["Identifier", "Path", "Bytes"]
                        .iter()
                        .map(|h| header_cell(h))
                        .collect::<Vec<_>>(),
                );

            for s in &summaries {
                table.add_row(vec![
                    id_cell(&s.identifier),
                    Cell::new(&s.path),
                    Cell::new(s.bytes),
                ]);
            }

            println!("{table}");
        }
    }

    Ok(vec![])
}
