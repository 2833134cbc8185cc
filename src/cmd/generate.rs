//! Generate command implementation.

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::generate::{assemble, generate as generate_module};
use crate::ui;
use std::io::{self, Write};

/// Regenerate the constants module from the configured documents
pub fn generate(config: &Config, dry_run: bool) -> anyhow::Result<Vec<Diagnostic>> {
    let options = config.generator_options();
    ui::generating(&options.source_dir, &options.extension);

    if dry_run {
        let assembly = match assemble(&options) {
            Ok(assembly) => assembly,
            Err(e) => return Ok(vec![e.into()]),
        };
        for entry in &assembly.module.entries {
            ui::found(&entry.source);
        }
        let mut stdout = io::stdout();
        stdout.write_all(assembly.text.as_bytes())?;
        stdout.flush()?;
        return Ok(assembly.warnings);
    }

    let report = match generate_module(&options) {
        Ok(report) => report,
        Err(e) => return Ok(vec![e.into()]),
    };

    for doc in &report.documents {
        ui::found(doc);
    }
    ui::generated(&report.output, report.documents.len());
    Ok(report.warnings)
}
