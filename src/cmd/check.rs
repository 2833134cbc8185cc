//! Check command implementation.

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::generate::{Freshness, assemble, freshness};
use crate::ui;

/// Verify the generated module matches the current documents without writing
pub fn check(config: &Config) -> anyhow::Result<Vec<Diagnostic>> {
    let options = config.generator_options();

    let assembly = match assemble(&options) {
        Ok(assembly) => assembly,
        Err(e) => return Ok(vec![e.into()]),
    };

    let output = options.output.display().to_string();
    let state = match freshness(&assembly, &options.output) {
        Ok(state) => state,
        Err(e) => return Ok(vec![e.into()]),
    };

    let stale = match state {
        Freshness::UpToDate => {
            ui::up_to_date(&options.output);
            None
        }
        Freshness::Stale => Some(Diagnostic::new(
            DiagnosticCode::E0402OutputStale,
            "Generated module is out of date (run `gqlembed generate`)",
            output,
        )),
        Freshness::Missing => Some(Diagnostic::new(
            DiagnosticCode::E0402OutputStale,
            "Generated module does not exist (run `gqlembed generate`)",
            output,
        )),
    };

    let mut diags = assembly.warnings;
    diags.extend(stale);
    Ok(diags)
}
