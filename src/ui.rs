//! CLI output formatting with colors.
//!
//! All progress output goes to stderr so stdout stays clean for `--dry-run`,
//! `list` and `trigger`. Colors auto-disable when output is not a TTY.

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;

/// Check if stderr supports colors (TTY detection)
fn use_colors() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Check if stdout supports colors (for tables)
pub fn stdout_supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

// =============================================================================
// Color Helpers
// =============================================================================

/// Format a success message (green checkmark prefix)
pub fn success(msg: impl Display) {
    if use_colors() {
        eprintln!("{} {}", "✓".green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Format an info/action message (no special prefix)
pub fn info(msg: impl Display) {
    eprintln!("{}", msg);
}

/// Format a created file message
pub fn created(kind: &str, path: &Path) {
    if use_colors() {
        eprintln!("{} {}: {}", "Created".green(), kind, path.display().cyan());
    } else {
        eprintln!("Created {}: {}", kind, path.display());
    }
}

/// Announce the start of a generator run
pub fn generating(source: &Path, extension: &str) {
    if use_colors() {
        eprintln!(
            "Generating from {} ({})",
            source.display().cyan(),
            extension.yellow()
        );
    } else {
        eprintln!("Generating from {} ({})", source.display(), extension);
    }
}

/// Format one discovered document
pub fn found(path: &Path) {
    if use_colors() {
        eprintln!("  {} {}", "+".green(), path.display());
    } else {
        eprintln!("  + {}", path.display());
    }
}

/// Format the completion line of a generator run
pub fn generated(path: &Path, count: usize) {
    if use_colors() {
        eprintln!(
            "{} Generated {} with {} constant(s)",
            "✓".green(),
            path.display().cyan(),
            count.to_string().cyan().bold()
        );
    } else {
        eprintln!(
            "✓ Generated {} with {} constant(s)",
            path.display(),
            count
        );
    }
}

/// Format the staleness check result for an up-to-date file
pub fn up_to_date(path: &Path) {
    if use_colors() {
        eprintln!("{} {} is up to date", "✓".green(), path.display().cyan());
    } else {
        eprintln!("✓ {} is up to date", path.display());
    }
}

/// Format a dispatched pipeline message
pub fn dispatched(keyword: &str, workflow: &str) {
    if use_colors() {
        eprintln!(
            "Dispatched {} to workflow {}",
            keyword.cyan().bold(),
            workflow.green()
        );
    } else {
        eprintln!("Dispatched {} to workflow {}", keyword, workflow);
    }
}

// =============================================================================
// Diagnostic Formatting
// =============================================================================

use crate::diagnostic::{Diagnostic, DiagnosticLevel};

/// Format a diagnostic message
pub fn diagnostic(diag: &Diagnostic) {
    if use_colors() {
        let level_str = match diag.level {
            DiagnosticLevel::Error => "error".red().bold().to_string(),
            DiagnosticLevel::Warning => "warning".yellow().bold().to_string(),
        };
        eprintln!(
            "{}[{}]: {} ({})",
            level_str,
            diag.code.code().bright_black(),
            diag.message,
            diag.file.cyan()
        );
    } else {
        eprintln!("{diag}");
    }
}
