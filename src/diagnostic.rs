//! Diagnostic codes and error reporting.

use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// Diagnostic error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    // Source errors (E01xx)
    E0101SourceNotFound,
    E0102DocumentUnreadable,
    E0103DocumentNotUtf8,

    // Identifier errors (E02xx)
    E0201InvalidIdentifier,
    E0202DuplicateIdentifier,

    // Embedding errors (E03xx)
    E0301DelimiterConflict,

    // Output errors (E04xx)
    E0401OutputWriteFailed,
    E0402OutputStale,
    E0403OutputUnreadable,

    // Config errors (E05xx)
    E0501ConfigInvalid,

    // Warnings (W01xx)
    W0101NoDocuments,
    W0102DuplicateIdentifierAllowed,
}

impl DiagnosticCode {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::W0101NoDocuments | Self::W0102DuplicateIdentifierAllowed => {
                DiagnosticLevel::Warning
            }
            _ => DiagnosticLevel::Error,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            // E01xx - Source
            Self::E0101SourceNotFound => "E0101",
            Self::E0102DocumentUnreadable => "E0102",
            Self::E0103DocumentNotUtf8 => "E0103",
            // E02xx - Identifier
            Self::E0201InvalidIdentifier => "E0201",
            Self::E0202DuplicateIdentifier => "E0202",
            // E03xx - Embedding
            Self::E0301DelimiterConflict => "E0301",
            // E04xx - Output
            Self::E0401OutputWriteFailed => "E0401",
            Self::E0402OutputStale => "E0402",
            Self::E0403OutputUnreadable => "E0403",
            // E05xx - Config
            Self::E0501ConfigInvalid => "E0501",
            // W01xx - Warnings
            Self::W0101NoDocuments => "W0101",
            Self::W0102DuplicateIdentifierAllowed => "W0102",
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub file: String,
    pub level: DiagnosticLevel,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            level: code.level(),
            code,
            message: message.into(),
            file: file.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self.level {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
        };
        write!(
            f,
            "{}[{}]: {} ({})",
            level_str,
            self.code.code(),
            self.message,
            self.file
        )
    }
}

impl std::error::Error for Diagnostic {}
