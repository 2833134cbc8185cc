//! Generator error types.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a generate, check or list run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Source directory not found or unreadable")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read document: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Document is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    #[error("'{identifier}' is not a valid Swift identifier")]
    InvalidIdentifier { identifier: String, path: PathBuf },

    #[error("Identifier '{identifier}' is also derived from {}", .first.display())]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Document contains {found} and cannot be embedded in a plain string literal")]
    DelimiterConflict { path: PathBuf, found: &'static str },

    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to write generated module: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read generated module: {source}")]
    OutputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::SourceNotFound { .. } => DiagnosticCode::E0101SourceNotFound,
            Self::Io { .. } => DiagnosticCode::E0102DocumentUnreadable,
            Self::Encoding { .. } => DiagnosticCode::E0103DocumentNotUtf8,
            Self::InvalidIdentifier { .. } => DiagnosticCode::E0201InvalidIdentifier,
            Self::DuplicateIdentifier { .. } => DiagnosticCode::E0202DuplicateIdentifier,
            Self::DelimiterConflict { .. } => DiagnosticCode::E0301DelimiterConflict,
            Self::InvalidPattern { .. } => DiagnosticCode::E0501ConfigInvalid,
            Self::OutputWrite { .. } => DiagnosticCode::E0401OutputWriteFailed,
            Self::OutputRead { .. } => DiagnosticCode::E0403OutputUnreadable,
        }
    }

    fn file(&self) -> String {
        match self {
            Self::SourceNotFound { path }
            | Self::Io { path, .. }
            | Self::Encoding { path }
            | Self::InvalidIdentifier { path, .. }
            | Self::DelimiterConflict { path, .. }
            | Self::OutputWrite { path, .. }
            | Self::OutputRead { path, .. } => path.display().to_string(),
            Self::DuplicateIdentifier { second, .. } => second.display().to_string(),
            Self::InvalidPattern { .. } => crate::config::CONFIG_FILE_NAME.to_string(),
        }
    }
}

impl From<GenerateError> for Diagnostic {
    fn from(err: GenerateError) -> Self {
        Diagnostic::new(err.code(), err.to_string(), err.file())
    }
}
