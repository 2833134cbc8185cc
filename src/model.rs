//! Data models for discovered documents and the generated module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::AsRefStr;

// =============================================================================
// Generator Policies
// =============================================================================

/// Swift declaration that encloses the generated constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Enum,
    Struct,
    Extension,
}

/// Order in which discovered documents are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentOrder {
    /// Sorted by file name within each directory, depth-first (default)
    #[default]
    Sorted,
    /// Whatever order the filesystem listing yields
    Walk,
}

/// What to do when two documents derive the same identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Error,
    /// Emit every declaration and report a warning
    Allow,
}

/// How to embed content that would break a plain `"""` literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DelimiterPolicy {
    /// Fall back to a `#"""..."""#` raw string literal (default)
    #[default]
    Raw,
    /// Fail the run
    Reject,
}

// =============================================================================
// Documents
// =============================================================================

/// A query document discovered under the source directory
#[derive(Debug, Clone)]
pub struct Document {
    /// Path as walked (source directory joined with relative path)
    pub path: PathBuf,
    pub relative_path: PathBuf,
    /// File name before the first `.`
    pub base_name: String,
    pub content: String,
}

/// One `static let` declaration in the generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    pub identifier: String,
    pub value: String,
    pub source: PathBuf,
}

/// The single generated Swift source file
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub container: ContainerKind,
    pub name: String,
    pub entries: Vec<ConstantEntry>,
}

impl GeneratedModule {
    pub fn new(container: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            container,
            name: name.into(),
            entries: vec![],
        }
    }
}
