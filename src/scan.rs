//! Document discovery.
//!
//! Walks the source directory and collects every file whose name ends with the
//! configured extension. Unlike a lint-style scan, unreadable entries abort the
//! run: a generated module missing a document is worse than no module.

use crate::error::GenerateError;
use crate::generate::GeneratorOptions;
use crate::model::{Document, DocumentOrder};
use crate::naming;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::io;
use walkdir::WalkDir;

/// Discover all documents under `options.source_dir`, in emission order
pub fn discover_documents(options: &GeneratorOptions) -> Result<Vec<Document>, GenerateError> {
    let root = options.source_dir.as_path();
    if !root.is_dir() || fs::read_dir(root).is_err() {
        return Err(GenerateError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let exclude_set = build_exclude_set(&options.exclude)?;

    let mut walker = WalkDir::new(root).follow_links(false);
    if options.order == DocumentOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| GenerateError::Io {
            path: e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| root.to_path_buf()),
            source: io::Error::from(e),
        })?;

        // Symlinked files count as documents; directory links are not followed
        if !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !file_name.ends_with(options.extension.as_str()) {
            continue;
        }

        let path = entry.path();
        let relative_path = path.strip_prefix(root).unwrap_or(path);
        if exclude_set.is_match(relative_path) {
            continue;
        }

        let bytes = fs::read(path).map_err(|e| GenerateError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| GenerateError::Encoding {
            path: path.to_path_buf(),
        })?;

        documents.push(Document {
            path: path.to_path_buf(),
            relative_path: relative_path.to_path_buf(),
            base_name: naming::base_name(&file_name).to_string(),
            content,
        });
    }

    Ok(documents)
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, GenerateError> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).map_err(|e| GenerateError::InvalidPattern {
            pattern: pat.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| GenerateError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}
