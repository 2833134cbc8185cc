//! Document aggregation into a single generated Swift module.
//!
//! The module is assembled completely in memory and written with one call, so
//! any failure before the write leaves an existing output file untouched.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::error::GenerateError;
use crate::model::{
    ConstantEntry, ContainerKind, DelimiterPolicy, Document, DocumentOrder, DuplicatePolicy,
    GeneratedModule,
};
use crate::naming::{is_valid_identifier, lower_first};
use crate::render::{render_module, string_literal};
use crate::scan::discover_documents;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Inputs of a generator run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub source_dir: PathBuf,
    pub output: PathBuf,
    /// Exact, case-sensitive file name suffix
    pub extension: String,
    pub container: ContainerKind,
    pub container_name: String,
    pub order: DocumentOrder,
    pub on_duplicate: DuplicatePolicy,
    pub on_delimiter: DelimiterPolicy,
    pub exclude: Vec<String>,
}

impl GeneratorOptions {
    /// Options for the given paths with every policy at its default
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output: output.into(),
            extension: extension.into(),
            container: ContainerKind::default(),
            container_name: "GraphQLConstants".to_string(),
            order: DocumentOrder::default(),
            on_duplicate: DuplicatePolicy::default(),
            on_delimiter: DelimiterPolicy::default(),
            exclude: vec![],
        }
    }
}

/// A fully rendered module that has not been written yet
#[derive(Debug)]
pub struct Assembly {
    pub module: GeneratedModule,
    pub text: String,
    pub documents: Vec<Document>,
    pub warnings: Vec<Diagnostic>,
}

/// Outcome of a successful generate run
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub documents: Vec<PathBuf>,
    pub warnings: Vec<Diagnostic>,
}

/// State of the output file relative to the current documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Discover documents and render the module without touching the output
pub fn assemble(options: &GeneratorOptions) -> Result<Assembly, GenerateError> {
    let documents = discover_documents(options)?;
    let (module, mut warnings) = build_module(options, &documents)?;

    if documents.is_empty() {
        warnings.push(Diagnostic::new(
            DiagnosticCode::W0101NoDocuments,
            format!("No '{}' documents found", options.extension),
            options.source_dir.display().to_string(),
        ));
    }

    let text = render_module(&module);
    Ok(Assembly {
        module,
        text,
        documents,
        warnings,
    })
}

/// Derive one constant per document, applying identifier and delimiter rules
pub fn build_module(
    options: &GeneratorOptions,
    documents: &[Document],
) -> Result<(GeneratedModule, Vec<Diagnostic>), GenerateError> {
    let mut module = GeneratedModule::new(options.container, options.container_name.clone());
    let mut warnings = vec![];
    let mut seen: HashMap<String, &Path> = HashMap::new();

    for doc in documents {
        let identifier = lower_first(&doc.base_name);
        if !is_valid_identifier(&identifier) {
            return Err(GenerateError::InvalidIdentifier {
                identifier,
                path: doc.path.clone(),
            });
        }

        if let Some(first) = seen.get(&identifier) {
            match options.on_duplicate {
                DuplicatePolicy::Error => {
                    return Err(GenerateError::DuplicateIdentifier {
                        identifier,
                        first: first.to_path_buf(),
                        second: doc.relative_path.clone(),
                    });
                }
                DuplicatePolicy::Allow => warnings.push(Diagnostic::new(
                    DiagnosticCode::W0102DuplicateIdentifierAllowed,
                    format!(
                        "Identifier '{}' is also derived from {}",
                        identifier,
                        first.display()
                    ),
                    doc.relative_path.display().to_string(),
                )),
            }
        } else {
            seen.insert(identifier.clone(), doc.relative_path.as_path());
        }

        let value = string_literal(&doc.content, options.on_delimiter, &doc.path)?;
        module.entries.push(ConstantEntry {
            identifier,
            value,
            source: doc.relative_path.clone(),
        });
    }

    Ok((module, warnings))
}

/// Replace the output file with `text`; parent directories are not created
pub fn write_output(path: &Path, text: &str) -> Result<(), GenerateError> {
    std::fs::write(path, text).map_err(|e| GenerateError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Assemble and write the module
pub fn generate(options: &GeneratorOptions) -> Result<GenerateReport, GenerateError> {
    let assembly = assemble(options)?;
    write_output(&options.output, &assembly.text)?;
    Ok(assembly.into_report(&options.output))
}

/// Compare an assembled module with the file currently on disk.
///
/// Only a missing file is `Missing`; any other read failure is an error.
pub fn freshness(assembly: &Assembly, output: &Path) -> Result<Freshness, GenerateError> {
    match std::fs::read(output) {
        Ok(existing) if existing == assembly.text.as_bytes() => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(e) => Err(GenerateError::OutputRead {
            path: output.to_path_buf(),
            source: e,
        }),
    }
}

impl Assembly {
    pub fn into_report(self, output: &Path) -> GenerateReport {
        GenerateReport {
            output: output.to_path_buf(),
            documents: self
                .documents
                .into_iter()
                .map(|d| d.relative_path)
                .collect(),
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> io::Result<Self> {
            let dir = TempDir::new()?;
            fs::create_dir_all(dir.path().join("graphql"))?;
            Ok(Self { dir })
        }

        fn doc(&self, rel: &str, content: &str) -> io::Result<()> {
            let path = self.dir.path().join("graphql").join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        }

        fn options(&self) -> GeneratorOptions {
            GeneratorOptions::new(
                self.dir.path().join("graphql"),
                self.dir.path().join("GraphQLConstants.swift"),
                ".graphql",
            )
        }

        fn output(&self) -> io::Result<String> {
            fs::read_to_string(self.dir.path().join("GraphQLConstants.swift"))
        }
    }

    #[test]
    fn test_content_round_trips_verbatim() -> TestResult {
        let fixture = Fixture::new()?;
        let content = "query TaskDetails($lang: String!) {\n\tviewer(lang: $lang) {\n\t\t__typename\n\t}\n}\n\n";
        fixture.doc("TaskDetails.graphql", content)?;

        let report = generate(&fixture.options())?;
        assert_eq!(report.documents, vec![PathBuf::from("TaskDetails.graphql")]);

        let output = fixture.output()?;
        let expected = format!("    static let taskDetails = \"\"\"\n{content}\n\"\"\"\n");
        assert!(output.contains(&expected), "output was:\n{output}");
        Ok(())
    }

    #[test]
    fn test_non_matching_files_never_referenced() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        fixture.doc("Secret.json", "{\"query\": \"leaked\"}")?;

        let _ = generate(&fixture.options())?;
        let output = fixture.output()?;
        assert!(!output.contains("secret"));
        assert!(!output.contains("leaked"));
        Ok(())
    }

    #[test]
    fn test_empty_directory_produces_empty_container() -> TestResult {
        let fixture = Fixture::new()?;
        let report = generate(&fixture.options())?;

        assert_eq!(
            fixture.output()?,
            "//\n//  Generated code do not edit\n//\n\nenum GraphQLConstants {\n}"
        );
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, DiagnosticCode::W0101NoDocuments);
        Ok(())
    }

    #[test]
    fn test_running_twice_is_idempotent() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("b/Orders.graphql", "query Orders { id }\n")?;
        fixture.doc("a/Partners.graphql", "query Partners { id }\n")?;
        fixture.doc("Create.graphql", "mutation Create { id }\n")?;

        let _ = generate(&fixture.options())?;
        let first = fixture.output()?;
        let _ = generate(&fixture.options())?;
        assert_eq!(first, fixture.output()?);
        Ok(())
    }

    #[test]
    fn test_overwrites_unrelated_content() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        fs::write(
            fixture.dir.path().join("GraphQLConstants.swift"),
            "hand written junk that is much longer than the generated module ".repeat(20),
        )?;

        let _ = generate(&fixture.options())?;
        let output = fixture.output()?;
        assert!(output.starts_with("//\n//  Generated code do not edit\n//\n"));
        assert!(!output.contains("junk"));
        Ok(())
    }

    #[test]
    fn test_missing_root_leaves_existing_output_untouched() -> TestResult {
        let fixture = Fixture::new()?;
        let output_path = fixture.dir.path().join("GraphQLConstants.swift");
        fs::write(&output_path, "previous")?;

        let mut options = fixture.options();
        options.source_dir = fixture.dir.path().join("missing");
        let result = generate(&options);

        assert!(matches!(result, Err(GenerateError::SourceNotFound { .. })));
        assert_eq!(fs::read_to_string(&output_path)?, "previous");
        Ok(())
    }

    #[test]
    fn test_missing_root_creates_no_output() -> TestResult {
        let fixture = Fixture::new()?;
        let mut options = fixture.options();
        options.source_dir = fixture.dir.path().join("missing");

        assert!(generate(&options).is_err());
        assert!(!options.output.exists());
        Ok(())
    }

    #[test]
    fn test_missing_output_parent_is_write_error() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        let mut options = fixture.options();
        options.output = fixture.dir.path().join("Generated/GraphQLConstants.swift");

        let result = generate(&options);
        assert!(matches!(result, Err(GenerateError::OutputWrite { .. })));
        Ok(())
    }

    #[test]
    fn test_unreadable_document_aborts_before_write() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        fs::write(
            fixture.dir.path().join("graphql/Broken.graphql"),
            [0xc3u8, 0x28],
        )?;

        let result = generate(&fixture.options());
        assert!(matches!(result, Err(GenerateError::Encoding { .. })));
        assert!(fixture.output().is_err());
        Ok(())
    }

    // Colliding identifiers are rejected by default; `on_duplicate = "allow"`
    // reproduces the unhardened behavior of emitting both declarations.
    #[test]
    fn test_duplicate_identifier_is_error_by_default() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Orders.graphql", "query Orders { id }")?;
        fixture.doc("legacy/orders.graphql", "query OldOrders { id }")?;

        let result = generate(&fixture.options());
        assert!(matches!(
            result,
            Err(GenerateError::DuplicateIdentifier { ref identifier, .. }) if identifier == "orders"
        ));
        assert!(fixture.output().is_err());
        Ok(())
    }

    #[test]
    fn test_duplicate_identifier_allowed_emits_both() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Orders.graphql", "query Orders { id }")?;
        fixture.doc("legacy/orders.graphql", "query OldOrders { id }")?;

        let mut options = fixture.options();
        options.on_duplicate = DuplicatePolicy::Allow;
        let report = generate(&options)?;

        let output = fixture.output()?;
        assert_eq!(output.matches("static let orders = ").count(), 2);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].code,
            DiagnosticCode::W0102DuplicateIdentifierAllowed
        );
        Ok(())
    }

    #[test]
    fn test_invalid_identifier_is_error() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("2FA.graphql", "mutation Verify { ok }")?;

        let result = generate(&fixture.options());
        assert!(matches!(
            result,
            Err(GenerateError::InvalidIdentifier { ref identifier, .. }) if identifier == "2FA"
        ));
        Ok(())
    }

    #[test]
    fn test_reserved_word_identifier_is_error() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Class.graphql", "query Class { id }")?;
        fixture.doc("Default.graphql", "query Default { id }")?;

        let result = generate(&fixture.options());
        assert!(matches!(
            result,
            Err(GenerateError::InvalidIdentifier { ref identifier, .. }) if identifier == "class"
        ));
        assert!(!fixture.dir.path().join("GraphQLConstants.swift").exists());
        Ok(())
    }

    #[test]
    fn test_delimiter_in_content_is_escaped_by_default() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Described.graphql", "\"\"\"Docs\"\"\"\nquery D { id }")?;

        let _ = generate(&fixture.options())?;
        let output = fixture.output()?;
        assert!(output.contains(
            "    static let described = #\"\"\"\n\"\"\"Docs\"\"\"\nquery D { id }\n\"\"\"#\n"
        ));
        Ok(())
    }

    #[test]
    fn test_delimiter_rejected_when_configured() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Described.graphql", "\"\"\"Docs\"\"\"\nquery D { id }")?;

        let mut options = fixture.options();
        options.on_delimiter = DelimiterPolicy::Reject;
        let result = generate(&options);
        assert!(matches!(
            result,
            Err(GenerateError::DelimiterConflict { .. })
        ));
        Ok(())
    }

    // Walk order is whatever the filesystem yields, so only membership is
    // asserted. The sorted default is what keeps generated output stable.
    #[test]
    fn test_walk_order_contains_every_document() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        fixture.doc("Cities.graphql", "query Cities { id }")?;

        let mut options = fixture.options();
        options.order = DocumentOrder::Walk;
        let report = generate(&options)?;

        let mut docs = report.documents;
        docs.sort();
        assert_eq!(
            docs,
            vec![PathBuf::from("Cities.graphql"), PathBuf::from("Hotels.graphql")]
        );
        Ok(())
    }

    #[test]
    fn test_freshness() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        let options = fixture.options();

        let assembly = assemble(&options)?;
        assert_eq!(freshness(&assembly, &options.output)?, Freshness::Missing);

        write_output(&options.output, &assembly.text)?;
        assert_eq!(freshness(&assembly, &options.output)?, Freshness::UpToDate);

        fixture.doc("Hotels.graphql", "query Hotels { id name }")?;
        let assembly = assemble(&options)?;
        assert_eq!(freshness(&assembly, &options.output)?, Freshness::Stale);
        Ok(())
    }

    #[test]
    fn test_freshness_unreadable_output_is_error() -> TestResult {
        let fixture = Fixture::new()?;
        fixture.doc("Hotels.graphql", "query Hotels { id }")?;
        let options = fixture.options();
        // A directory where the module should be cannot be read as a file
        fs::create_dir_all(&options.output)?;

        let assembly = assemble(&options)?;
        let result = freshness(&assembly, &options.output);
        assert!(matches!(result, Err(GenerateError::OutputRead { .. })));
        Ok(())
    }
}
