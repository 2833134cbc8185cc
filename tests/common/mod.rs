//! Common test helpers for CLI tests.

#![allow(dead_code)] // Functions used across different test binaries

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Config used by most tests: documents under `graphql/`, output under `Generated/`
pub const PROJECT_CONFIG: &str = r#"[generator]
source_dir = "graphql"
output = "Generated/GraphQLConstants.swift"
"#;

/// Normalize output for stable snapshots by replacing the temp directory path
pub fn normalize_output(output: &str, dir: &Path) -> String {
    output.replace(&dir.display().to_string(), "<TEMPDIR>")
}

/// Run gqlembed commands in a directory and capture output.
pub fn run_commands(dir: &Path, commands: &[&[&str]]) -> String {
    let mut output = String::new();

    for args in commands {
        output.push_str(&format!("$ gqlembed {}\n", args.join(" ")));

        let result = Command::new(env!("CARGO_BIN_EXE_gqlembed"))
            .args(*args)
            .current_dir(dir)
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run gqlembed");

        let stdout = String::from_utf8_lossy(&result.stdout);
        let stderr = String::from_utf8_lossy(&result.stderr);

        if !stdout.is_empty() {
            output.push_str(&stdout);
            if !stdout.ends_with('\n') {
                output.push('\n');
            }
        }
        if !stderr.is_empty() {
            output.push_str(&stderr);
            if !stderr.ends_with('\n') {
                output.push('\n');
            }
        }

        output.push_str(&format!("exit: {}\n\n", result.status.code().unwrap_or(-1)));
    }

    output
}

/// Run a single command and return (stdout, stderr, exit code)
pub fn run(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let result = Command::new(env!("CARGO_BIN_EXE_gqlembed"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run gqlembed");

    (
        String::from_utf8_lossy(&result.stdout).to_string(),
        String::from_utf8_lossy(&result.stderr).to_string(),
        result.status.code().unwrap_or(-1),
    )
}

/// Create a project with [`PROJECT_CONFIG`] and empty `graphql/` and `Generated/` dirs
pub fn init_project() -> TempDir {
    init_project_with(PROJECT_CONFIG)
}

/// Create a project with a custom config
pub fn init_project_with(config: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    fs::write(temp_dir.path().join("gqlembed.toml"), config).expect("failed to write config");
    fs::create_dir_all(temp_dir.path().join("graphql")).expect("failed to create graphql/");
    fs::create_dir_all(temp_dir.path().join("Generated")).expect("failed to create Generated/");
    temp_dir
}

/// Write a document under `graphql/`, creating parent directories
pub fn write_doc(dir: &Path, rel: &str, content: &str) {
    let path = dir.join("graphql").join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create document dir");
    }
    fs::write(path, content).expect("failed to write document");
}

/// Read the generated module
pub fn read_output(dir: &Path) -> String {
    fs::read_to_string(dir.join("Generated/GraphQLConstants.swift"))
        .expect("failed to read generated module")
}
