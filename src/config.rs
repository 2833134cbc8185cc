//! Configuration loading and management.
//!
//! Relative paths in `gqlembed.toml` resolve against the directory holding the
//! config file, so the generator behaves the same from any working directory.

use crate::generate::GeneratorOptions;
use crate::model::{ContainerKind, DelimiterPolicy, DocumentOrder, DuplicatePolicy};
use crate::naming::is_valid_identifier;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name searched for from the current directory upwards
pub const CONFIG_FILE_NAME: &str = "gqlembed.toml";

/// Project configuration (gqlembed.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
    /// Directory relative paths are resolved against (empty = current directory)
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory scanned recursively for documents
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Generated Swift file, overwritten on every run
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Case-sensitive file name suffix of documents
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Name of the enclosing Swift type
    #[serde(default = "default_container_name")]
    pub container_name: String,
    #[serde(default)]
    pub container: ContainerKind,
    #[serde(default)]
    pub order: DocumentOrder,
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
    #[serde(default)]
    pub on_delimiter: DelimiterPolicy,
    /// Glob patterns (relative to source_dir) for documents to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("Prime/Sources")
}

fn default_output() -> PathBuf {
    PathBuf::from("Prime/Sources/Generated/GraphQLConstants.swift")
}

fn default_extension() -> String {
    ".graphql".to_string()
}

fn default_container_name() -> String {
    "GraphQLConstants".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output: default_output(),
            extension: default_extension(),
            container_name: default_container_name(),
            container: ContainerKind::default(),
            order: DocumentOrder::default(),
            on_duplicate: DuplicatePolicy::default(),
            on_delimiter: DelimiterPolicy::default(),
            exclude: vec![],
        }
    }
}

/// CI comment trigger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_trigger_commands")]
    pub commands: Vec<TriggerCommand>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            commands: default_trigger_commands(),
        }
    }
}

/// One comment keyword bound to one remote pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerCommand {
    pub keyword: String,
    pub workflow: String,
    /// Environment variable that carries the comment callback URL
    #[serde(default = "default_response_url_var")]
    pub response_url_var: String,
}

fn default_trigger_commands() -> Vec<TriggerCommand> {
    vec![TriggerCommand {
        keyword: "testflight".to_string(),
        workflow: "testflight".to_string(),
        response_url_var: default_response_url_var(),
    }]
}

fn default_response_url_var() -> String {
    "RESPONSE_URL".to_string()
}

impl Config {
    /// Load config from file or use defaults
    ///
    /// An explicitly given path must exist; otherwise the nearest
    /// `gqlembed.toml` above the current directory is used, falling back to
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config(),
        };

        let Some(config_path) = config_path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_toml(&content, root)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }

    /// Parse and validate config text, resolving paths against `root`
    pub fn from_toml(content: &str, root: PathBuf) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.root = root;
        config.validate()?;
        Ok(config)
    }

    /// Find config file by walking up directory tree
    fn find_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        if generator.extension.is_empty() {
            anyhow::bail!("generator.extension must not be empty");
        }
        if !is_valid_identifier(&generator.container_name) {
            anyhow::bail!(
                "generator.container_name '{}' is not a valid Swift identifier",
                generator.container_name
            );
        }
        for command in &self.trigger.commands {
            if command.keyword.trim().is_empty() {
                anyhow::bail!("trigger.commands keyword must not be empty");
            }
            if command.workflow.is_empty() {
                anyhow::bail!(
                    "trigger command '{}' has an empty workflow",
                    command.keyword
                );
            }
        }
        Ok(())
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.generator.source_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.generator.output)
    }

    /// Generator options with paths resolved against the config root
    pub fn generator_options(&self) -> GeneratorOptions {
        let generator = &self.generator;
        GeneratorOptions {
            source_dir: self.source_dir(),
            output: self.output_path(),
            extension: generator.extension.clone(),
            container: generator.container,
            container_name: generator.container_name.clone(),
            order: generator.order,
            on_duplicate: generator.on_duplicate,
            on_delimiter: generator.on_delimiter,
            exclude: generator.exclude.clone(),
        }
    }

    /// Generate default config TOML
    pub fn default_toml() -> &'static str {
        r##"[generator]
# Directory scanned recursively for GraphQL documents
source_dir = "Prime/Sources"
# Generated Swift file (overwritten on every run, parent must exist)
output = "Prime/Sources/Generated/GraphQLConstants.swift"
extension = ".graphql"
container_name = "GraphQLConstants"
# enum | struct | extension
container = "enum"
# sorted: by file name per directory; walk: filesystem order
order = "sorted"
# error: fail on identifier collisions; allow: emit both and warn
on_duplicate = "error"
# raw: use #"""..."""# for content with """ or \; reject: fail instead
on_delimiter = "raw"
# exclude = ["**/Mocks/**"]

[[trigger.commands]]
keyword = "testflight"
workflow = "testflight"
response_url_var = "RESPONSE_URL"
"##
    }
}
