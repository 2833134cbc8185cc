//! Init command implementation.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::diagnostic::Diagnostic;
use crate::ui;
use anyhow::Context;
use std::path::Path;

/// Write a default `gqlembed.toml` into the current directory
pub fn init_project(force: bool) -> anyhow::Result<Vec<Diagnostic>> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use -f to overwrite)",
            config_path.display()
        );
    }

    std::fs::write(config_path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    ui::created("config", config_path);
    ui::success("Project initialized");
    Ok(vec![])
}
