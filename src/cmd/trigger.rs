//! Trigger command implementation.

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::trigger::{JsonRunner, TriggerContext, TriggerRegistry, dispatch};
use crate::ui;

/// Dispatch a CI comment to its registered pipeline
pub fn trigger(
    config: &Config,
    comment: &str,
    response_url: &str,
) -> anyhow::Result<Vec<Diagnostic>> {
    let registry = TriggerRegistry::from_config(&config.trigger);
    let ctx = TriggerContext {
        response_url: response_url.to_string(),
    };

    match dispatch(&registry, comment, &ctx, &JsonRunner)? {
        Some(invocation) => ui::dispatched(comment.trim(), &invocation.workflow),
        None => ui::info(format!(
            "No trigger registered for '{}' (known: {})",
            comment.trim(),
            registry.keywords().join(", ")
        )),
    }

    Ok(vec![])
}
