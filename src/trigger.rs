//! CI comment triggers.
//!
//! A comment keyword maps to one handler, and each handler yields exactly one
//! pipeline invocation. Performing the remote call is left to a
//! [`PipelineRunner`].

use crate::config::TriggerConfig;
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Data available to a handler about the triggering comment
#[derive(Debug, Clone)]
pub struct TriggerContext {
    /// Where the pipeline posts its result back to the comment thread
    pub response_url: String,
}

/// A request to start one remote build pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineInvocation {
    pub workflow: String,
    pub environment: BTreeMap<String, String>,
}

pub type Handler = Box<dyn Fn(&TriggerContext) -> PipelineInvocation>;

/// Keyword to handler registrations
#[derive(Default)]
pub struct TriggerRegistry {
    handlers: HashMap<String, Handler>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `keyword` (case-insensitive), replacing any
    /// previous registration
    pub fn register(&mut self, keyword: &str, handler: Handler) {
        self.handlers.insert(keyword.trim().to_lowercase(), handler);
    }

    /// One handler per configured command, forwarding the workflow and the
    /// response URL variable
    pub fn from_config(config: &TriggerConfig) -> Self {
        let mut registry = Self::new();
        for command in &config.commands {
            let workflow = command.workflow.clone();
            let var = command.response_url_var.clone();
            registry.register(
                &command.keyword,
                Box::new(move |ctx: &TriggerContext| PipelineInvocation {
                    workflow: workflow.clone(),
                    environment: BTreeMap::from([(var.clone(), ctx.response_url.clone())]),
                }),
            );
        }
        registry
    }

    /// Registered keywords, sorted
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Invocation for `comment`, or `None` when no keyword matches
    pub fn resolve(&self, comment: &str, ctx: &TriggerContext) -> Option<PipelineInvocation> {
        let key = comment.trim().to_lowercase();
        self.handlers.get(&key).map(|handler| handler(ctx))
    }
}

/// Executes a pipeline invocation against the CI provider
pub trait PipelineRunner {
    fn run(&self, invocation: &PipelineInvocation) -> Result<()>;
}

/// Prints the invocation as JSON on stdout for the CI step that starts it
pub struct JsonRunner;

impl PipelineRunner for JsonRunner {
    fn run(&self, invocation: &PipelineInvocation) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(invocation)?);
        Ok(())
    }
}

/// Resolve `comment` and hand the invocation to `runner`.
///
/// Unrecognized comments are not an error; they dispatch nothing.
pub fn dispatch(
    registry: &TriggerRegistry,
    comment: &str,
    ctx: &TriggerContext,
    runner: &dyn PipelineRunner,
) -> Result<Option<PipelineInvocation>> {
    let Some(invocation) = registry.resolve(comment, ctx) else {
        return Ok(None);
    };
    runner.run(&invocation)?;
    Ok(Some(invocation))
}
