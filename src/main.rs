//! gqlembed: embed GraphQL documents as Swift string constants.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod cmd;
mod config;
mod diagnostic;
mod error;
mod generate;
mod model;
mod naming;
mod render;
mod scan;
mod trigger;
mod ui;

use config::Config;
use diagnostic::{Diagnostic, DiagnosticLevel};

#[derive(Parser)]
#[command(name = "gqlembed")]
#[command(about = "Embed GraphQL documents as Swift string constants")]
#[command(version)]
struct Cli {
    /// Path to gqlembed config (TOML)
    #[arg(short = 'C', long, global = true)]
    config: Option<PathBuf>,

    // `None` runs generate
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the constants module
    #[command(visible_alias = "gen")]
    Generate {
        /// Print the module to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Fail if the generated module is out of date
    Check,

    /// List discovered documents and their identifiers
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Write a default gqlembed.toml in the current directory
    Init {
        /// Overwrite existing config
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Dispatch a CI comment to its registered pipeline
    Trigger {
        /// Comment text (e.g. "testflight")
        comment: String,
        /// URL the pipeline posts its result back to
        #[arg(long)]
        response_url: String,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(&cli);

    match result {
        Ok(diags) => {
            for diag in &diags {
                ui::diagnostic(diag);
            }

            if diags.iter().any(|d| d.level == DiagnosticLevel::Error) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Vec<Diagnostic>> {
    // These never read the project config
    match &cli.command {
        Some(Commands::Init { force }) => return cmd::init::init_project(*force),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "gqlembed", &mut std::io::stdout());
            return Ok(vec![]);
        }
        _ => {}
    }

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        None => cmd::generate::generate(&config, false),
        Some(Commands::Generate { dry_run }) => cmd::generate::generate(&config, *dry_run),
        Some(Commands::Check) => cmd::check::check(&config),
        Some(Commands::List { output }) => cmd::list::list(&config, *output),
        Some(Commands::Trigger {
            comment,
            response_url,
        }) => cmd::trigger::trigger(&config, comment, response_url),
        Some(Commands::Init { .. } | Commands::Completions { .. }) => Ok(vec![]),
    }
}
