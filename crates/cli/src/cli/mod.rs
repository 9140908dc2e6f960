//! CLI command definitions.

pub mod schedule;

use clap::{Parser, Subcommand, ValueEnum};

/// Generate course session schedules from templates.
#[derive(Debug, Parser)]
#[command(name = "tliconnect")]
#[command(version, about = "Generate course session schedules from templates", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "TLICONNECT_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate every session of a template.
    Generate(schedule::TemplateArgs),
    /// Print the date of the last session.
    EndDate(schedule::TemplateArgs),
    /// Print session count and first/last dates.
    Summary(schedule::TemplateArgs),
}

impl Commands {
    /// Template arguments shared by every command.
    pub fn template_args(&self) -> &schedule::TemplateArgs {
        match self {
            Commands::Generate(args) | Commands::EndDate(args) | Commands::Summary(args) => args,
        }
    }
}
