//! Schedule template arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tliconnect_core::schedule::parse_local_date;

/// Where to load a template from and how to override it.
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Path to a JSON schedule template, or `-` for stdin.
    #[arg(long, short)]
    pub template: PathBuf,
    /// Extra date to skip (YYYY-MM-DD). Repeatable.
    #[arg(long, value_parser = parse_date_arg)]
    pub exclude: Vec<NaiveDate>,
    /// Override the template's session count.
    #[arg(long, allow_negative_numbers = true)]
    pub sessions: Option<i64>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_local_date(s).map_err(|e| e.to_string())
}
