//! tliconnect CLI entry point.

use anyhow::Result;
use clap::Parser;
use tliconnect_cli::cli::Cli;
use tliconnect_cli::commands::execute;
use tliconnect_cli::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?config, "Loaded configuration");

    let output = execute(&cli.command, cli.format, &config)?;
    println!("{}", output.text);
    if let Some(notice) = output.visible_notice(cli.quiet) {
        eprintln!("{}", notice);
    }

    Ok(())
}
