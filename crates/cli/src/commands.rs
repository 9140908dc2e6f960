//! Command execution.
//!
//! Commands return their rendered output instead of printing it, so `main`
//! owns stdout/stderr.

use tliconnect_core::schedule::{summarize, ScheduleTemplate};

use crate::cli::{Commands, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::{pretty, render};
use crate::template::{build_template, load_request};

/// Rendered result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Primary output for stdout.
    pub text: String,
    /// Non-essential message for stderr, suppressed by `--quiet`.
    pub notice: Option<String>,
}

impl CommandOutput {
    fn text(text: String) -> Self {
        Self { text, notice: None }
    }

    /// The notice to show on stderr, if any and not silenced by `quiet`.
    pub fn visible_notice(&self, quiet: bool) -> Option<&str> {
        if quiet {
            return None;
        }
        self.notice.as_deref()
    }
}

/// Load the command's template and run it.
pub fn execute(command: &Commands, format: OutputFormat, config: &Config) -> Result<CommandOutput> {
    let args = command.template_args();
    let request = load_request(&args.template)?;
    let template = build_template(request, args, config)?;
    run(command, &template, format)
}

/// Run a command against an already validated template.
pub fn run(
    command: &Commands,
    template: &ScheduleTemplate,
    format: OutputFormat,
) -> Result<CommandOutput> {
    match command {
        Commands::Generate(_) => {
            let sessions = template.generate()?;
            tracing::info!(sessions = sessions.len(), "Generated schedule");

            let text = render(sessions.as_slice(), format, pretty::format_sessions)?;
            let requested = template.total_sessions() as usize;
            let notice = (sessions.len() < requested).then(|| {
                format!(
                    "Only {} of {} sessions could be scheduled",
                    sessions.len(),
                    requested
                )
            });
            Ok(CommandOutput { text, notice })
        }
        Commands::EndDate(_) => {
            let end_date = template.end_date();
            let text = render(&end_date, format, |date| pretty::format_end_date(*date))?;
            Ok(CommandOutput::text(text))
        }
        Commands::Summary(_) => {
            let summary = summarize(&template.generate()?);
            let text = render(&summary, format, pretty::format_summary)?;
            Ok(CommandOutput::text(text))
        }
    }
}
