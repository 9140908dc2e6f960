//! Loading schedule templates and applying command-line overrides.

use std::io::Read;
use std::path::Path;

use tliconnect_core::schedule::{ScheduleRequest, ScheduleTemplate};

use crate::cli::schedule::TemplateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Parse a template request from JSON text.
pub fn parse_request(json: &str) -> Result<ScheduleRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Read a template request from a file, or stdin when the path is `-`.
pub fn load_request(path: &Path) -> Result<ScheduleRequest> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadTemplate {
            path: path.display().to_string(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), bytes = json.len(), "Loaded template");
    parse_request(&json)
}

/// Apply overrides to a request and validate it against the configured limits.
pub fn build_template(
    mut request: ScheduleRequest,
    args: &TemplateArgs,
    config: &Config,
) -> Result<ScheduleTemplate> {
    if let Some(sessions) = args.sessions {
        request.total_sessions = sessions;
    }
    request.exclude_dates.extend(args.exclude.iter().copied());

    let template = request.validate()?;
    if template.total_sessions() > config.max_sessions {
        return Err(CliError::TooManySessions {
            requested: template.total_sessions(),
            max: config.max_sessions,
        });
    }

    tracing::debug!(
        total_sessions = template.total_sessions(),
        slots = template.rule().slots.len(),
        exclusions = template.rule().exclude_dates.len(),
        "Validated template"
    );
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tliconnect_core::schedule::ScheduleError;

    const TEMPLATE: &str = r#"{
        "start_date": "2025-08-04",
        "slots": [{ "weekdays": [1, 3], "start_time": "09:00", "end_time": "10:00" }],
        "total_sessions": 4,
        "content": [
            { "sequence_number": 1, "title": "A" },
            { "sequence_number": 2, "title": "B" }
        ]
    }"#;

    fn args(exclude: Vec<NaiveDate>, sessions: Option<i64>) -> TemplateArgs {
        TemplateArgs {
            template: PathBuf::from("-"),
            exclude,
            sessions,
        }
    }

    fn config(max_sessions: u32) -> Config {
        Config {
            max_sessions,
            log_filter: "off".to_string(),
        }
    }

    #[test]
    fn test_build_template_without_overrides() {
        let request = parse_request(TEMPLATE).unwrap();
        let template = build_template(request, &args(vec![], None), &config(100)).unwrap();

        assert_eq!(template.total_sessions(), 4);
        assert!(template.rule().exclude_dates.is_empty());
    }

    #[test]
    fn test_build_template_applies_overrides() {
        let request = parse_request(TEMPLATE).unwrap();
        let exclude = vec![NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()];
        let template = build_template(request, &args(exclude, Some(6)), &config(100)).unwrap();

        assert_eq!(template.total_sessions(), 6);
        assert_eq!(
            template.end_date(),
            Some(NaiveDate::from_ymd_opt(2025, 8, 25).unwrap())
        );
    }

    #[test]
    fn test_build_template_rejects_negative_override() {
        let request = parse_request(TEMPLATE).unwrap();
        let result = build_template(request, &args(vec![], Some(-1)), &config(100));

        assert!(matches!(
            result,
            Err(CliError::Schedule(ScheduleError::NegativeSessionCount(-1)))
        ));
    }

    #[test]
    fn test_build_template_enforces_max_sessions() {
        let request = parse_request(TEMPLATE).unwrap();
        let result = build_template(request, &args(vec![], Some(11)), &config(10));

        assert!(matches!(
            result,
            Err(CliError::TooManySessions {
                requested: 11,
                max: 10
            })
        ));
    }

    #[test]
    fn test_parse_request_invalid_json() {
        assert!(matches!(parse_request("{"), Err(CliError::Json(_))));
    }

    #[test]
    fn test_load_request_missing_file() {
        let result = load_request(Path::new("/nonexistent/tliconnect/course.json"));
        assert!(matches!(result, Err(CliError::ReadTemplate { .. })));
    }
}
