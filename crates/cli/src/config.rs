use std::env;

/// Default upper bound on sessions generated in one invocation.
const DEFAULT_MAX_SESSIONS: u32 = 1_000;

/// Default tracing filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tliconnect=info,tliconnect_cli=info,tliconnect_core=info";

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum session count a template may request (default: 1,000)
    pub max_sessions: u32,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TLICONNECT_MAX_SESSIONS` - Maximum sessions per template (default: 1,000)
    /// - `TLICONNECT_LOG` - Fallback tracing filter (default: info for the tliconnect crates)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_sessions: lookup("TLICONNECT_MAX_SESSIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SESSIONS),
            log_filter: lookup("TLICONNECT_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
