//! Logging initialization for cdx-harvest.
//!
//! Configures `tracing-subscriber` from the resolved settings. Log lines go to
//! stderr next to the progress bar; stdout is left untouched.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::shared::Result;

/// Default filter directive when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: {}. Please specify 'pretty' or 'json'",
                s
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Builds the filter: `RUST_LOG` wins, then `level`.
fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| {
        anyhow!(
            "Invalid log level '{}': {}\n\n💡 Hint: Use one of error, warn, info, debug, trace, or a filter such as 'cdx_harvest=debug'.",
            level,
            e
        )
    })
}

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let env_filter = build_filter(level)?;

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| anyhow!("failed to initialize JSON tracing subscriber: {}", e))?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| anyhow!("failed to initialize pretty tracing subscriber: {}", e))?;
        }
    }

    Ok(())
}
