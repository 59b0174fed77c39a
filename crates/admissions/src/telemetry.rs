use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Install the global tracing subscriber with the configured filter.
/// Safe to call once per process; a second call reports `AlreadySet`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|source| TelemetryError::InvalidFilter {
            directive: config.log_level.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| TelemetryError::AlreadySet)
}

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    AlreadySet,
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "invalid log filter directive '{directive}'")
            }
            TelemetryError::AlreadySet => write!(f, "global tracing subscriber already installed"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadySet => None,
        }
    }
}
