//! Tracing/logging initialization.
//!
//! Logs go to stderr so that stdout carries only the pantry reports.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, TracingConfig};

/// Initialize tracing from the environment.
///
/// An invalid format value falls back to text output and is reported once the
/// subscriber is installed. Safe to call multiple times.
pub fn init() {
    let (config, problem) = TracingConfig::from_lookup_or_fallback(|key| std::env::var(key).ok());

    init_with(&config);

    if let Some(err) = problem {
        ::tracing::warn!(error = %err, "invalid logging configuration; using text output");
    }
}

/// Initialize tracing with an explicit configuration.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &TracingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_with(&TracingConfig::default());
        init_with(&TracingConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Json,
        });
        ::tracing::info!("still logging");
    }
}
