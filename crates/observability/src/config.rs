use core::str::FromStr;

use pantry_core::{PantryError, PantryResult};

/// `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// `text` or `json`.
pub const FORMAT_ENV: &str = "PANTRY_LOG_FORMAT";
/// Quiet by default: stdout belongs to the reports, diagnostics go to stderr.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PantryError::validation(format!(
                "{FORMAT_ENV} must be `text` or `json`, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> PantryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PantryResult<Self> {
        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            filter: filter_from(&lookup),
            format,
        })
    }

    /// Like [`from_lookup`](Self::from_lookup), but an invalid format falls back
    /// to text output. The filter is still honored; the error is handed back so
    /// it can be logged once tracing is up.
    pub fn from_lookup_or_fallback(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Option<PantryError>) {
        match Self::from_lookup(&lookup) {
            Ok(config) => (config, None),
            Err(err) => (
                Self {
                    filter: filter_from(&lookup),
                    format: LogFormat::Text,
                },
                Some(err),
            ),
        }
    }
}

fn filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(FILTER_ENV)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TracingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn reads_filter_and_format() {
        let config = TracingConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "pantry_inventory=debug"),
            (FORMAT_ENV, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.filter, "pantry_inventory=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let config = TracingConfig::from_lookup(lookup_from(&[(FILTER_ENV, "  ")])).unwrap();
        assert_eq!(config.filter, DEFAULT_FILTER);
    }

    #[test]
    fn unknown_format_falls_back_to_text_and_keeps_filter() {
        let (config, err) = TracingConfig::from_lookup_or_fallback(lookup_from(&[
            (FILTER_ENV, "pantry_inventory=debug"),
            (FORMAT_ENV, "xml"),
        ]));

        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.filter, "pantry_inventory=debug");
        assert!(matches!(err, Some(PantryError::Validation(_))));
    }

    #[test]
    fn valid_config_passes_through_without_error() {
        let (config, err) =
            TracingConfig::from_lookup_or_fallback(lookup_from(&[(FORMAT_ENV, "json")]));

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, DEFAULT_FILTER);
        assert!(err.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = TracingConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "yaml")])).unwrap_err();
        match err {
            PantryError::Validation(msg) => assert!(msg.contains("yaml")),
            _ => panic!("Expected Validation error for unknown format"),
        }
    }
}
