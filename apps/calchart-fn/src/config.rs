//! Environment configuration

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Runtime settings read from the environment
///
/// | Variable | Default |
/// |---|---|
/// | `CHART_HOST` | `0.0.0.0` |
/// | `CHART_PORT` | `8080` |
/// | `CHART_EXPOSE_ERRORS` | `false` |
/// | `CHART_LOG_FORMAT` | `pretty` (`json` for JSON lines) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub expose_internal_errors: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("CHART_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("CHART_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("CHART_PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let expose_internal_errors = lookup("CHART_EXPOSE_ERRORS")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        let log_format = lookup("CHART_LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            expose_internal_errors,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(!config.expose_internal_errors);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CHART_HOST", "127.0.0.1"),
            ("CHART_PORT", "9000"),
            ("CHART_EXPOSE_ERRORS", "TRUE"),
            ("CHART_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert!(config.expose_internal_errors);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("CHART_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("CHART_PORT"));
    }

    #[test]
    fn test_unknown_flag_values_are_false() {
        let config = config_from(&[("CHART_EXPOSE_ERRORS", "maybe")]).unwrap();
        assert!(!config.expose_internal_errors);
    }
}
