use std::io::IsTerminal;

use crate::logger::{error::LoggerError, format::LoggerFormat};

/// Environment variable overriding [`LoggerConfig::format`].
pub const LOG_FORMAT_ENV: &str = "CLUSTERSTATE_LOG_FORMAT";
/// Environment variable overriding [`LoggerConfig::level`] (an `EnvFilter` directive).
pub const LOG_LEVEL_ENV: &str = "CLUSTERSTATE_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            with_targets: true,
            use_color,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with [`LOG_FORMAT_ENV`] and [`LOG_LEVEL_ENV`].
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            cfg.format = format.parse()?;
            if cfg.format == LoggerFormat::Json {
                cfg.use_color = false;
            }
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|l| !l.trim().is_empty()) {
            cfg.level = level.trim().to_string();
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let cfg = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level, "info");
        assert!(cfg.with_targets);
    }

    #[test]
    fn environment_overrides_format_and_level() {
        let cfg = LoggerConfig::from_lookup(lookup(&[
            (LOG_FORMAT_ENV, "json"),
            (LOG_LEVEL_ENV, "clusterstate=trace"),
        ]))
        .unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level, "clusterstate=trace");
        assert!(!cfg.use_color);
    }

    #[test]
    fn blank_level_is_ignored() {
        let cfg = LoggerConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "  ")])).unwrap();
        assert_eq!(cfg.level, "info");
    }

    #[test]
    fn invalid_format_is_an_error() {
        let err = LoggerConfig::from_lookup(lookup(&[(LOG_FORMAT_ENV, "xml")])).unwrap_err();
        assert_eq!(err, LoggerError::InvalidFormat("xml".to_string()));
    }
}
