use crate::{env_or_default, ConfigError, Environment};
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Output format of the log subscriber
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable output
    Pretty,
    /// Single-line, human-readable output
    Compact,
    /// One JSON object per line, for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "dev" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::ParseError {
                key: "LOG_FORMAT".to_string(),
                details: format!("unknown log format '{}' (expected pretty, compact or json)", other),
            }),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Default filter directive, used when RUST_LOG is not set
    pub level: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Reads LOG_LEVEL (default "info") and LOG_FORMAT.
    ///
    /// Without LOG_FORMAT, production logs as JSON and development pretty-prints.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        let level = env_or_default("LOG_LEVEL", "info");
        let format = match std::env::var("LOG_FORMAT") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ if environment.is_production() => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self { level, format })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with the configured level and format plus error span capture.
///
/// `RUST_LOG` takes precedence over `LOG_LEVEL`. An invalid directive falls back to "info".
///
/// Safe to call multiple times: if a subscriber is already installed (common in tests),
/// this is a no-op.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().compact().with_target(false))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
    };

    match result {
        Ok(_) => {
            info!(
                level = %config.level,
                format = ?config.format,
                "Tracing initialized with ErrorLayer"
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("dev".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_config_defaults_by_environment() {
        temp_env::with_vars([("LOG_LEVEL", None::<&str>), ("LOG_FORMAT", None)], || {
            let dev = LogConfig::from_env(&Environment::Development).unwrap();
            assert_eq!(dev.level, "info");
            assert_eq!(dev.format, LogFormat::Pretty);

            let prod = LogConfig::from_env(&Environment::Production).unwrap();
            assert_eq!(prod.format, LogFormat::Json);
        });
    }

    #[test]
    fn test_log_config_explicit_values() {
        temp_env::with_vars(
            [("LOG_LEVEL", Some("debug")), ("LOG_FORMAT", Some("compact"))],
            || {
                let config = LogConfig::from_env(&Environment::Production).unwrap();
                assert_eq!(config.level, "debug");
                assert_eq!(config.format, LogFormat::Compact);
            },
        );
    }

    #[test]
    fn test_log_config_invalid_format() {
        temp_env::with_var("LOG_FORMAT", Some("xml"), || {
            let err = LogConfig::from_env(&Environment::Development).unwrap_err();
            assert!(err.to_string().contains("LOG_FORMAT"));
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&LogConfig::default());
        init_tracing(&LogConfig {
            level: "warn".to_string(),
            format: LogFormat::Json,
        });
    }

    #[test]
    fn test_init_tracing_with_invalid_level() {
        temp_env::with_var_unset("RUST_LOG", || {
            init_tracing(&LogConfig {
                level: "[not a directive".to_string(),
                format: LogFormat::Compact,
            });
        });
    }
}
