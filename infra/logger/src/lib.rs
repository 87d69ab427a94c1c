//! # Logger
//!
//! Diagnostic logging for the Insecta binaries.
//!
//! Log events go to **stderr** so they never interleave with the demonstration
//! output on stdout. Filtering starts from the builder's level and can be refined
//! with [`LoggerBuilder::env_filter`] or overridden at runtime through `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use insecta_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("insecta")
//!     .console(true)
//!     .level(LevelFilter::WARN)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::io;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, json: false, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and installing the global tracing subscriber.
///
/// A name is mandatory; [`LoggerBuilder::init`] only exists once it is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name reported by the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `insecta_taxonomy=debug`).
    ///
    /// Invalid filters cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console (stderr) logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Emits console events as JSON lines instead of the compact format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_name(&self.name.0)?;

        if !self.config.console {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output.".into(),
                context: None,
            });
        }

        let env_filter = build_env_filter(&self.config)?;

        let console = layer().with_writer(io::stderr).with_target(true);
        let console = if self.config.json {
            console.json().boxed()
        } else {
            console.compact().with_ansi(true).boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console)
            .try_init()
            .context("Installing the global subscriber")?;

        tracing::debug!(logger = %self.name.0, "Logger initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Dropping this handle marks the end of the logging session."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// The name the logger was initialized with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        tracing::debug!(logger = %self.name, "Logging session closed");
    }
}

fn validate_name(name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let builder = Logger::builder().name("test-app").env_filter("insecta=debug");
        assert!(builder.config.console);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("insecta=debug"));
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let builder = Logger::builder().name("test-app").level(LevelFilter::WARN).json();
        assert_eq!(builder.config.level, LevelFilter::WARN);
        assert!(builder.config.json);
        assert_eq!(builder.name.0, "test-app");
    }

    #[test]
    #[serial]
    fn test_blank_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_invalid_env_filter_is_rejected() {
        let err = Logger::builder()
            .name("test-app")
            .env_filter("insecta=verbose")
            .init()
            .expect_err("malformed filter must fail");
        assert!(err.to_string().contains("Invalid env filter"));
    }

    #[test]
    #[serial]
    fn test_disabled_console_is_rejected() {
        let err = Logger::builder().name("test-app").console(false).init().expect_err("no layers");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
