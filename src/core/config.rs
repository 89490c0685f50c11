//! Logger configuration and builder

use super::log_level::Level;
use super::logger::Logger;
use super::timestamp::TimeFormat;
use std::io::Write;
use std::sync::Arc;

/// Capability invoked after a fatal-level line has been written.
///
/// The default handler terminates the process with exit code 1. Tests
/// inject a no-op handler to observe the fatal path without exiting.
pub type FatalHandler = Arc<dyn Fn() + Send + Sync>;

/// Recognized logger options, consumed once by [`Config::build`].
///
/// # Example
///
/// ```
/// use clog::{Config, Level};
///
/// let logger = Config::new()
///     .level(Level::Info)
///     .print_time(true)
///     .prefix("api")
///     .build();
/// logger.info("server started");
/// ```
pub struct Config {
    pub(crate) level: Level,
    pub(crate) print_color: bool,
    pub(crate) print_caller_line: bool,
    pub(crate) print_time: bool,
    pub(crate) time_format: TimeFormat,
    pub(crate) prefix: String,
    pub(crate) output: Option<Box<dyn Write + Send>>,
    pub(crate) on_fatal: Option<FatalHandler>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            print_color: false,
            print_caller_line: false,
            print_time: false,
            time_format: TimeFormat::default(),
            prefix: String::new(),
            output: None,
            on_fatal: None,
        }
    }
}

impl Config {
    /// Create a configuration with all decorations disabled and level `Debug`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Development preset: everything on, level `Debug`
    #[must_use]
    pub fn dev() -> Self {
        Self::new()
            .level(Level::Debug)
            .print_color(true)
            .print_caller_line(true)
            .print_time(true)
    }

    /// Production preset: no color, level `Info`
    #[must_use]
    pub fn prod() -> Self {
        Self::new()
            .level(Level::Info)
            .print_color(false)
            .print_caller_line(true)
            .print_time(true)
    }

    /// Set the minimum level a message must have to be emitted
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable ANSI-colored level tags
    #[must_use = "builder methods return a new value"]
    pub fn print_color(mut self, enabled: bool) -> Self {
        self.print_color = enabled;
        self
    }

    /// Enable or disable the caller `file:line` segment.
    ///
    /// Applies to every level, not just errors.
    #[must_use = "builder methods return a new value"]
    pub fn print_caller_line(mut self, enabled: bool) -> Self {
        self.print_caller_line = enabled;
        self
    }

    /// Enable or disable the time segment
    #[must_use = "builder methods return a new value"]
    pub fn print_time(mut self, enabled: bool) -> Self {
        self.print_time = enabled;
        self
    }

    /// Set the format used for the time segment
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Set a prefix written verbatim before every message.
    ///
    /// No separator is added; include one in the prefix itself if wanted.
    /// Derived loggers extend it via [`Logger::with_prefix`].
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the output sink. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, sink: impl Write + Send + 'static) -> Self {
        self.output = Some(Box::new(sink));
        self
    }

    /// Replace the process-termination handler run by `fatal`/`fatalf`
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = Some(handler);
        self
    }

    /// Consume the configuration and produce a [`Logger`]
    #[must_use]
    pub fn build(self) -> Logger {
        Logger::from_config(self)
    }
}
