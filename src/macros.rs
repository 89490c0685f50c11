//! Formatting macros for the `*f` logging entry points.
//!
//! The formatted logger methods take [`std::fmt::Arguments`], so the message
//! is rendered directly into the logger's scratch buffer. These macros wrap
//! `format_args!` to keep call sites readable.
//!
//! # Examples
//!
//! ```
//! use clog::{infof, Config};
//!
//! let logger = Config::new().output(std::io::sink()).build();
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}\n", port);
//! ```

/// Log formatted arguments at an explicit level.
///
/// # Examples
///
/// ```
/// # use clog::{logf, Config, Level};
/// # let logger = Config::new().output(std::io::sink()).build();
/// logf!(logger, Level::Warn, "retry {} of {}\n", 1, 3);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message, then invoke the termination handler.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Write formatted output on the ungated, untagged channel.
///
/// # Examples
///
/// ```
/// # use clog::{printf, Config};
/// # let logger = Config::new().output(std::io::sink()).build();
/// printf!(logger, "progress: {}%\n", 42);
/// ```
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Config, Level};

    fn sink_logger() -> crate::core::Logger {
        Config::new().output(std::io::sink()).build()
    }

    #[test]
    fn test_logf_macro() {
        let logger = sink_logger();
        logf!(logger, Level::Info, "simple\n");
        logf!(logger, Level::Error, "code: {}\n", 500);
    }

    #[test]
    fn test_leveled_macros() {
        let logger = sink_logger();
        debugf!(logger, "value: {}\n", 42);
        infof!(logger, "items: {}\n", 100);
        warnf!(logger, "retry {} of {}\n", 1, 3);
        errorf!(logger, "failed: {}\n", "timeout");
    }

    #[test]
    fn test_printf_macro() {
        let logger = sink_logger();
        printf!(logger, "plain {}\n", "output");
    }
}
