//! # clog
//!
//! A leveled, prefix-aware text logger that writes human-readable lines to
//! an arbitrary byte sink.
//!
//! ## Features
//!
//! - **Leveled**: `Debug`/`Info`/`Warn`/`Error`/`Fatal` with cheap gating
//! - **Decorations**: optional timestamps, colored tags, caller locations
//! - **Prefix Chaining**: derive loggers that extend a textual prefix
//! - **Thread Safe**: whole lines are atomic per logger instance
//!
//! ## Example
//!
//! ```
//! use clog::Config;
//!
//! let logger = Config::dev().output(std::io::sink()).build();
//! logger.info("server started");
//!
//! let db = logger.with_prefix("db");
//! db.warn("slow query"); // renders as "db: slow query"
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{Config, FatalHandler, Level, Logger, LoggerError, Result, TimeFormat};
}

pub use core::{Config, FatalHandler, Level, Logger, LoggerError, Result, TimeFormat};
