//! Core logger types

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use config::{Config, FatalHandler};
pub use error::{LoggerError, Result};
pub use log_level::Level;
pub use logger::Logger;
pub use timestamp::TimeFormat;
