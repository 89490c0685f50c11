//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Bracketed tag text written into every leveled line.
    ///
    /// Fatal logs through the error display path and has no tag of its own.
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error | Level::Fatal => "ERR",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            // Fatal shares the error color, matching its tag.
            Level::Error | Level::Fatal => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" | "DBG" => Ok(Level::Debug),
            "INFO" | "INF" => Ok(Level::Info),
            "WARN" | "WARNING" | "WRN" => Ok(Level::Warn),
            "ERROR" | "ERR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering_is_total() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_tags() {
        assert_eq!(Level::Debug.tag(), "DBG");
        assert_eq!(Level::Info.tag(), "INF");
        assert_eq!(Level::Warn.tag(), "WRN");
        assert_eq!(Level::Error.tag(), "ERR");
    }

    #[test]
    fn test_fatal_delegates_to_error_tag() {
        assert_eq!(Level::Fatal.tag(), Level::Error.tag());
        assert_eq!(Level::Fatal.color_code(), Level::Error.color_code());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("wrn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Level::Error).expect("serialize");
        assert_eq!(json, "\"Error\"");
        let level: Level = serde_json::from_str("\"Debug\"").expect("deserialize");
        assert_eq!(level, Level::Debug);
    }
}
