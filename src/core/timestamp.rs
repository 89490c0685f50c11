//! Timestamp formatting for the time segment of log lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format applied to the optional time segment.
///
/// `Custom` accepts any strftime-compatible format string.
///
/// # Examples
///
/// ```
/// use clog::TimeFormat;
/// use chrono::Utc;
///
/// let format = TimeFormat::Iso8601;
/// let rendered = format.format(&Utc::now());
/// assert!(rendered.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `"%d.%m.%Y %H:%M:%S"`
    Custom(String),
}

impl TimeFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimeFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimeFormat::Rfc3339 => datetime.to_rfc3339(),
            TimeFormat::Unix => datetime.timestamp().to_string(),
            TimeFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimeFormat::Custom(layout) => datetime.format(layout).to_string(),
        }
    }
}
