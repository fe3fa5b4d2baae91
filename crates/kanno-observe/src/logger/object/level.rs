use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` directive string, e.g. `"info"` or `"kanno_core=debug,warn"`.
///
/// The raw string is kept so the value can be serialized back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// ```
    /// use kanno_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("kanno_core=trace,info").unwrap();
    /// assert_eq!(lvl.as_str(), "kanno_core=trace,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter. Falls back to `info` if the directive no longer parses.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_directives() {
        for lvl in ["info", "warn", "trace", "kanno_core=debug,kanno_resolve=trace,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "expected {lvl} to parse");
        }
    }

    #[test]
    fn rejects_invalid_directives() {
        for lvl in ["kanno_core=loud", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "expected {lvl} to fail");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_keeps_raw_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""kanno_core=debug""#).unwrap();
        assert_eq!(lvl.as_str(), "kanno_core=debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""kanno_core=debug""#);

        assert!(serde_json::from_str::<LoggerLevel>(r#""x=nope""#).is_err());
    }
}
