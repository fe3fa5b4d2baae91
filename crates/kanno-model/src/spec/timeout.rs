use std::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    domain::parse_duration,
    error::{ModelError, ModelResult},
};

/// Resolved value of a timeout annotation.
///
/// Each outcome is its own variant:
/// - `Absent`: the annotation is missing or empty, the caller picks its own default;
/// - `Infinite`: the annotation is the literal `"infinity"`, no timeout bound at all;
/// - `Parsed`: an explicit span, which may legitimately be zero.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum Timeout {
    #[default]
    Absent,
    Infinite,
    Parsed(Duration),
}

impl Timeout {
    /// Literal that disables the timeout. Matched case-sensitively.
    pub const INFINITY: &'static str = "infinity";

    pub const fn is_absent(&self) -> bool {
        matches!(self, Timeout::Absent)
    }

    pub const fn is_infinite(&self) -> bool {
        matches!(self, Timeout::Infinite)
    }

    /// Returns the explicit span, if one was parsed.
    pub const fn duration(&self) -> Option<Duration> {
        match self {
            Timeout::Parsed(d) => Some(*d),
            _ => None,
        }
    }

    /// Flattened `(span, present)` view.
    ///
    /// `Absent` is `(0, false)`, `Infinite` is `(0, true)` and `Parsed(d)` is `(d, true)`.
    /// The view is lossy: `Infinite` and `Parsed(ZERO)` collapse to the same pair.
    pub const fn as_pair(&self) -> (Duration, bool) {
        match self {
            Timeout::Absent => (Duration::ZERO, false),
            Timeout::Infinite => (Duration::ZERO, true),
            Timeout::Parsed(d) => (*d, true),
        }
    }
}

impl FromStr for Timeout {
    type Err = ModelError;

    /// Strict parse: an empty value is `Absent`, anything else must be
    /// `"infinity"` or a valid duration literal.
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "" => Ok(Timeout::Absent),
            Self::INFINITY => Ok(Timeout::Infinite),
            other => parse_duration(other).map(Timeout::Parsed),
        }
    }
}

impl From<Duration> for Timeout {
    fn from(d: Duration) -> Self {
        Timeout::Parsed(d)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Timeout;

    #[test]
    fn default_is_absent() {
        assert_eq!(Timeout::default(), Timeout::Absent);
        assert_eq!(Timeout::default().as_pair(), (Duration::ZERO, false));
    }

    #[test]
    fn parses_sentinel_case_sensitively() {
        assert_eq!("infinity".parse::<Timeout>(), Ok(Timeout::Infinite));
        assert!("Infinity".parse::<Timeout>().is_err());
        assert!("INFINITY".parse::<Timeout>().is_err());
    }

    #[test]
    fn empty_is_absent_and_literal_is_parsed() {
        assert_eq!("".parse::<Timeout>(), Ok(Timeout::Absent));
        assert_eq!(
            "10s".parse::<Timeout>(),
            Ok(Timeout::Parsed(Duration::from_secs(10)))
        );
        assert!("10".parse::<Timeout>().is_err());
    }

    #[test]
    fn zero_span_is_distinct_from_sentinels() {
        let zero = Timeout::from(Duration::ZERO);

        assert_ne!(zero, Timeout::Absent);
        assert_ne!(zero, Timeout::Infinite);
        assert_eq!(zero.duration(), Some(Duration::ZERO));
        assert_eq!(Timeout::Infinite.duration(), None);
        assert!(Timeout::Infinite.is_infinite());
        assert!(Timeout::Absent.is_absent());
    }

    #[test]
    fn pair_view_matches_flag_convention() {
        assert_eq!(Timeout::Infinite.as_pair(), (Duration::ZERO, true));
        assert_eq!(
            Timeout::Parsed(Duration::from_secs(3)).as_pair(),
            (Duration::from_secs(3), true)
        );
    }

    #[test]
    fn serde_roundtrip_json() {
        for t in [
            Timeout::Absent,
            Timeout::Infinite,
            Timeout::Parsed(Duration::from_millis(1500)),
        ] {
            let json = serde_json::to_string(&t).unwrap();
            let back: Timeout = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
        }

        assert_eq!(serde_json::to_string(&Timeout::Infinite).unwrap(), r#""infinite""#);
    }
}
