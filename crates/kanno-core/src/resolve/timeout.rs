use std::time::Duration;

use kanno_model::{AnnotationSource, ModelResult, Timeout};

use super::lookup;

/// Resolve a timeout annotation.
///
/// - missing or empty value: [`Timeout::Absent`];
/// - `"infinity"`: [`Timeout::Infinite`];
/// - a duration literal such as `"10s"`: [`Timeout::Parsed`];
/// - any other value: `Timeout::Parsed(Duration::ZERO)`.
///
/// The last rule means a present but malformed value is reported as an explicit zero span,
/// not as absence. Use [`try_parse_annotation_timeout`] to tell the two apart.
///
/// ```rust
/// use std::time::Duration;
/// use kanno_core::resolve::parse_annotation_timeout;
/// use kanno_model::{Annotations, Timeout};
///
/// let a = Annotations::single("timeout", "10");
/// assert_eq!(parse_annotation_timeout(&a, "timeout"), Timeout::Parsed(Duration::ZERO));
/// assert_eq!(parse_annotation_timeout(&a, "other"), Timeout::Absent);
/// ```
pub fn parse_annotation_timeout<A>(annotations: &A, key: &str) -> Timeout
where
    A: AnnotationSource + ?Sized,
{
    try_parse_annotation_timeout(annotations, key).unwrap_or(Timeout::Parsed(Duration::ZERO))
}

/// Strict form of [`parse_annotation_timeout`]: a malformed value is an error.
pub fn try_parse_annotation_timeout<A>(annotations: &A, key: &str) -> ModelResult<Timeout>
where
    A: AnnotationSource + ?Sized,
{
    match lookup(annotations, key) {
        None => Ok(Timeout::Absent),
        Some(value) => value.parse(),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use kanno_model::{Annotations, ModelError, Timeout};

    use super::*;

    const KEY: &str = "kanno.dev/request-timeout";

    #[test]
    fn missing_key_is_absent() {
        let cases: [(&str, Option<Annotations>); 2] = [
            ("no map", None),
            ("empty map", Some(Annotations::new())),
        ];

        for (name, a) in cases {
            let got = parse_annotation_timeout(&a, KEY);
            assert_eq!(got, Timeout::Absent, "{name}");
            assert_eq!(got.as_pair(), (Duration::ZERO, false), "{name}");
        }
    }

    #[test]
    fn empty_value_is_absent() {
        let a = Annotations::single(KEY, "");
        assert_eq!(parse_annotation_timeout(&a, KEY), Timeout::Absent);
        assert_eq!(try_parse_annotation_timeout(&a, KEY), Ok(Timeout::Absent));
    }

    #[test]
    fn infinity_is_infinite_for_any_key() {
        for key in [KEY, "x", ""] {
            let a = Annotations::single(key, "infinity");
            let got = parse_annotation_timeout(&a, key);
            assert_eq!(got, Timeout::Infinite);
            assert_eq!(got.as_pair(), (Duration::ZERO, true));
        }
    }

    #[test]
    fn unit_literal_is_parsed() {
        let a = Annotations::single(KEY, "10s");
        let got = parse_annotation_timeout(&a, KEY);
        assert_eq!(got, Timeout::Parsed(Duration::from_secs(10)));
        assert_eq!(got.as_pair(), (Duration::from_secs(10), true));
    }

    #[test]
    fn malformed_value_resolves_to_zero_span() {
        for value in ["10", "10seconds", "Infinity", "-5s", " 10s"] {
            let a = Annotations::single(KEY, value);
            let got = parse_annotation_timeout(&a, KEY);

            assert_eq!(got, Timeout::Parsed(Duration::ZERO), "value {value:?}");
            assert_eq!(got.as_pair(), (Duration::ZERO, true), "value {value:?}");
            assert!(try_parse_annotation_timeout(&a, KEY).is_err(), "value {value:?}");
        }
    }

    #[test]
    fn strict_form_reports_grammar_error() {
        let a = Annotations::single(KEY, "10");
        let err = try_parse_annotation_timeout(&a, KEY).unwrap_err();
        assert!(matches!(err, ModelError::InvalidDuration { .. }));
    }

    #[test]
    fn repeated_calls_agree() {
        let mut a = HashMap::new();
        a.insert(KEY.to_string(), "1m30s".to_string());

        let first = parse_annotation_timeout(&a, KEY);
        let second = parse_annotation_timeout(&a, KEY);
        assert_eq!(first, second);
        assert_eq!(first, Timeout::Parsed(Duration::from_secs(90)));
    }
}
