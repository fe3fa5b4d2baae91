//! Duration literal grammar.
//!
//! A literal is a possibly signed sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit suffix, e.g. `"300ms"`, `"1.5h"` or `"2h45m"`.
//! Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
//! The bare literal `"0"` is the only number accepted without a unit.
use std::time::Duration;

use crate::error::{ModelError, ModelResult};

/// Exclusive upper bound of an accumulated magnitude, in nanoseconds.
const LIMIT: u64 = 1 << 63;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        // ASCII, MICRO SIGN and GREEK SMALL LETTER MU
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(60 * 60 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Parse a duration literal into a non-negative [`Duration`].
///
/// The total must fit into a signed 64-bit nanosecond count.
/// A negative literal is rejected unless it is zero (`"-0s"`).
///
/// ```rust
/// use std::time::Duration;
/// use kanno_model::parse_duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(value: &str) -> ModelResult<Duration> {
    let invalid = |reason| ModelError::InvalidDuration {
        value: value.to_string(),
        reason,
    };
    let overflow = || ModelError::DurationOverflow(value.to_string());

    let (negative, mut s) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid("empty literal"));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(invalid("expected a number"));
        }

        let (whole, rest) = leading_int(s).ok_or_else(overflow)?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let (mut frac, mut scale, mut has_frac) = (0u64, 1f64, false);
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, after) = leading_fraction(rest);
            has_frac = after.len() != rest.len();
            (frac, scale) = (f, sc);
            s = after;
        }
        if !has_whole && !has_frac {
            return Err(invalid("expected a number"));
        }

        let end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if end == 0 {
            return Err(invalid("missing unit"));
        }
        let (unit, rest) = s.split_at(end);
        s = rest;

        let per_unit = unit_nanos(unit).ok_or_else(|| ModelError::UnknownDurationUnit {
            value: value.to_string(),
            unit: unit.to_string(),
        })?;
        if whole > LIMIT / per_unit {
            return Err(overflow());
        }
        let mut component = whole * per_unit;
        if frac > 0 {
            // float math mirrors the usual literal semantics: sub-nanosecond digits truncate
            component += (frac as f64 * (per_unit as f64 / scale)) as u64;
            if component > LIMIT {
                return Err(overflow());
            }
        }

        total = total
            .checked_add(component)
            .filter(|t| *t <= LIMIT)
            .ok_or_else(overflow)?;
    }

    if negative {
        return match total {
            0 => Ok(Duration::ZERO),
            _ => Err(ModelError::NegativeDuration(value.to_string())),
        };
    }
    if total > LIMIT - 1 {
        return Err(overflow());
    }
    Ok(Duration::from_nanos(total))
}

/// Consume leading decimal digits. Returns `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());

    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consume fraction digits, returning the digits that fit and their decimal scale.
///
/// Digits past the accumulator capacity are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());

    let (mut x, mut scale, mut saturated) = (0u64, 1f64, false);
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            saturated = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > LIMIT {
            saturated = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::parse_duration;
    use crate::ModelError;

    #[test]
    fn accepts_simple_units() {
        let cases = [
            ("10s", Duration::from_secs(10)),
            ("5m", Duration::from_secs(300)),
            ("2h", Duration::from_secs(7200)),
            ("100ms", Duration::from_millis(100)),
            ("3us", Duration::from_micros(3)),
            ("3\u{b5}s", Duration::from_micros(3)),
            ("3\u{3bc}s", Duration::from_micros(3)),
            ("12ns", Duration::from_nanos(12)),
            ("+5s", Duration::from_secs(5)),
            ("0s", Duration::ZERO),
        ];

        for (input, want) in cases {
            assert_eq!(parse_duration(input), Ok(want), "input {input:?}");
        }
    }

    #[test]
    fn bare_zero_needs_no_unit() {
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("+0"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("-0"), Ok(Duration::ZERO));
    }

    #[test]
    fn sums_compound_and_fractional_components() {
        assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_duration("1.5h"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_duration(".5s"), Ok(Duration::from_millis(500)));
        assert_eq!(parse_duration("1.s"), Ok(Duration::from_secs(1)));
        assert_eq!(parse_duration("1m0.25s"), Ok(Duration::from_millis(60_250)));
        assert_eq!(
            parse_duration("1.0000000001s"),
            Ok(Duration::from_secs(1)),
            "sub-nanosecond digits are truncated"
        );
    }

    #[test]
    fn rejects_numbers_without_unit() {
        for input in ["10", "1.5", "1s5", "3.4.5s"] {
            let err = parse_duration(input).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidDuration { .. }),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_literals() {
        for input in ["", "-", "+", ".", "s", ".s", " 1s", "infinity", "-.s"] {
            assert!(parse_duration(input).is_err(), "input {input:?}");
        }
    }

    #[test]
    fn rejects_unknown_units() {
        let err = parse_duration("10seconds").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownDurationUnit {
                value: "10seconds".into(),
                unit: "seconds".into(),
            }
        );

        assert!(parse_duration("1d").is_err());
        assert!(parse_duration("1s ").is_err());
        assert!(parse_duration("1S").is_err());
    }

    #[test]
    fn negative_spans_are_rejected() {
        assert_eq!(
            parse_duration("-1s"),
            Err(ModelError::NegativeDuration("-1s".into()))
        );
        assert_eq!(parse_duration("-0s"), Ok(Duration::ZERO));
    }

    #[test]
    fn largest_representable_span() {
        let max = parse_duration("2562047h47m16.854775807s").unwrap();
        assert_eq!(max, Duration::from_nanos(i64::MAX as u64));

        assert_eq!(
            parse_duration("2562047h47m16.854775808s"),
            Err(ModelError::DurationOverflow("2562047h47m16.854775808s".into()))
        );
        assert!(parse_duration("9223372036854775808ns").is_err());
        assert!(parse_duration("99999999999999999999s").is_err());
    }
}
