use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use super::Timeout;

/// Route-level settings resolved from annotations.
///
/// Every field keeps "not set" distinct from an explicit value, so the
/// configuration layer that consumes it decides on defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RoutePolicy {
    /// Overall request timeout.
    pub timeout: Timeout,
    /// Retry settings, present only when retry conditions were given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryPolicy>,
}

/// Retry settings for a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Retry conditions, passed through verbatim (e.g. `"5xx,gateway-error"`).
    pub retry_on: String,
    /// Maximum number of retries.
    ///
    /// `Some(0)` is kept as given; the proxy layer decides what zero means.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<u32>,
    /// Timeout for each individual attempt.
    #[serde(default)]
    pub per_try_timeout: Timeout,
}

impl RetryPolicy {
    /// Retry policy with only the conditions set.
    pub fn new(retry_on: impl Into<String>) -> Self {
        Self {
            retry_on: retry_on.into(),
            num_retries: None,
            per_try_timeout: Timeout::Absent,
        }
    }
}
