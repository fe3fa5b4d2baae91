//! Well-known annotation keys.
//!
//! Resolvers take the key name as a plain parameter and never look at this table.
//! It only drives policy assembly, and every name can be overridden from configuration.

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Prefix shared by the default annotation keys.
pub const ANNOTATION_PREFIX: &str = "kanno.dev/";

/// Names of the annotations consulted when assembling route and upstream policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotationKeys {
    /// Request timeout for the route (`"infinity"` disables it).
    pub request_timeout: String,
    /// Conditions under which a request is retried; enables the retry policy.
    pub retry_on: String,
    /// Maximum number of retries.
    pub num_retries: String,
    /// Timeout applied to each retry attempt.
    pub per_try_timeout: String,
    /// Upstream connection limit.
    pub max_connections: String,
    /// Upstream pending request limit.
    pub max_pending_requests: String,
    /// Upstream parallel request limit.
    pub max_requests: String,
    /// Upstream parallel retry limit.
    pub max_retries: String,
}

impl AnnotationKeys {
    /// Build the default key set under a custom prefix.
    ///
    /// ```rust
    /// use kanno_model::AnnotationKeys;
    ///
    /// let keys = AnnotationKeys::with_prefix("example.com/");
    /// assert_eq!(keys.request_timeout, "example.com/request-timeout");
    /// ```
    pub fn with_prefix(prefix: &str) -> Self {
        let key = |name: &str| format!("{prefix}{name}");
        Self {
            request_timeout: key("request-timeout"),
            retry_on: key("retry-on"),
            num_retries: key("num-retries"),
            per_try_timeout: key("per-try-timeout"),
            max_connections: key("max-connections"),
            max_pending_requests: key("max-pending-requests"),
            max_requests: key("max-requests"),
            max_retries: key("max-retries"),
        }
    }
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        Self::with_prefix(ANNOTATION_PREFIX)
    }
}
