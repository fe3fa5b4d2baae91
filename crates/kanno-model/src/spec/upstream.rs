use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Upstream connection thresholds resolved from annotations.
///
/// `None` means the annotation was missing or unusable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpstreamLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pending_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl UpstreamLimits {
    /// Returns `true` if no threshold is set.
    pub fn is_empty(&self) -> bool {
        self.max_connections.is_none()
            && self.max_pending_requests.is_none()
            && self.max_requests.is_none()
            && self.max_retries.is_none()
    }
}
