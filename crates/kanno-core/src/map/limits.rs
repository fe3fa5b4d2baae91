use kanno_model::{AnnotationKeys, AnnotationSource, UpstreamLimits};
use tracing::{debug, instrument};

use super::u32_field;

/// Assemble upstream connection thresholds from `annotations`.
#[instrument(level = "debug", skip_all)]
pub fn to_upstream_limits<A>(annotations: &A, keys: &AnnotationKeys) -> UpstreamLimits
where
    A: AnnotationSource + ?Sized,
{
    let limits = UpstreamLimits {
        max_connections: u32_field(annotations, &keys.max_connections),
        max_pending_requests: u32_field(annotations, &keys.max_pending_requests),
        max_requests: u32_field(annotations, &keys.max_requests),
        max_retries: u32_field(annotations, &keys.max_retries),
    };

    debug!(?limits, "upstream limits resolved");
    limits
}
