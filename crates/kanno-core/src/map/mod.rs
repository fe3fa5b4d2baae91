mod limits;
mod route;

pub use limits::to_upstream_limits;
pub use route::to_route_policy;

use std::time::Duration;

use kanno_model::{AnnotationSource, Timeout};
use tracing::warn;

use crate::resolve::{try_parse_annotation_timeout, try_parse_annotation_u32};

/// Lenient timeout lookup that reports a malformed value before resolving it to a zero span.
fn timeout_field<A>(annotations: &A, key: &str) -> Timeout
where
    A: AnnotationSource + ?Sized,
{
    try_parse_annotation_timeout(annotations, key).unwrap_or_else(|e| {
        warn!(key, error = %e, "malformed timeout annotation resolves to a zero timeout");
        Timeout::Parsed(Duration::ZERO)
    })
}

/// Lenient integer lookup that reports a malformed value before dropping it.
fn u32_field<A>(annotations: &A, key: &str) -> Option<u32>
where
    A: AnnotationSource + ?Sized,
{
    try_parse_annotation_u32(annotations, key).unwrap_or_else(|e| {
        warn!(key, error = %e, "malformed integer annotation is ignored");
        None
    })
}
