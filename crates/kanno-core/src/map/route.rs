use kanno_model::{AnnotationKeys, AnnotationSource, RetryPolicy, RoutePolicy};
use tracing::{debug, instrument};

use super::{timeout_field, u32_field};

/// Assemble the route policy from `annotations`.
///
/// The retry policy exists only when the retry-on annotation is present and non-empty;
/// retry count and per-try timeout are ignored without it.
#[instrument(level = "debug", skip_all)]
pub fn to_route_policy<A>(annotations: &A, keys: &AnnotationKeys) -> RoutePolicy
where
    A: AnnotationSource + ?Sized,
{
    let timeout = timeout_field(annotations, &keys.request_timeout);

    let retry = annotations
        .annotation(&keys.retry_on)
        .filter(|v| !v.is_empty())
        .map(|retry_on| RetryPolicy {
            num_retries: u32_field(annotations, &keys.num_retries),
            per_try_timeout: timeout_field(annotations, &keys.per_try_timeout),
            ..RetryPolicy::new(retry_on)
        });

    debug!(?timeout, retry = retry.is_some(), "route policy resolved");
    RoutePolicy { timeout, retry }
}
