use kanno_model::{AnnotationSource, ModelError, ModelResult};

use super::lookup;

/// Resolve an unsigned 32-bit integer annotation.
///
/// Returns `None` when the key is missing, the value is empty, or the value is not a
/// plain base-10 literal within `0..=u32::MAX`. Signs, whitespace and separators are rejected.
///
/// ```rust
/// use kanno_core::resolve::parse_annotation_u32;
/// use kanno_model::Annotations;
///
/// let a = Annotations::single("max-requests", "20");
/// assert_eq!(parse_annotation_u32(&a, "max-requests"), Some(20));
/// assert_eq!(parse_annotation_u32(&a, "max-retries"), None);
/// ```
pub fn parse_annotation_u32<A>(annotations: &A, key: &str) -> Option<u32>
where
    A: AnnotationSource + ?Sized,
{
    try_parse_annotation_u32(annotations, key).ok().flatten()
}

/// Strict form of [`parse_annotation_u32`]: a malformed value is an error,
/// while a missing or empty one is still `Ok(None)`.
pub fn try_parse_annotation_u32<A>(annotations: &A, key: &str) -> ModelResult<Option<u32>>
where
    A: AnnotationSource + ?Sized,
{
    let Some(value) = lookup(annotations, key) else {
        return Ok(None);
    };
    // `u32::from_str` would also take a leading '+'
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::InvalidUInt32(value.to_string()));
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ModelError::InvalidUInt32(value.to_string()))
}
