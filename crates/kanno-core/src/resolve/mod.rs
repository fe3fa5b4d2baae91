mod timeout;
mod uint32;

pub use timeout::{parse_annotation_timeout, try_parse_annotation_timeout};
pub use uint32::{parse_annotation_u32, try_parse_annotation_u32};

use kanno_model::AnnotationSource;

/// Value stored under `key`, with an empty string treated as missing.
fn lookup<'a, A>(annotations: &'a A, key: &str) -> Option<&'a str>
where
    A: AnnotationSource + ?Sized,
{
    annotations.annotation(key).filter(|v| !v.is_empty())
}
