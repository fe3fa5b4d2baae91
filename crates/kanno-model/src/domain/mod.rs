mod annotations;
pub use annotations::{AnnotationSource, Annotations};

mod keys;
pub use keys::{ANNOTATION_PREFIX, AnnotationKeys};

mod duration;
pub use duration::parse_duration;
