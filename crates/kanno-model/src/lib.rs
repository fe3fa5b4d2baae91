mod domain;
pub use domain::{ANNOTATION_PREFIX, AnnotationKeys, AnnotationSource, Annotations, parse_duration};

mod error;
pub use error::{ModelError, ModelResult};

mod spec;
pub use spec::{RetryPolicy, RoutePolicy, Timeout, UpstreamLimits};
