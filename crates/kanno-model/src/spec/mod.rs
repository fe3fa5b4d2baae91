mod timeout;
pub use timeout::Timeout;

mod route;
pub use route::{RetryPolicy, RoutePolicy};

mod upstream;
pub use upstream::UpstreamLimits;
