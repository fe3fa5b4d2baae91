//! Resolution of resource annotations into typed configuration values.
//!
//! [`resolve`] holds the per-key resolvers: pure, log-free lookups that never fail.
//! [`map`] assembles route and upstream policies from a set of well-known keys.
pub mod map;
pub mod resolve;

pub mod prelude {
    pub use crate::map::{to_route_policy, to_upstream_limits};
    pub use crate::resolve::{
        parse_annotation_timeout, parse_annotation_u32, try_parse_annotation_timeout,
        try_parse_annotation_u32,
    };
}
