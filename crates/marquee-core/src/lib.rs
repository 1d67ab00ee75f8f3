//! Service plumbing shared by Marquee binaries: configuration, tracing,
//! middleware, health checks and the JSON response envelope.

pub mod config;
pub mod envelope;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
