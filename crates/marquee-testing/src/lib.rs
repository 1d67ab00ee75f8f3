//! Test utilities for Marquee services.
//!
//! Import in `#[cfg(test)]` blocks and integration tests only, never in
//! production code.

pub mod auth;
