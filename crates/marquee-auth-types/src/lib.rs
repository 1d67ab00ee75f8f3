//! Auth types shared across Marquee crates.
//!
//! Provides JWT issuing and validation plus the bearer `Identity` extractor.

pub mod identity;
pub mod token;

pub use token::{AuthError, JwtClaims, JwtSettings};
