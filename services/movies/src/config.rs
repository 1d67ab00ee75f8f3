use serde::Deserialize;

use marquee_auth_types::JwtSettings;
use marquee_core::config::Config;

/// Movies service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct MoviesConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port to listen on (default 3110). Env var: `MOVIES_PORT`.
    #[serde(default = "default_port")]
    pub movies_port: u16,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    /// Access token lifetime in seconds (default 3600).
    #[serde(default = "default_ttl")]
    pub jwt_ttl_secs: u64,
}

fn default_port() -> u16 {
    3110
}

fn default_ttl() -> u64 {
    3600
}

impl Config for MoviesConfig {}

impl MoviesConfig {
    pub fn jwt_settings(&self) -> JwtSettings {
        JwtSettings {
            secret: self.jwt_secret.clone(),
            issuer: self.jwt_issuer.clone(),
            audience: self.jwt_audience.clone(),
            ttl_secs: self.jwt_ttl_secs,
        }
    }
}
