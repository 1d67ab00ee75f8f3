//! Mock auth helpers for integration tests.
//!
//! `MockAuth` signs a real access token with test settings so requests pass
//! through the same `Identity` extractor production traffic does.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use marquee_auth_types::token::{JwtSettings, issue_token};
use marquee_domain::role::Role;

pub const TEST_JWT_SECRET: &str = "marquee-test-secret";
pub const TEST_JWT_ISSUER: &str = "marquee-test";
pub const TEST_JWT_AUDIENCE: &str = "marquee-test-clients";

/// Settings matching the tokens `MockAuth` produces.
pub fn test_jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_JWT_SECRET.to_owned(),
        issuer: TEST_JWT_ISSUER.to_owned(),
        audience: TEST_JWT_AUDIENCE.to_owned(),
        ttl_secs: 600,
    }
}

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub login: String,
    pub user_id: i32,
    pub role: Role,
}

impl MockAuth {
    pub fn new(user_id: i32, role: Role) -> Self {
        Self {
            login: format!("{}-{user_id}", role.as_str().to_lowercase()),
            user_id,
            role,
        }
    }

    pub fn token(&self) -> String {
        let (token, _) = issue_token(
            &test_jwt_settings(),
            &self.login,
            self.user_id,
            &self.login,
            self.role,
        )
        .unwrap();
        token
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap();
        (AUTHORIZATION, value)
    }
}
