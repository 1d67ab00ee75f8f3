//! JWT access-token issuing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use marquee_domain::role::Role;

/// Signing and validation parameters for access tokens.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Lifetime of issued tokens in seconds.
    pub ttl_secs: u64,
}

/// Errors returned while issuing or validating a token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("invalid issuer or audience")]
    InvalidClaims,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::Expired => "TOKEN_EXPIRED",
            Self::InvalidClaims => "INVALID_CLAIMS",
            Self::Malformed => "MALFORMED_TOKEN",
            Self::Signing(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        };
        if let Self::Signing(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "token signing failed");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "messages": [{ "type": "error", "description": self.to_string() }],
        });
        (status, axum::Json(body)).into_response()
    }
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | login name |
/// | `uid` | custom | user id the credentials belong to |
/// | `name` | custom | display name |
/// | `role` | custom | [`Role`] variant name |
/// | `iss` / `aud` | `iss` / `aud` | checked against [`JwtSettings`] |
/// | `exp` | `exp` | seconds since epoch |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub uid: i32,
    pub name: String,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign a token for the given subject. Returns the token and its `exp`.
pub fn issue_token(
    settings: &JwtSettings,
    login: &str,
    user_id: i32,
    name: &str,
    role: Role,
) -> Result<(String, u64), AuthError> {
    let exp = now_secs() + settings.ttl_secs;
    let claims = JwtClaims {
        sub: login.to_owned(),
        uid: user_id,
        name: name.to_owned(),
        role,
        iss: settings.issuer.clone(),
        aud: settings.audience.clone(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(AuthError::Signing)?;
    Ok((token, exp))
}

/// Decode and validate a token, returning its claims.
///
/// Validation: HS256, signature, `exp`, `iss` and `aud` all checked.
/// Default leeway = 60s.
pub fn validate_token(token: &str, settings: &JwtSettings) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
    validation.set_issuer(&[&settings.issuer]);
    validation.set_audience(&[&settings.audience]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer
        | jsonwebtoken::errors::ErrorKind::InvalidAudience => AuthError::InvalidClaims,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}
