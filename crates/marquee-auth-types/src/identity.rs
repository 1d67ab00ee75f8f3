//! Bearer-token identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::request::Parts;

use marquee_domain::role::Role;

use crate::token::{AuthError, JwtSettings, validate_token};

/// Caller identity taken from a validated `Authorization: Bearer <jwt>` header.
///
/// Rejects with 401 when the header is absent or the token fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub login: String,
    pub user_id: i32,
    pub name: String,
    pub role: Role,
}

impl Identity {
    /// Whether the caller holds one of `roles`.
    pub fn has_any(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

impl<S> FromRequestParts<S> for Identity
where
    JwtSettings: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; an `async fn`
    // would capture `parts` and `state` (E0195). Validate synchronously and
    // return a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let settings = JwtSettings::from_ref(state);
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)
            .and_then(|auth| validate_token(auth.token(), &settings))
            .map(|claims| Self {
                login: claims.sub,
                user_id: claims.uid,
                name: claims.name,
                role: claims.role,
            });

        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::issue_token;
    use http::Request;

    fn settings() -> JwtSettings {
        JwtSettings {
            secret: "identity-test-secret".into(),
            issuer: "marquee".into(),
            audience: "marquee-clients".into(),
            ttl_secs: 600,
        }
    }

    async fn extract(header: Option<String>) -> Result<Identity, AuthError> {
        let mut builder = Request::builder().method("GET").uri("/test");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        let (mut parts, _body) = builder.body(()).unwrap().into_parts();
        Identity::from_request_parts(&mut parts, &settings()).await
    }

    #[tokio::test]
    async fn should_extract_identity_from_valid_bearer() {
        let (token, _) = issue_token(&settings(), "bob", 3, "Bob", Role::Administrator).unwrap();
        let identity = extract(Some(format!("Bearer {token}"))).await.unwrap();
        assert_eq!(identity.login, "bob");
        assert_eq!(identity.user_id, 3);
        assert_eq!(identity.role, Role::Administrator);
    }

    #[tokio::test]
    async fn should_reject_missing_header() {
        let err = extract(None).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn should_reject_non_bearer_scheme() {
        let err = extract(Some("Basic Ym9iOnNlY3JldA==".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn should_reject_garbage_token() {
        let err = extract(Some("Bearer garbage".into())).await.unwrap_err();
        assert!(matches!(err, AuthError::Malformed));
    }

    #[test]
    fn should_match_any_of_the_allowed_roles() {
        let identity = Identity {
            login: "p".into(),
            user_id: 1,
            name: "P".into(),
            role: Role::Provider,
        };
        assert!(identity.has_any(&[Role::Administrator, Role::Provider]));
        assert!(!identity.has_any(&[Role::User]));
    }
}
