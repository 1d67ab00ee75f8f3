use marquee_auth_types::token::{JwtSettings, issue_token};
use marquee_domain::role::Role;

use crate::domain::repository::{SecurityRepository, UserRepository};
use crate::domain::types::{Credentials, NewCredentials};
use crate::domain::validation::Registration;
use crate::error::MoviesServiceError;
use crate::infra::password::{hash_password, verify_password};

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<S: SecurityRepository, U: UserRepository> {
    pub securities: S,
    pub users: U,
}

impl<S: SecurityRepository, U: UserRepository> RegisterUseCase<S, U> {
    pub async fn execute(&self, input: Registration) -> Result<Credentials, MoviesServiceError> {
        if self.users.find_by_id(input.user_id).await?.is_none() {
            return Err(MoviesServiceError::UserNotFound);
        }
        if self.securities.find_by_login(&input.login).await?.is_some() {
            return Err(MoviesServiceError::LoginAlreadyExists);
        }
        let credentials = NewCredentials {
            user_id: input.user_id,
            login: input.login,
            password_hash: hash_password(&input.password)?,
            name: input.name,
            role: input.role,
        };
        self.securities.create(&credentials).await
    }
}

// ── IssueToken ───────────────────────────────────────────────────────────────

pub struct IssuedToken {
    pub token: String,
    /// Unix seconds.
    pub expires_at: u64,
    pub login: String,
    pub name: String,
    pub role: Role,
}

pub struct IssueTokenUseCase<S: SecurityRepository> {
    pub securities: S,
    pub jwt: JwtSettings,
}

impl<S: SecurityRepository> IssueTokenUseCase<S> {
    pub async fn execute(
        &self,
        login: &str,
        password: &str,
    ) -> Result<IssuedToken, MoviesServiceError> {
        let credentials = self
            .securities
            .find_by_login(login)
            .await?
            .ok_or(MoviesServiceError::InvalidCredentials)?;
        if !verify_password(password, &credentials.password_hash)? {
            return Err(MoviesServiceError::InvalidCredentials);
        }
        let (token, expires_at) = issue_token(
            &self.jwt,
            &credentials.login,
            credentials.user_id,
            &credentials.name,
            credentials.role,
        )
        .map_err(|e| MoviesServiceError::Internal(e.into()))?;
        tracing::info!(login = %credentials.login, role = %credentials.role, "token issued");
        Ok(IssuedToken {
            token,
            expires_at,
            login: credentials.login,
            name: credentials.name,
            role: credentials.role,
        })
    }
}
