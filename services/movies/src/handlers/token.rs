use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::validation::LoginInput;
use crate::error::MoviesServiceError;
use crate::handlers::body;
use crate::state::AppState;
use crate::usecase::security::IssueTokenUseCase;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Unix seconds.
    pub access_token_exp: u64,
    pub login: String,
    pub name: String,
    pub role: Role,
}

// ── POST /api/token ──────────────────────────────────────────────────────────

pub async fn create_token(
    State(state): State<AppState>,
    input: Result<Json<LoginInput>, JsonRejection>,
) -> Result<ApiResponse<TokenResponse>, MoviesServiceError> {
    let (login, password) = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = IssueTokenUseCase {
        securities: uow.securities(),
        jwt: state.jwt.clone(),
    };
    let issued = usecase.execute(&login, &password).await?;
    Ok(ApiResponse::new(TokenResponse {
        access_token: issued.token,
        token_type: "Bearer",
        access_token_exp: issued.expires_at,
        login: issued.login,
        name: issued.name,
        role: issued.role,
    }))
}
