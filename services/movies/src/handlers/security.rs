use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;

use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::Credentials;
use crate::domain::validation::RegistrationInput;
use crate::error::MoviesServiceError;
use crate::handlers::body;
use crate::state::AppState;
use crate::usecase::security::RegisterUseCase;

/// Registered credentials. The password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct SecurityResponse {
    pub id: i32,
    pub user_id: i32,
    pub login: String,
    pub name: String,
    pub role: Role,
}

impl From<Credentials> for SecurityResponse {
    fn from(credentials: Credentials) -> Self {
        Self {
            id: credentials.id,
            user_id: credentials.user_id,
            login: credentials.login,
            name: credentials.name,
            role: credentials.role,
        }
    }
}

// ── POST /api/security ───────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    input: Result<Json<RegistrationInput>, JsonRejection>,
) -> Result<ApiResponse<SecurityResponse>, MoviesServiceError> {
    let registration = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = RegisterUseCase {
        securities: uow.securities(),
        users: uow.users(),
    };
    let credentials = usecase.execute(registration).await?;
    uow.commit().await?;

    tracing::info!(login = %credentials.login, role = %credentials.role, "credentials registered");
    Ok(ApiResponse::new(credentials.into()).with_status(StatusCode::CREATED))
}
