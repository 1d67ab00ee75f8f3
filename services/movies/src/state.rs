use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use marquee_auth_types::JwtSettings;

use crate::error::MoviesServiceError;
use crate::infra::uow::DbUnitOfWork;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt: JwtSettings,
}

impl AppState {
    /// Open the request's unit of work.
    pub async fn begin(&self) -> Result<DbUnitOfWork, MoviesServiceError> {
        DbUnitOfWork::begin(&self.db).await
    }
}

impl FromRef<AppState> for JwtSettings {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}

impl FromRef<AppState> for Arc<DatabaseConnection> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.db)
    }
}
