use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::{User, UserFilter};
use crate::domain::validation::UserInput;
use crate::error::MoviesServiceError;
use crate::handlers::{
    ADMIN_OR_USER, body, ensure_same_id, page_request, path_id, query, query_date, require_role,
};
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date_of_birth: NaiveDate,
    pub telephone: Option<String>,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            telephone: user.telephone,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserListQuery {
    pub date_of_birth: Option<String>,
    pub is_active: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
}

// ── GET /api/users ───────────────────────────────────────────────────────────

pub async fn list_users(
    identity: Identity,
    State(state): State<AppState>,
    params: Result<Query<UserListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<UserResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let params = query(params)?;
    let filter = UserFilter {
        date_of_birth: query_date(params.date_of_birth.as_deref(), "date-of-birth")?,
        is_active: params.is_active,
        first_name: params.first_name,
        last_name: params.last_name,
    };
    let page = page_request(params.page_size, params.page_number);

    let uow = state.begin().await?;
    let usecase = ListUsersUseCase { repo: uow.users() };
    let users = usecase.execute(&filter, page).await?;
    Ok(ApiResponse::page(
        users.map(UserResponse::from),
        "Users retrieved",
        "No users matched the request",
    ))
}

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<UserResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = GetUserUseCase { repo: uow.users() };
    let user = usecase.execute(id).await?;
    Ok(ApiResponse::new(user.into()))
}

// ── POST /api/users (anonymous sign-up) ──────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    input: Result<Json<UserInput>, JsonRejection>,
) -> Result<ApiResponse<UserResponse>, MoviesServiceError> {
    let draft = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = CreateUserUseCase { repo: uow.users() };
    let user = usecase.execute(draft).await?;
    uow.commit().await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(ApiResponse::new(user.into()).with_status(StatusCode::CREATED))
}

// ── PUT /api/users/{id} ──────────────────────────────────────────────────────

pub async fn update_user(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<UserInput>, JsonRejection>,
) -> Result<ApiResponse<UserResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::User])?;
    let id = path_id(id)?;
    let input = body(input)?;
    ensure_same_id(id, input.id)?;
    let draft = input.validate()?;

    let uow = state.begin().await?;
    let usecase = UpdateUserUseCase { repo: uow.users() };
    let user = usecase.execute(id, draft).await?;
    uow.commit().await?;
    Ok(ApiResponse::new(user.into()))
}

// ── DELETE /api/users/{id} ───────────────────────────────────────────────────

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = DeleteUserUseCase { repo: uow.users() };
    usecase.execute(id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
