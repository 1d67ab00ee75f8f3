use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::{Comment, CommentFilter};
use crate::domain::validation::CommentInput;
use crate::error::MoviesServiceError;
use crate::handlers::{
    ADMIN_OR_USER, body, ensure_same_id, page_request, path_id, query, query_date, require_role,
};
use crate::state::AppState;
use crate::usecase::comment::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase, ListCommentsUseCase,
    UpdateCommentUseCase,
};

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i32,
    pub review_id: Option<i32>,
    pub user_id: Option<i32>,
    pub description: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date: NaiveDate,
    pub is_active: Option<bool>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            review_id: comment.review_id,
            user_id: comment.user_id,
            description: comment.description,
            date: comment.date,
            is_active: comment.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommentListQuery {
    pub review_id: Option<i32>,
    pub user_id: Option<i32>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
}

// ── GET /api/comments ────────────────────────────────────────────────────────

pub async fn list_comments(
    identity: Identity,
    State(state): State<AppState>,
    params: Result<Query<CommentListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<CommentResponse>>, MoviesServiceError> {
    require_role(&identity, &[Role::Administrator])?;
    let params = query(params)?;
    let filter = CommentFilter {
        review_id: params.review_id,
        user_id: params.user_id,
        date: query_date(params.date.as_deref(), "date")?,
        description: params.description,
    };
    let page = page_request(params.page_size, params.page_number);

    let uow = state.begin().await?;
    let usecase = ListCommentsUseCase {
        repo: uow.comments(),
    };
    let comments = usecase.execute(&filter, page).await?;
    Ok(ApiResponse::page(
        comments.map(CommentResponse::from),
        "Comments retrieved",
        "No comments matched the request",
    ))
}

// ── GET /api/comments/{id} ───────────────────────────────────────────────────

pub async fn get_comment(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<CommentResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::Administrator])?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = GetCommentUseCase {
        repo: uow.comments(),
    };
    let comment = usecase.execute(id).await?;
    Ok(ApiResponse::new(comment.into()))
}

// ── POST /api/comments ───────────────────────────────────────────────────────

pub async fn create_comment(
    identity: Identity,
    State(state): State<AppState>,
    input: Result<Json<CommentInput>, JsonRejection>,
) -> Result<ApiResponse<CommentResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let draft = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = CreateCommentUseCase {
        comments: uow.comments(),
        reviews: uow.reviews(),
        users: uow.users(),
    };
    let comment = usecase.execute(draft).await?;
    uow.commit().await?;

    tracing::info!(comment_id = comment.id, "comment created");
    Ok(ApiResponse::new(comment.into()).with_status(StatusCode::CREATED))
}

// ── PUT /api/comments/{id} ───────────────────────────────────────────────────

pub async fn update_comment(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<CommentInput>, JsonRejection>,
) -> Result<ApiResponse<CommentResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let input = body(input)?;
    ensure_same_id(id, input.id)?;
    let draft = input.validate()?;

    let uow = state.begin().await?;
    let usecase = UpdateCommentUseCase {
        comments: uow.comments(),
        reviews: uow.reviews(),
        users: uow.users(),
    };
    let comment = usecase.execute(id, draft).await?;
    uow.commit().await?;
    Ok(ApiResponse::new(comment.into()))
}

// ── DELETE /api/comments/{id} ────────────────────────────────────────────────

pub async fn delete_comment(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = DeleteCommentUseCase {
        repo: uow.comments(),
    };
    usecase.execute(id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
