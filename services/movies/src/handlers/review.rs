use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::{Review, ReviewFilter};
use crate::domain::validation::ReviewInput;
use crate::error::MoviesServiceError;
use crate::handlers::{
    ADMIN_OR_USER, ALL_ROLES, body, ensure_same_id, page_request, path_id, query, query_date,
    require_role,
};
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListReviewsUseCase,
    UpdateReviewUseCase,
};

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub description: Option<String>,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date: NaiveDate,
    pub grade: f32,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            movie_id: review.movie_id,
            description: review.description,
            date: review.date,
            grade: review.grade,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReviewListQuery {
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub date: Option<String>,
    pub grade: Option<f32>,
    pub description: Option<String>,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
}

// ── GET /api/reviews ─────────────────────────────────────────────────────────

pub async fn list_reviews(
    identity: Identity,
    State(state): State<AppState>,
    params: Result<Query<ReviewListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<ReviewResponse>>, MoviesServiceError> {
    require_role(&identity, ALL_ROLES)?;
    let params = query(params)?;
    let filter = ReviewFilter {
        user_id: params.user_id,
        movie_id: params.movie_id,
        date: query_date(params.date.as_deref(), "date")?,
        grade: params.grade,
        description: params.description,
    };
    let page = page_request(params.page_size, params.page_number);

    let uow = state.begin().await?;
    let usecase = ListReviewsUseCase {
        repo: uow.reviews(),
    };
    let reviews = usecase.execute(&filter, page).await?;
    Ok(ApiResponse::page(
        reviews.map(ReviewResponse::from),
        "Reviews retrieved",
        "No reviews matched the request",
    ))
}

// ── GET /api/reviews/{id} ────────────────────────────────────────────────────

pub async fn get_review(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<ReviewResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = GetReviewUseCase {
        repo: uow.reviews(),
    };
    let review = usecase.execute(id).await?;
    Ok(ApiResponse::new(review.into()))
}

// ── POST /api/reviews ────────────────────────────────────────────────────────

pub async fn create_review(
    identity: Identity,
    State(state): State<AppState>,
    input: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<ApiResponse<ReviewResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::User])?;
    let draft = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = CreateReviewUseCase {
        reviews: uow.reviews(),
        movies: uow.movies(),
        users: uow.users(),
    };
    let review = usecase.execute(draft).await?;
    uow.commit().await?;

    tracing::info!(review_id = review.id, "review created");
    Ok(ApiResponse::new(review.into()).with_status(StatusCode::CREATED))
}

// ── PUT /api/reviews/{id} ────────────────────────────────────────────────────

pub async fn update_review(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<ApiResponse<ReviewResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::User])?;
    let id = path_id(id)?;
    let input = body(input)?;
    ensure_same_id(id, input.id)?;
    let draft = input.validate()?;

    let uow = state.begin().await?;
    let usecase = UpdateReviewUseCase {
        reviews: uow.reviews(),
        movies: uow.movies(),
        users: uow.users(),
    };
    let review = usecase.execute(id, draft).await?;
    uow.commit().await?;
    Ok(ApiResponse::new(review.into()))
}

// ── DELETE /api/reviews/{id} ─────────────────────────────────────────────────

pub async fn delete_review(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = DeleteReviewUseCase {
        repo: uow.reviews(),
    };
    usecase.execute(id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
