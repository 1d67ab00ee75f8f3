//! Read-only report endpoints. List reports come back whole, as one page of
//! the list envelope.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::Serialize;

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::pagination::Page;
use marquee_domain::role::Role;

use crate::domain::types::{
    ActorAge, GenreReview, MovieActorCount, MovieReviewCount, RecentMovieReviewer,
    ReviewCommentCount, UserCommentCount, YoungReviewerReview,
};
use crate::error::MoviesServiceError;
use crate::handlers::{ADMIN_OR_PROVIDER, ADMIN_OR_USER, require_role};
use crate::state::AppState;
use crate::usecase::report::ReportUseCase;

const FOUND: &str = "Report generated";
const EMPTY: &str = "The report has no rows";

fn report_page<T, U: From<T>>(rows: Vec<T>) -> ApiResponse<Vec<U>> {
    ApiResponse::page(Page::single(rows).map(U::from), FOUND, EMPTY)
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MovieReviewCountResponse {
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
    pub total_reviews: i64,
}

impl From<MovieReviewCount> for MovieReviewCountResponse {
    fn from(row: MovieReviewCount) -> Self {
        Self {
            title: row.title,
            description: row.description,
            release_date: row.release_date,
            length: row.length,
            genre: row.genre,
            total_reviews: row.total_reviews,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieActorCountResponse {
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
    pub total_actors: i64,
}

impl From<MovieActorCount> for MovieActorCountResponse {
    fn from(row: MovieActorCount) -> Self {
        Self {
            title: row.title,
            description: row.description,
            release_date: row.release_date,
            length: row.length,
            genre: row.genre,
            total_actors: row.total_actors,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorAgeResponse {
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub age: i32,
}

impl From<ActorAge> for ActorAgeResponse {
    fn from(row: ActorAge) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            is_active: row.is_active,
            age: row.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewCommentCountResponse {
    pub description: Option<String>,
    pub movie_id: Option<i32>,
    pub grade: f32,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date: NaiveDate,
    pub total_comments: i64,
}

impl From<ReviewCommentCount> for ReviewCommentCountResponse {
    fn from(row: ReviewCommentCount) -> Self {
        Self {
            description: row.description,
            movie_id: row.movie_id,
            grade: row.grade,
            date: row.date,
            total_comments: row.total_comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct YoungReviewerResponse {
    pub description: Option<String>,
    pub grade: f32,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date: NaiveDate,
    pub movie_title: String,
    pub user_name: String,
}

impl From<YoungReviewerReview> for YoungReviewerResponse {
    fn from(row: YoungReviewerReview) -> Self {
        Self {
            description: row.description,
            grade: row.grade,
            date: row.date,
            movie_title: row.movie_title,
            user_name: row.user_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreReviewResponse {
    pub description: Option<String>,
    pub grade: f32,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date: NaiveDate,
    pub movie_title: String,
    pub genre: String,
}

impl From<GenreReview> for GenreReviewResponse {
    fn from(row: GenreReview) -> Self {
        Self {
            description: row.description,
            grade: row.grade,
            date: row.date,
            movie_title: row.movie_title,
            genre: row.genre,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserCommentCountResponse {
    pub first_name: String,
    pub last_name: String,
    pub total_comments: i64,
}

impl From<UserCommentCount> for UserCommentCountResponse {
    fn from(row: UserCommentCount) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            total_comments: row.total_comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecentMovieReviewerResponse {
    pub first_name: String,
    pub movie_title: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub release_date: NaiveDate,
}

impl From<RecentMovieReviewer> for RecentMovieReviewerResponse {
    fn from(row: RecentMovieReviewer) -> Self {
        Self {
            first_name: row.first_name,
            movie_title: row.movie_title,
            release_date: row.release_date,
        }
    }
}

// ── GET /api/movies/reports/most-reviewed/{year} ─────────────────────────────

pub async fn most_reviewed_movie(
    identity: Identity,
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<MovieReviewCountResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let Path(year) = year.map_err(|_| MoviesServiceError::InvalidQuery("year"))?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    let row = usecase.most_reviewed_movie(year).await?;
    Ok(ApiResponse::new(row.into()))
}

// ── GET /api/movies/reports/top-by-actors ────────────────────────────────────

pub async fn movies_with_most_actors(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<MovieActorCountResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.movies_with_most_actors().await?))
}

// ── GET /api/actors/reports/youngest ─────────────────────────────────────────

pub async fn youngest_actors(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ActorAgeResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_PROVIDER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.youngest_actors().await?))
}

// ── GET /api/reviews/reports/most-commented ──────────────────────────────────

pub async fn most_commented_reviews(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ReviewCommentCountResponse>>, MoviesServiceError> {
    require_role(&identity, &[Role::Administrator])?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.most_commented_reviews().await?))
}

// ── GET /api/reviews/reports/young-reviewers ─────────────────────────────────

pub async fn young_reviewers(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<YoungReviewerResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.young_reviewers().await?))
}

// ── GET /api/reviews/reports/by-genre/{genre} ────────────────────────────────

pub async fn reviews_for_genre(
    identity: Identity,
    State(state): State<AppState>,
    genre: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse<Vec<GenreReviewResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let Path(genre) = genre.map_err(|_| MoviesServiceError::InvalidQuery("genre"))?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.reviews_for_genre(&genre).await?))
}

// ── GET /api/users/reports/most-commented-reviews ────────────────────────────

pub async fn users_most_commented_in_reviews(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserCommentCountResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.users_most_commented_in_reviews().await?))
}

// ── GET /api/users/reports/recent-movie-reviewers ────────────────────────────

pub async fn users_reviewing_recent_movies(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<RecentMovieReviewerResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.users_reviewing_recent_movies().await?))
}

// ── GET /api/users/reports/most-comments ─────────────────────────────────────

pub async fn users_with_most_comments(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserCommentCountResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_USER)?;
    let uow = state.begin().await?;
    let usecase = ReportUseCase {
        repo: uow.reports(),
    };
    Ok(report_page(usecase.users_with_most_comments().await?))
}
