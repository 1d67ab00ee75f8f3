use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::{Movie, MovieFilter};
use crate::domain::validation::MovieInput;
use crate::error::MoviesServiceError;
use crate::handlers::{
    ADMIN_OR_PROVIDER, ALL_ROLES, body, ensure_same_id, page_request, path_id, query,
    query_date, require_role,
};
use crate::state::AppState;
use crate::usecase::movie::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
    UpdateMovieUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            release_date: movie.release_date,
            length: movie.length,
            genre: movie.genre,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MovieListQuery {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
}

// ── GET /api/movies ──────────────────────────────────────────────────────────

pub async fn list_movies(
    identity: Identity,
    State(state): State<AppState>,
    params: Result<Query<MovieListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<MovieResponse>>, MoviesServiceError> {
    require_role(&identity, ALL_ROLES)?;
    let params = query(params)?;
    let filter = MovieFilter {
        title: params.title,
        release_date: query_date(params.release_date.as_deref(), "release-date")?,
        length: params.length,
        genre: params.genre,
        description: params.description,
    };
    let page = page_request(params.page_size, params.page_number);

    let uow = state.begin().await?;
    let usecase = ListMoviesUseCase { repo: uow.movies() };
    let movies = usecase.execute(&filter, page).await?;
    Ok(ApiResponse::page(
        movies.map(MovieResponse::from),
        "Movies retrieved",
        "No movies matched the request",
    ))
}

// ── GET /api/movies/{id} ─────────────────────────────────────────────────────

pub async fn get_movie(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<MovieResponse>, MoviesServiceError> {
    require_role(&identity, ALL_ROLES)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = GetMovieUseCase { repo: uow.movies() };
    let movie = usecase.execute(id).await?;
    Ok(ApiResponse::new(movie.into()))
}

// ── POST /api/movies ─────────────────────────────────────────────────────────

pub async fn create_movie(
    identity: Identity,
    State(state): State<AppState>,
    input: Result<Json<MovieInput>, JsonRejection>,
) -> Result<ApiResponse<MovieResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::Provider])?;
    let draft = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = CreateMovieUseCase { repo: uow.movies() };
    let movie = usecase.execute(draft).await?;
    uow.commit().await?;

    tracing::info!(movie_id = movie.id, "movie created");
    Ok(ApiResponse::new(movie.into()).with_status(StatusCode::CREATED))
}

// ── PUT /api/movies/{id} ─────────────────────────────────────────────────────

pub async fn update_movie(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<MovieInput>, JsonRejection>,
) -> Result<ApiResponse<MovieResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::Provider])?;
    let id = path_id(id)?;
    let input = body(input)?;
    ensure_same_id(id, input.id)?;
    let draft = input.validate()?;

    let uow = state.begin().await?;
    let usecase = UpdateMovieUseCase { repo: uow.movies() };
    let movie = usecase.execute(id, draft).await?;
    uow.commit().await?;
    Ok(ApiResponse::new(movie.into()))
}

// ── DELETE /api/movies/{id} ──────────────────────────────────────────────────

pub async fn delete_movie(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_PROVIDER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = DeleteMovieUseCase { repo: uow.movies() };
    usecase.execute(id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
