use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marquee_auth_types::identity::Identity;
use marquee_core::envelope::ApiResponse;
use marquee_domain::role::Role;

use crate::domain::types::{Actor, ActorFilter};
use crate::domain::validation::ActorInput;
use crate::error::MoviesServiceError;
use crate::handlers::{
    ADMIN_OR_PROVIDER, body, ensure_same_id, page_request, path_id, query, query_date,
    require_role,
};
use crate::state::AppState;
use crate::usecase::actor::{
    CreateActorUseCase, DeleteActorUseCase, GetActorUseCase, ListActorsUseCase,
    UpdateActorUseCase,
};

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub id: i32,
    pub movie_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "marquee_core::serde::to_dmy")]
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

impl From<Actor> for ActorResponse {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            movie_id: actor.movie_id,
            first_name: actor.first_name,
            last_name: actor.last_name,
            email: actor.email,
            date_of_birth: actor.date_of_birth,
            is_active: actor.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActorListQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub movie_id: Option<i32>,
    pub date_of_birth: Option<String>,
    pub is_active: Option<bool>,
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
}

// ── GET /api/actors ──────────────────────────────────────────────────────────

pub async fn list_actors(
    identity: Identity,
    State(state): State<AppState>,
    params: Result<Query<ActorListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<ActorResponse>>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_PROVIDER)?;
    let params = query(params)?;
    let filter = ActorFilter {
        first_name: params.first_name,
        last_name: params.last_name,
        movie_id: params.movie_id,
        date_of_birth: query_date(params.date_of_birth.as_deref(), "date-of-birth")?,
        is_active: params.is_active,
    };
    let page = page_request(params.page_size, params.page_number);

    let uow = state.begin().await?;
    let usecase = ListActorsUseCase { repo: uow.actors() };
    let actors = usecase.execute(&filter, page).await?;
    Ok(ApiResponse::page(
        actors.map(ActorResponse::from),
        "Actors retrieved",
        "No actors matched the request",
    ))
}

// ── GET /api/actors/{id} ─────────────────────────────────────────────────────

pub async fn get_actor(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse<ActorResponse>, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_PROVIDER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = GetActorUseCase { repo: uow.actors() };
    let actor = usecase.execute(id).await?;
    Ok(ApiResponse::new(actor.into()))
}

// ── POST /api/actors ─────────────────────────────────────────────────────────

pub async fn create_actor(
    identity: Identity,
    State(state): State<AppState>,
    input: Result<Json<ActorInput>, JsonRejection>,
) -> Result<ApiResponse<ActorResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::Provider])?;
    let draft = body(input)?.validate()?;

    let uow = state.begin().await?;
    let usecase = CreateActorUseCase {
        actors: uow.actors(),
        movies: uow.movies(),
    };
    let actor = usecase.execute(draft).await?;
    uow.commit().await?;

    tracing::info!(actor_id = actor.id, "actor created");
    Ok(ApiResponse::new(actor.into()).with_status(StatusCode::CREATED))
}

// ── PUT /api/actors/{id} ─────────────────────────────────────────────────────

pub async fn update_actor(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<ActorInput>, JsonRejection>,
) -> Result<ApiResponse<ActorResponse>, MoviesServiceError> {
    require_role(&identity, &[Role::Provider])?;
    let id = path_id(id)?;
    let input = body(input)?;
    ensure_same_id(id, input.id)?;
    let draft = input.validate()?;

    let uow = state.begin().await?;
    let usecase = UpdateActorUseCase {
        actors: uow.actors(),
        movies: uow.movies(),
    };
    let actor = usecase.execute(id, draft).await?;
    uow.commit().await?;
    Ok(ApiResponse::new(actor.into()))
}

// ── DELETE /api/actors/{id} ──────────────────────────────────────────────────

pub async fn delete_actor(
    identity: Identity,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, MoviesServiceError> {
    require_role(&identity, ADMIN_OR_PROVIDER)?;
    let id = path_id(id)?;
    let uow = state.begin().await?;
    let usecase = DeleteActorUseCase { repo: uow.actors() };
    usecase.execute(id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
