use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{ActorRepository, MovieRepository};
use crate::domain::types::{Actor, ActorDraft, ActorFilter};
use crate::error::MoviesServiceError;

// ── ListActors ───────────────────────────────────────────────────────────────

pub struct ListActorsUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> ListActorsUseCase<R> {
    pub async fn execute(
        &self,
        filter: &ActorFilter,
        page: PageRequest,
    ) -> Result<Page<Actor>, MoviesServiceError> {
        self.repo.list(filter, page).await
    }
}

// ── GetActor ─────────────────────────────────────────────────────────────────

pub struct GetActorUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> GetActorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Actor, MoviesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MoviesServiceError::ActorNotFound)
    }
}

// ── CreateActor ──────────────────────────────────────────────────────────────

pub struct CreateActorUseCase<A: ActorRepository, M: MovieRepository> {
    pub actors: A,
    pub movies: M,
}

impl<A: ActorRepository, M: MovieRepository> CreateActorUseCase<A, M> {
    pub async fn execute(&self, draft: ActorDraft) -> Result<Actor, MoviesServiceError> {
        if self.movies.find_by_id(draft.movie_id).await?.is_none() {
            return Err(MoviesServiceError::MovieNotFound);
        }
        self.actors.create(&draft).await
    }
}

// ── UpdateActor ──────────────────────────────────────────────────────────────

pub struct UpdateActorUseCase<A: ActorRepository, M: MovieRepository> {
    pub actors: A,
    pub movies: M,
}

impl<A: ActorRepository, M: MovieRepository> UpdateActorUseCase<A, M> {
    pub async fn execute(&self, id: i32, draft: ActorDraft) -> Result<Actor, MoviesServiceError> {
        if self.actors.find_by_id(id).await?.is_none() {
            return Err(MoviesServiceError::ActorNotFound);
        }
        if self.movies.find_by_id(draft.movie_id).await?.is_none() {
            return Err(MoviesServiceError::MovieNotFound);
        }
        let actor = draft.with_id(id);
        self.actors.update(&actor).await?;
        Ok(actor)
    }
}

// ── DeleteActor ──────────────────────────────────────────────────────────────

pub struct DeleteActorUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> DeleteActorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), MoviesServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MoviesServiceError::ActorNotFound)
        }
    }
}
