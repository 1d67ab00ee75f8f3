use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::repository::MovieRepository;
use crate::domain::rules::ensure_genre;
use crate::domain::types::{Movie, MovieDraft, MovieFilter};
use crate::error::MoviesServiceError;

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> ListMoviesUseCase<R> {
    pub async fn execute(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Page<Movie>, MoviesServiceError> {
        self.repo.list(filter, page).await
    }
}

// ── GetMovie ─────────────────────────────────────────────────────────────────

pub struct GetMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> GetMovieUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Movie, MoviesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MoviesServiceError::MovieNotFound)
    }
}

// ── CreateMovie ──────────────────────────────────────────────────────────────

pub struct CreateMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> CreateMovieUseCase<R> {
    pub async fn execute(&self, draft: MovieDraft) -> Result<Movie, MoviesServiceError> {
        ensure_genre(&draft.genre)?;
        if self.repo.find_by_title(&draft.title).await?.is_some() {
            return Err(MoviesServiceError::DuplicateTitle);
        }
        self.repo.create(&draft).await
    }
}

// ── UpdateMovie ──────────────────────────────────────────────────────────────

pub struct UpdateMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> UpdateMovieUseCase<R> {
    pub async fn execute(&self, id: i32, draft: MovieDraft) -> Result<Movie, MoviesServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(MoviesServiceError::MovieNotFound);
        }
        ensure_genre(&draft.genre)?;
        // Keeping its own title is not a duplicate.
        if let Some(other) = self.repo.find_by_title(&draft.title).await? {
            if other.id != id {
                return Err(MoviesServiceError::DuplicateTitle);
            }
        }
        let movie = draft.with_id(id);
        self.repo.update(&movie).await?;
        Ok(movie)
    }
}

// ── DeleteMovie ──────────────────────────────────────────────────────────────

pub struct DeleteMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> DeleteMovieUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), MoviesServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MoviesServiceError::MovieNotFound)
        }
    }
}
