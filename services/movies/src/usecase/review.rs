use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{MovieRepository, ReviewRepository, UserRepository};
use crate::domain::rules::{ensure_clean_text, ensure_grade};
use crate::domain::types::{Review, ReviewDraft, ReviewFilter};
use crate::error::MoviesServiceError;

/// Rules shared by create and update: grade bounds, clean text, then
/// referential checks against movies and users.
async fn check_review<M: MovieRepository, U: UserRepository>(
    movies: &M,
    users: &U,
    draft: &ReviewDraft,
) -> Result<(), MoviesServiceError> {
    ensure_grade(draft.grade)?;
    ensure_clean_text(draft.description.as_deref())?;
    if movies.find_by_id(draft.movie_id).await?.is_none() {
        return Err(MoviesServiceError::MovieNotFound);
    }
    if users.find_by_id(draft.user_id).await?.is_none() {
        return Err(MoviesServiceError::UserNotFound);
    }
    Ok(())
}

// ── ListReviews ──────────────────────────────────────────────────────────────

pub struct ListReviewsUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> ListReviewsUseCase<R> {
    pub async fn execute(
        &self,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<Page<Review>, MoviesServiceError> {
        self.repo.list(filter, page).await
    }
}

// ── GetReview ────────────────────────────────────────────────────────────────

pub struct GetReviewUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> GetReviewUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Review, MoviesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MoviesServiceError::ReviewNotFound)
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewUseCase<R: ReviewRepository, M: MovieRepository, U: UserRepository> {
    pub reviews: R,
    pub movies: M,
    pub users: U,
}

impl<R: ReviewRepository, M: MovieRepository, U: UserRepository> CreateReviewUseCase<R, M, U> {
    pub async fn execute(&self, draft: ReviewDraft) -> Result<Review, MoviesServiceError> {
        check_review(&self.movies, &self.users, &draft).await?;
        self.reviews.create(&draft).await
    }
}

// ── UpdateReview ─────────────────────────────────────────────────────────────

pub struct UpdateReviewUseCase<R: ReviewRepository, M: MovieRepository, U: UserRepository> {
    pub reviews: R,
    pub movies: M,
    pub users: U,
}

impl<R: ReviewRepository, M: MovieRepository, U: UserRepository> UpdateReviewUseCase<R, M, U> {
    pub async fn execute(&self, id: i32, draft: ReviewDraft) -> Result<Review, MoviesServiceError> {
        if self.reviews.find_by_id(id).await?.is_none() {
            return Err(MoviesServiceError::ReviewNotFound);
        }
        check_review(&self.movies, &self.users, &draft).await?;
        let review = draft.with_id(id);
        self.reviews.update(&review).await?;
        Ok(review)
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), MoviesServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MoviesServiceError::ReviewNotFound)
        }
    }
}
