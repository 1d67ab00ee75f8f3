use crate::domain::repository::ReportRepository;
use crate::domain::rules::ensure_genre;
use crate::domain::types::{
    ActorAge, GenreReview, MovieActorCount, MovieReviewCount, RecentMovieReviewer,
    ReviewCommentCount, UserCommentCount, YoungReviewerReview,
};
use crate::error::MoviesServiceError;

/// Reviewers this age or younger count as young.
pub const YOUNG_REVIEWER_MAX_AGE: i32 = 20;

pub struct ReportUseCase<R: ReportRepository> {
    pub repo: R,
}

impl<R: ReportRepository> ReportUseCase<R> {
    pub async fn most_reviewed_movie(
        &self,
        year: i32,
    ) -> Result<MovieReviewCount, MoviesServiceError> {
        self.repo
            .most_reviewed_movie(year)
            .await?
            .ok_or(MoviesServiceError::ReportNotFound)
    }

    pub async fn movies_with_most_actors(
        &self,
    ) -> Result<Vec<MovieActorCount>, MoviesServiceError> {
        self.repo.movies_with_most_actors().await
    }

    pub async fn youngest_actors(&self) -> Result<Vec<ActorAge>, MoviesServiceError> {
        self.repo.youngest_actors().await
    }

    pub async fn most_commented_reviews(
        &self,
    ) -> Result<Vec<ReviewCommentCount>, MoviesServiceError> {
        self.repo.most_commented_reviews().await
    }

    pub async fn young_reviewers(&self) -> Result<Vec<YoungReviewerReview>, MoviesServiceError> {
        self.repo
            .reviews_by_young_users(YOUNG_REVIEWER_MAX_AGE)
            .await
    }

    pub async fn reviews_for_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<GenreReview>, MoviesServiceError> {
        let genre = ensure_genre(genre)?;
        self.repo.reviews_for_genre(genre.as_str()).await
    }

    pub async fn users_most_commented_in_reviews(
        &self,
    ) -> Result<Vec<UserCommentCount>, MoviesServiceError> {
        self.repo.users_most_commented_in_reviews().await
    }

    pub async fn users_reviewing_recent_movies(
        &self,
    ) -> Result<Vec<RecentMovieReviewer>, MoviesServiceError> {
        self.repo.users_reviewing_recent_movies().await
    }

    pub async fn users_with_most_comments(
        &self,
    ) -> Result<Vec<UserCommentCount>, MoviesServiceError> {
        self.repo.users_with_most_comments().await
    }
}
