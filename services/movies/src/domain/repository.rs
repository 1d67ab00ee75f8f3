#![allow(async_fn_in_trait)]

use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::types::{
    Actor, ActorAge, ActorDraft, ActorFilter, Comment, CommentDraft, CommentFilter, Credentials,
    GenreReview, Movie, MovieActorCount, MovieDraft, MovieFilter, MovieReviewCount,
    NewCredentials, RecentMovieReviewer, Review, ReviewCommentCount, ReviewDraft, ReviewFilter,
    User, UserCommentCount, UserDraft, UserFilter, YoungReviewerReview,
};
use crate::error::MoviesServiceError;

pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MoviesServiceError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MoviesServiceError>;
    async fn list(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Page<Movie>, MoviesServiceError>;
    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MoviesServiceError>;
    async fn update(&self, movie: &Movie) -> Result<(), MoviesServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError>;
}

pub trait ActorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, MoviesServiceError>;
    async fn list(
        &self,
        filter: &ActorFilter,
        page: PageRequest,
    ) -> Result<Page<Actor>, MoviesServiceError>;
    async fn create(&self, draft: &ActorDraft) -> Result<Actor, MoviesServiceError>;
    async fn update(&self, actor: &Actor) -> Result<(), MoviesServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError>;
}

pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MoviesServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MoviesServiceError>;
    async fn list(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, MoviesServiceError>;
    async fn create(&self, draft: &UserDraft) -> Result<User, MoviesServiceError>;
    async fn update(&self, user: &User) -> Result<(), MoviesServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError>;
}

pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, MoviesServiceError>;
    async fn list(
        &self,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<Page<Review>, MoviesServiceError>;
    async fn create(&self, draft: &ReviewDraft) -> Result<Review, MoviesServiceError>;
    async fn update(&self, review: &Review) -> Result<(), MoviesServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError>;
}

pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, MoviesServiceError>;
    async fn list(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> Result<Page<Comment>, MoviesServiceError>;
    async fn create(&self, draft: &CommentDraft) -> Result<Comment, MoviesServiceError>;
    async fn update(&self, comment: &Comment) -> Result<(), MoviesServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError>;
}

/// Login credentials.
pub trait SecurityRepository: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<Credentials>, MoviesServiceError>;
    async fn create(&self, credentials: &NewCredentials) -> Result<Credentials, MoviesServiceError>;
}

/// Read-only aggregate queries backed by raw SQL.
pub trait ReportRepository: Send + Sync {
    async fn most_reviewed_movie(
        &self,
        year: i32,
    ) -> Result<Option<MovieReviewCount>, MoviesServiceError>;
    async fn movies_with_most_actors(&self) -> Result<Vec<MovieActorCount>, MoviesServiceError>;
    async fn youngest_actors(&self) -> Result<Vec<ActorAge>, MoviesServiceError>;
    async fn most_commented_reviews(&self) -> Result<Vec<ReviewCommentCount>, MoviesServiceError>;
    async fn reviews_by_young_users(
        &self,
        max_age: i32,
    ) -> Result<Vec<YoungReviewerReview>, MoviesServiceError>;
    async fn reviews_for_genre(&self, genre: &str)
    -> Result<Vec<GenreReview>, MoviesServiceError>;
    async fn users_most_commented_in_reviews(
        &self,
    ) -> Result<Vec<UserCommentCount>, MoviesServiceError>;
    async fn users_reviewing_recent_movies(
        &self,
    ) -> Result<Vec<RecentMovieReviewer>, MoviesServiceError>;
    async fn users_with_most_comments(&self) -> Result<Vec<UserCommentCount>, MoviesServiceError>;
}
