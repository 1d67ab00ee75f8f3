use axum::{Router, routing::get, routing::post};
use tower::ServiceBuilder;

use marquee_core::health::{healthz, readyz};
use marquee_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    actor::{create_actor, delete_actor, get_actor, list_actors, update_actor},
    comment::{create_comment, delete_comment, get_comment, list_comments, update_comment},
    movie::{create_movie, delete_movie, get_movie, list_movies, update_movie},
    report::{
        most_commented_reviews, most_reviewed_movie, movies_with_most_actors, reviews_for_genre,
        users_most_commented_in_reviews, users_reviewing_recent_movies, users_with_most_comments,
        young_reviewers, youngest_actors,
    },
    review::{create_review, delete_review, get_review, list_reviews, update_review},
    security::register,
    token::create_token,
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/token", post(create_token))
        .route("/api/security", post(register))
        // Movies
        .route("/api/movies", get(list_movies).post(create_movie))
        .route(
            "/api/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route(
            "/api/movies/reports/most-reviewed/{year}",
            get(most_reviewed_movie),
        )
        .route(
            "/api/movies/reports/top-by-actors",
            get(movies_with_most_actors),
        )
        // Actors
        .route("/api/actors", get(list_actors).post(create_actor))
        .route(
            "/api/actors/{id}",
            get(get_actor).put(update_actor).delete(delete_actor),
        )
        .route("/api/actors/reports/youngest", get(youngest_actors))
        // Users
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/api/users/reports/most-commented-reviews",
            get(users_most_commented_in_reviews),
        )
        .route(
            "/api/users/reports/recent-movie-reviewers",
            get(users_reviewing_recent_movies),
        )
        .route(
            "/api/users/reports/most-comments",
            get(users_with_most_comments),
        )
        // Reviews
        .route("/api/reviews", get(list_reviews).post(create_review))
        .route(
            "/api/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route(
            "/api/reviews/reports/by-genre/{genre}",
            get(reviews_for_genre),
        )
        .route(
            "/api/reviews/reports/most-commented",
            get(most_commented_reviews),
        )
        .route(
            "/api/reviews/reports/young-reviewers",
            get(young_reviewers),
        )
        // Comments
        .route("/api/comments", get(list_comments).post(create_comment))
        .route(
            "/api/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
