use chrono::NaiveDate;

use marquee_domain::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
}

/// Writable movie fields, shared by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
}

impl MovieDraft {
    pub fn with_id(self, id: i32) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            length: self.length,
            genre: self.genre,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub movie_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorDraft {
    pub movie_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

impl ActorDraft {
    pub fn with_id(self, id: i32) -> Actor {
        Actor {
            id,
            movie_id: Some(self.movie_id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActorFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub movie_id: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// A reviewer profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub telephone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub telephone: Option<String>,
    pub is_active: bool,
}

impl UserDraft {
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            telephone: self.telephone,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub grade: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub user_id: i32,
    pub movie_id: i32,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub grade: f32,
}

impl ReviewDraft {
    pub fn with_id(self, id: i32) -> Review {
        Review {
            id,
            user_id: Some(self.user_id),
            movie_id: Some(self.movie_id),
            description: self.description,
            date: self.date,
            grade: self.grade,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub grade: Option<f32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub review_id: Option<i32>,
    pub user_id: Option<i32>,
    pub description: String,
    pub date: NaiveDate,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub review_id: i32,
    pub user_id: i32,
    pub description: String,
    pub date: NaiveDate,
    pub is_active: Option<bool>,
}

impl CommentDraft {
    pub fn with_id(self, id: i32) -> Comment {
        Comment {
            id,
            review_id: Some(self.review_id),
            user_id: Some(self.user_id),
            description: self.description,
            date: self.date,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub review_id: Option<i32>,
    pub user_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Stored login credentials. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id: i32,
    pub user_id: i32,
    pub login: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCredentials {
    pub user_id: i32,
    pub login: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

// ── Report rows ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieReviewCount {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
    pub total_reviews: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieActorCount {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub length: String,
    pub genre: String,
    pub total_actors: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorAge {
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCommentCount {
    pub description: Option<String>,
    pub movie_id: Option<i32>,
    pub grade: f32,
    pub date: NaiveDate,
    pub total_comments: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YoungReviewerReview {
    pub description: Option<String>,
    pub grade: f32,
    pub date: NaiveDate,
    pub movie_title: String,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreReview {
    pub description: Option<String>,
    pub grade: f32,
    pub date: NaiveDate,
    pub movie_title: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommentCount {
    pub first_name: String,
    pub last_name: String,
    pub total_comments: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentMovieReviewer {
    pub first_name: String,
    pub movie_title: String,
    pub release_date: NaiveDate,
}
