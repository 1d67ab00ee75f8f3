//! Raw-SQL reports. They run on the unit of work's transaction, so they see
//! writes made earlier in the same request.

use anyhow::Context as _;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseTransaction, FromQueryResult, Statement, Value};

use crate::domain::repository::ReportRepository;
use crate::domain::types::{
    ActorAge, GenreReview, MovieActorCount, MovieReviewCount, RecentMovieReviewer,
    ReviewCommentCount, UserCommentCount, YoungReviewerReview,
};
use crate::error::MoviesServiceError;

const MOST_REVIEWED_MOVIE_FOR_YEAR: &str = r#"
    SELECT m.title, m.description, m.release_date, m.length, m.genre,
           COUNT(r.id) AS total_reviews
    FROM movies m
    INNER JOIN reviews r ON r.movie_id = m.id
    WHERE EXTRACT(YEAR FROM m.release_date) = $1
    GROUP BY m.id, m.title, m.description, m.release_date, m.length, m.genre
    ORDER BY COUNT(r.id) DESC, m.id
    LIMIT 1
"#;

const MOVIES_WITH_MOST_ACTORS: &str = r#"
    SELECT m.title, m.description, m.release_date, m.length, m.genre,
           COUNT(a.id) AS total_actors
    FROM movies m
    INNER JOIN actors a ON a.movie_id = m.id
    GROUP BY m.id, m.title, m.description, m.release_date, m.length, m.genre
    ORDER BY COUNT(a.id) DESC, m.id
    LIMIT 10
"#;

const YOUNGEST_ACTORS: &str = r#"
    SELECT a.first_name, a.last_name, a.is_active,
           DATE_PART('year', AGE(a.date_of_birth))::int AS age
    FROM actors a
    ORDER BY a.date_of_birth DESC, a.id
    LIMIT 10
"#;

const MOST_COMMENTED_REVIEWS: &str = r#"
    SELECT r.description, r.movie_id, r.grade, r.date,
           COUNT(c.id) AS total_comments
    FROM reviews r
    INNER JOIN comments c ON c.review_id = r.id
    GROUP BY r.id, r.description, r.movie_id, r.grade, r.date
    ORDER BY COUNT(c.id) DESC, r.id
    LIMIT 10
"#;

const REVIEWS_BY_YOUNG_USERS: &str = r#"
    SELECT r.description, r.grade, r.date,
           m.title AS movie_title, u.first_name AS user_name
    FROM reviews r
    INNER JOIN users u ON u.id = r.user_id
    INNER JOIN movies m ON m.id = r.movie_id
    WHERE DATE_PART('year', AGE(u.date_of_birth)) <= $1
    ORDER BY r.date DESC, r.id
"#;

const REVIEWS_FOR_GENRE: &str = r#"
    SELECT r.description, r.grade, r.date,
           m.title AS movie_title, m.genre
    FROM reviews r
    INNER JOIN movies m ON m.id = r.movie_id
    WHERE m.genre = $1
    ORDER BY r.date DESC, r.id
"#;

const USERS_MOST_COMMENTED_IN_REVIEWS: &str = r#"
    SELECT u.first_name, u.last_name, COUNT(c.id) AS total_comments
    FROM users u
    INNER JOIN reviews r ON r.user_id = u.id
    INNER JOIN comments c ON c.review_id = r.id
    GROUP BY u.id, u.first_name, u.last_name
    ORDER BY COUNT(c.id) DESC, u.id
    LIMIT 10
"#;

const USERS_REVIEWING_RECENT_MOVIES: &str = r#"
    SELECT DISTINCT u.first_name, m.title AS movie_title, m.release_date
    FROM users u
    INNER JOIN reviews r ON r.user_id = u.id
    INNER JOIN movies m ON m.id = r.movie_id
    WHERE m.release_date >= CURRENT_DATE - INTERVAL '1 year'
    ORDER BY m.release_date DESC
"#;

const USERS_WITH_MOST_COMMENTS: &str = r#"
    SELECT u.first_name, u.last_name, COUNT(c.id) AS total_comments
    FROM users u
    INNER JOIN comments c ON c.user_id = u.id
    GROUP BY u.id, u.first_name, u.last_name
    ORDER BY COUNT(c.id) DESC, u.id
    LIMIT 10
"#;

// ── Row shapes ───────────────────────────────────────────────────────────────

#[derive(FromQueryResult)]
struct MovieReviewCountRow {
    title: String,
    description: String,
    release_date: NaiveDate,
    length: String,
    genre: String,
    total_reviews: i64,
}

#[derive(FromQueryResult)]
struct MovieActorCountRow {
    title: String,
    description: String,
    release_date: NaiveDate,
    length: String,
    genre: String,
    total_actors: i64,
}

#[derive(FromQueryResult)]
struct ActorAgeRow {
    first_name: String,
    last_name: String,
    is_active: bool,
    age: i32,
}

#[derive(FromQueryResult)]
struct ReviewCommentCountRow {
    description: Option<String>,
    movie_id: Option<i32>,
    grade: f32,
    date: NaiveDate,
    total_comments: i64,
}

#[derive(FromQueryResult)]
struct YoungReviewerRow {
    description: Option<String>,
    grade: f32,
    date: NaiveDate,
    movie_title: String,
    user_name: String,
}

#[derive(FromQueryResult)]
struct GenreReviewRow {
    description: Option<String>,
    grade: f32,
    date: NaiveDate,
    movie_title: String,
    genre: String,
}

#[derive(FromQueryResult)]
struct UserCommentCountRow {
    first_name: String,
    last_name: String,
    total_comments: i64,
}

#[derive(FromQueryResult)]
struct RecentMovieReviewerRow {
    first_name: String,
    movie_title: String,
    release_date: NaiveDate,
}

impl From<UserCommentCountRow> for UserCommentCount {
    fn from(row: UserCommentCountRow) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            total_comments: row.total_comments,
        }
    }
}

// ── Report repository ────────────────────────────────────────────────────────

pub struct DbReportRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl DbReportRepository<'_> {
    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    async fn rows<T: FromQueryResult>(
        &self,
        sql: &str,
        values: Vec<Value>,
        what: &'static str,
    ) -> Result<Vec<T>, MoviesServiceError> {
        let rows = T::find_by_statement(self.statement(sql, values))
            .all(self.db)
            .await
            .context(what)?;
        Ok(rows)
    }
}

impl ReportRepository for DbReportRepository<'_> {
    async fn most_reviewed_movie(
        &self,
        year: i32,
    ) -> Result<Option<MovieReviewCount>, MoviesServiceError> {
        let row = MovieReviewCountRow::find_by_statement(
            self.statement(MOST_REVIEWED_MOVIE_FOR_YEAR, vec![year.into()]),
        )
        .one(self.db)
        .await
        .context("most reviewed movie for year")?;
        Ok(row.map(|row| MovieReviewCount {
            title: row.title,
            description: row.description,
            release_date: row.release_date,
            length: row.length,
            genre: row.genre,
            total_reviews: row.total_reviews,
        }))
    }

    async fn movies_with_most_actors(&self) -> Result<Vec<MovieActorCount>, MoviesServiceError> {
        let rows: Vec<MovieActorCountRow> = self
            .rows(MOVIES_WITH_MOST_ACTORS, vec![], "movies with most actors")
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| MovieActorCount {
                title: row.title,
                description: row.description,
                release_date: row.release_date,
                length: row.length,
                genre: row.genre,
                total_actors: row.total_actors,
            })
            .collect())
    }

    async fn youngest_actors(&self) -> Result<Vec<ActorAge>, MoviesServiceError> {
        let rows: Vec<ActorAgeRow> = self
            .rows(YOUNGEST_ACTORS, vec![], "youngest actors")
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| ActorAge {
                first_name: row.first_name,
                last_name: row.last_name,
                is_active: row.is_active,
                age: row.age,
            })
            .collect())
    }

    async fn most_commented_reviews(&self) -> Result<Vec<ReviewCommentCount>, MoviesServiceError> {
        let rows: Vec<ReviewCommentCountRow> = self
            .rows(MOST_COMMENTED_REVIEWS, vec![], "most commented reviews")
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| ReviewCommentCount {
                description: row.description,
                movie_id: row.movie_id,
                grade: row.grade,
                date: row.date,
                total_comments: row.total_comments,
            })
            .collect())
    }

    async fn reviews_by_young_users(
        &self,
        max_age: i32,
    ) -> Result<Vec<YoungReviewerReview>, MoviesServiceError> {
        let rows: Vec<YoungReviewerRow> = self
            .rows(
                REVIEWS_BY_YOUNG_USERS,
                vec![max_age.into()],
                "reviews by young users",
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| YoungReviewerReview {
                description: row.description,
                grade: row.grade,
                date: row.date,
                movie_title: row.movie_title,
                user_name: row.user_name,
            })
            .collect())
    }

    async fn reviews_for_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<GenreReview>, MoviesServiceError> {
        let rows: Vec<GenreReviewRow> = self
            .rows(REVIEWS_FOR_GENRE, vec![genre.into()], "reviews for genre")
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| GenreReview {
                description: row.description,
                grade: row.grade,
                date: row.date,
                movie_title: row.movie_title,
                genre: row.genre,
            })
            .collect())
    }

    async fn users_most_commented_in_reviews(
        &self,
    ) -> Result<Vec<UserCommentCount>, MoviesServiceError> {
        let rows: Vec<UserCommentCountRow> = self
            .rows(
                USERS_MOST_COMMENTED_IN_REVIEWS,
                vec![],
                "users most commented in their reviews",
            )
            .await?;
        Ok(rows.into_iter().map(UserCommentCount::from).collect())
    }

    async fn users_reviewing_recent_movies(
        &self,
    ) -> Result<Vec<RecentMovieReviewer>, MoviesServiceError> {
        let rows: Vec<RecentMovieReviewerRow> = self
            .rows(
                USERS_REVIEWING_RECENT_MOVIES,
                vec![],
                "users reviewing recent movies",
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| RecentMovieReviewer {
                first_name: row.first_name,
                movie_title: row.movie_title,
                release_date: row.release_date,
            })
            .collect())
    }

    async fn users_with_most_comments(&self) -> Result<Vec<UserCommentCount>, MoviesServiceError> {
        let rows: Vec<UserCommentCountRow> = self
            .rows(USERS_WITH_MOST_COMMENTS, vec![], "users with most comments")
            .await?;
        Ok(rows.into_iter().map(UserCommentCount::from).collect())
    }
}
