#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use marquee_domain::pagination::{Page, PageRequest};
use marquee_movies::domain::repository::{
    ActorRepository, CommentRepository, MovieRepository, ReviewRepository, SecurityRepository,
    UserRepository,
};
use marquee_movies::domain::types::{
    Actor, ActorDraft, ActorFilter, Comment, CommentDraft, CommentFilter, Credentials, Movie,
    MovieDraft, MovieFilter, NewCredentials, Review, ReviewDraft, ReviewFilter, User, UserDraft,
    UserFilter,
};
use marquee_movies::error::MoviesServiceError;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

// ── MockMovieRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockMovieRepo {
    pub movies: Arc<Mutex<Vec<Movie>>>,
}

impl MockMovieRepo {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(Mutex::new(movies)),
        }
    }

    /// Returns a shared handle to the internal list for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Movie>>> {
        Arc::clone(&self.movies)
    }
}

impl MovieRepository for MockMovieRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MoviesServiceError> {
        Ok(self.movies.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MoviesServiceError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.title == title)
            .cloned())
    }

    async fn list(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Page<Movie>, MoviesServiceError> {
        let movies: Vec<Movie> = self
            .movies
            .lock()
            .unwrap()
            .iter()
            .filter(|m| filter.genre.as_ref().is_none_or(|g| &m.genre == g))
            .filter(|m| {
                filter
                    .title
                    .as_ref()
                    .is_none_or(|t| m.title.to_lowercase().contains(&t.to_lowercase()))
            })
            .cloned()
            .collect();
        Ok(Page::paginate(movies, page))
    }

    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MoviesServiceError> {
        let mut movies = self.movies.lock().unwrap();
        let movie = draft.clone().with_id(next_id(movies.len()));
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<(), MoviesServiceError> {
        let mut movies = self.movies.lock().unwrap();
        if let Some(m) = movies.iter_mut().find(|m| m.id == movie.id) {
            *m = movie.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.id != id);
        Ok(movies.len() < before)
    }
}

// ── MockActorRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockActorRepo {
    pub actors: Arc<Mutex<Vec<Actor>>>,
}

impl MockActorRepo {
    pub fn new(actors: Vec<Actor>) -> Self {
        Self {
            actors: Arc::new(Mutex::new(actors)),
        }
    }
}

impl ActorRepository for MockActorRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, MoviesServiceError> {
        Ok(self.actors.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ActorFilter,
        page: PageRequest,
    ) -> Result<Page<Actor>, MoviesServiceError> {
        let actors: Vec<Actor> = self
            .actors
            .lock()
            .unwrap()
            .iter()
            .filter(|a| filter.movie_id.is_none_or(|id| a.movie_id == Some(id)))
            .cloned()
            .collect();
        Ok(Page::paginate(actors, page))
    }

    async fn create(&self, draft: &ActorDraft) -> Result<Actor, MoviesServiceError> {
        let mut actors = self.actors.lock().unwrap();
        let actor = draft.clone().with_id(next_id(actors.len()));
        actors.push(actor.clone());
        Ok(actor)
    }

    async fn update(&self, actor: &Actor) -> Result<(), MoviesServiceError> {
        let mut actors = self.actors.lock().unwrap();
        if let Some(a) = actors.iter_mut().find(|a| a.id == actor.id) {
            *a = actor.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let mut actors = self.actors.lock().unwrap();
        let before = actors.len();
        actors.retain(|a| a.id != id);
        Ok(actors.len() < before)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MoviesServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MoviesServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, MoviesServiceError> {
        let users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| filter.is_active.is_none_or(|active| u.is_active == active))
            .cloned()
            .collect();
        Ok(Page::paginate(users, page))
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, MoviesServiceError> {
        let mut users = self.users.lock().unwrap();
        let user = draft.clone().with_id(next_id(users.len()));
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), MoviesServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == user.id) {
            *u = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

// ── MockReviewRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockReviewRepo {
    pub reviews: Arc<Mutex<Vec<Review>>>,
}

impl MockReviewRepo {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(Mutex::new(reviews)),
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Review>>> {
        Arc::clone(&self.reviews)
    }
}

impl ReviewRepository for MockReviewRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, MoviesServiceError> {
        Ok(self.reviews.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<Page<Review>, MoviesServiceError> {
        let reviews: Vec<Review> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.movie_id.is_none_or(|id| r.movie_id == Some(id)))
            .cloned()
            .collect();
        Ok(Page::paginate(reviews, page))
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review, MoviesServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        let review = draft.clone().with_id(next_id(reviews.len()));
        reviews.push(review.clone());
        Ok(review)
    }

    async fn update(&self, review: &Review) -> Result<(), MoviesServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        if let Some(r) = reviews.iter_mut().find(|r| r.id == review.id) {
            *r = review.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        Ok(reviews.len() < before)
    }
}

// ── MockCommentRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCommentRepo {
    pub comments: Arc<Mutex<Vec<Comment>>>,
}

impl MockCommentRepo {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Arc::new(Mutex::new(comments)),
        }
    }
}

impl CommentRepository for MockCommentRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, MoviesServiceError> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> Result<Page<Comment>, MoviesServiceError> {
        let comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filter.review_id.is_none_or(|id| c.review_id == Some(id)))
            .cloned()
            .collect();
        Ok(Page::paginate(comments, page))
    }

    async fn create(&self, draft: &CommentDraft) -> Result<Comment, MoviesServiceError> {
        let mut comments = self.comments.lock().unwrap();
        let comment = draft.clone().with_id(next_id(comments.len()));
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: &Comment) -> Result<(), MoviesServiceError> {
        let mut comments = self.comments.lock().unwrap();
        if let Some(c) = comments.iter_mut().find(|c| c.id == comment.id) {
            *c = comment.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }
}

// ── MockSecurityRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSecurityRepo {
    pub credentials: Arc<Mutex<Vec<Credentials>>>,
}

impl MockSecurityRepo {
    pub fn new(credentials: Vec<Credentials>) -> Self {
        Self {
            credentials: Arc::new(Mutex::new(credentials)),
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Credentials>>> {
        Arc::clone(&self.credentials)
    }
}

impl SecurityRepository for MockSecurityRepo {
    async fn find_by_login(&self, login: &str) -> Result<Option<Credentials>, MoviesServiceError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.login == login)
            .cloned())
    }

    async fn create(&self, new: &NewCredentials) -> Result<Credentials, MoviesServiceError> {
        let mut credentials = self.credentials.lock().unwrap();
        let created = Credentials {
            id: next_id(credentials.len()),
            user_id: new.user_id,
            login: new.login.clone(),
            password_hash: new.password_hash.clone(),
            name: new.name.clone(),
            role: new.role,
        };
        credentials.push(created.clone());
        Ok(created)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_movie(id: i32, title: &str) -> Movie {
    Movie {
        id,
        title: title.into(),
        description: "Una historia de prueba".into(),
        release_date: date(2020, 5, 1),
        length: "2h 10m".into(),
        genre: "Terror".into(),
    }
}

pub fn test_user(id: i32, email: &str) -> User {
    User {
        id,
        first_name: "Ana".into(),
        last_name: "Lopez".into(),
        email: email.into(),
        date_of_birth: date(2005, 2, 14),
        telephone: None,
        is_active: true,
    }
}

pub fn test_review(id: i32, movie_id: i32, user_id: i32) -> Review {
    Review {
        id,
        user_id: Some(user_id),
        movie_id: Some(movie_id),
        description: Some("Muy buena".into()),
        date: date(2024, 1, 10),
        grade: 8.0,
    }
}

pub fn review_draft(movie_id: i32, user_id: i32, grade: f32, description: &str) -> ReviewDraft {
    ReviewDraft {
        user_id,
        movie_id,
        description: Some(description.into()),
        date: date(2024, 3, 1),
        grade,
    }
}

pub fn comment_draft(review_id: i32, user_id: i32, description: &str) -> CommentDraft {
    CommentDraft {
        review_id,
        user_id,
        description: description.into(),
        date: date(2024, 3, 2),
        is_active: Some(true),
    }
}
