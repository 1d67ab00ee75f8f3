use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, Select,
};

use marquee_core::sea_ext::ContainsIgnoreCase;
use marquee_domain::pagination::{Page, PageRequest};
use marquee_domain::role::Role;
use marquee_movies_schema::{actors, comments, movies, reviews, securities, users};

use crate::domain::repository::{
    ActorRepository, CommentRepository, MovieRepository, ReviewRepository, SecurityRepository,
    UserRepository,
};
use crate::domain::types::{
    Actor, ActorDraft, ActorFilter, Comment, CommentDraft, CommentFilter, Credentials, Movie,
    MovieDraft, MovieFilter, NewCredentials, Review, ReviewDraft, ReviewFilter, User, UserDraft,
    UserFilter,
};
use crate::error::MoviesServiceError;

/// Count, then fetch one page of `select`.
async fn fetch_page<E>(
    db: &DatabaseTransaction,
    select: Select<E>,
    page: PageRequest,
    what: &'static str,
) -> Result<Page<E::Model>, MoviesServiceError>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    let page = page.clamped();
    let paginator = select.paginate(db, page.page_size);
    let total = paginator
        .num_items()
        .await
        .with_context(|| format!("count {what}"))?;
    let items = paginator
        .fetch_page(page.page_number - 1)
        .await
        .with_context(|| format!("fetch {what} page"))?;
    Ok(Page::from_parts(items, total, page))
}

// ── Movie repository ─────────────────────────────────────────────────────────

pub struct DbMovieRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl MovieRepository for DbMovieRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MoviesServiceError> {
        let model = movies::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find movie by id")?;
        Ok(model.map(movie_from_model))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MoviesServiceError> {
        let model = movies::Entity::find()
            .filter(movies::Column::Title.eq(title))
            .one(self.db)
            .await
            .context("find movie by title")?;
        Ok(model.map(movie_from_model))
    }

    async fn list(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Page<Movie>, MoviesServiceError> {
        let select = movies::Entity::find()
            .apply_if(filter.title.as_deref(), |q, v| {
                q.contains_ignore_case(movies::Column::Title, v)
            })
            .apply_if(filter.release_date, |q, v| {
                q.filter(movies::Column::ReleaseDate.eq(v))
            })
            .apply_if(filter.length.as_deref(), |q, v| {
                q.filter(movies::Column::Length.eq(v))
            })
            .apply_if(filter.genre.as_deref(), |q, v| {
                q.filter(movies::Column::Genre.eq(v))
            })
            .apply_if(filter.description.as_deref(), |q, v| {
                q.contains_ignore_case(movies::Column::Description, v)
            })
            .order_by_asc(movies::Column::Id);
        Ok(fetch_page(self.db, select, page, "movies")
            .await?
            .map(movie_from_model))
    }

    async fn create(&self, draft: &MovieDraft) -> Result<Movie, MoviesServiceError> {
        let model = movies::ActiveModel {
            id: NotSet,
            title: Set(draft.title.clone()),
            description: Set(draft.description.clone()),
            release_date: Set(draft.release_date),
            length: Set(draft.length.clone()),
            genre: Set(draft.genre.clone()),
        }
        .insert(self.db)
        .await
        .context("create movie")?;
        Ok(movie_from_model(model))
    }

    async fn update(&self, movie: &Movie) -> Result<(), MoviesServiceError> {
        movies::ActiveModel {
            id: Set(movie.id),
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            release_date: Set(movie.release_date),
            length: Set(movie.length.clone()),
            genre: Set(movie.genre.clone()),
        }
        .update(self.db)
        .await
        .context("update movie")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let result = movies::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .context("delete movie")?;
        Ok(result.rows_affected > 0)
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: model.id,
        title: model.title,
        description: model.description,
        release_date: model.release_date,
        length: model.length,
        genre: model.genre,
    }
}

// ── Actor repository ─────────────────────────────────────────────────────────

pub struct DbActorRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl ActorRepository for DbActorRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, MoviesServiceError> {
        let model = actors::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find actor by id")?;
        Ok(model.map(actor_from_model))
    }

    async fn list(
        &self,
        filter: &ActorFilter,
        page: PageRequest,
    ) -> Result<Page<Actor>, MoviesServiceError> {
        let select = actors::Entity::find()
            .apply_if(filter.first_name.as_deref(), |q, v| {
                q.filter(actors::Column::FirstName.eq(v))
            })
            .apply_if(filter.last_name.as_deref(), |q, v| {
                q.filter(actors::Column::LastName.eq(v))
            })
            .apply_if(filter.movie_id, |q, v| {
                q.filter(actors::Column::MovieId.eq(v))
            })
            .apply_if(filter.date_of_birth, |q, v| {
                q.filter(actors::Column::DateOfBirth.eq(v))
            })
            .apply_if(filter.is_active, |q, v| {
                q.filter(actors::Column::IsActive.eq(v))
            })
            .order_by_asc(actors::Column::Id);
        Ok(fetch_page(self.db, select, page, "actors")
            .await?
            .map(actor_from_model))
    }

    async fn create(&self, draft: &ActorDraft) -> Result<Actor, MoviesServiceError> {
        let model = actors::ActiveModel {
            id: NotSet,
            movie_id: Set(Some(draft.movie_id)),
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            email: Set(draft.email.clone()),
            date_of_birth: Set(draft.date_of_birth),
            is_active: Set(draft.is_active),
        }
        .insert(self.db)
        .await
        .context("create actor")?;
        Ok(actor_from_model(model))
    }

    async fn update(&self, actor: &Actor) -> Result<(), MoviesServiceError> {
        actors::ActiveModel {
            id: Set(actor.id),
            movie_id: Set(actor.movie_id),
            first_name: Set(actor.first_name.clone()),
            last_name: Set(actor.last_name.clone()),
            email: Set(actor.email.clone()),
            date_of_birth: Set(actor.date_of_birth),
            is_active: Set(actor.is_active),
        }
        .update(self.db)
        .await
        .context("update actor")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let result = actors::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .context("delete actor")?;
        Ok(result.rows_affected > 0)
    }
}

fn actor_from_model(model: actors::Model) -> Actor {
    Actor {
        id: model.id,
        movie_id: model.movie_id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        date_of_birth: model.date_of_birth,
        is_active: model.is_active,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

pub struct DbUserRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl UserRepository for DbUserRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MoviesServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MoviesServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, MoviesServiceError> {
        let select = users::Entity::find()
            .apply_if(filter.date_of_birth, |q, v| {
                q.filter(users::Column::DateOfBirth.eq(v))
            })
            .apply_if(filter.is_active, |q, v| {
                q.filter(users::Column::IsActive.eq(v))
            })
            .apply_if(filter.first_name.as_deref(), |q, v| {
                q.filter(users::Column::FirstName.eq(v))
            })
            .apply_if(filter.last_name.as_deref(), |q, v| {
                q.filter(users::Column::LastName.eq(v))
            })
            .order_by_asc(users::Column::Id);
        Ok(fetch_page(self.db, select, page, "users")
            .await?
            .map(user_from_model))
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, MoviesServiceError> {
        let model = users::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            email: Set(draft.email.clone()),
            date_of_birth: Set(draft.date_of_birth),
            telephone: Set(draft.telephone.clone()),
            is_active: Set(draft.is_active),
        }
        .insert(self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn update(&self, user: &User) -> Result<(), MoviesServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            date_of_birth: Set(user.date_of_birth),
            telephone: Set(user.telephone.clone()),
            is_active: Set(user.is_active),
        }
        .update(self.db)
        .await
        .context("update user")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        date_of_birth: model.date_of_birth,
        telephone: model.telephone,
        is_active: model.is_active,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

pub struct DbReviewRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl ReviewRepository for DbReviewRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, MoviesServiceError> {
        let model = reviews::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find review by id")?;
        Ok(model.map(review_from_model))
    }

    async fn list(
        &self,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<Page<Review>, MoviesServiceError> {
        let select = reviews::Entity::find()
            .apply_if(filter.user_id, |q, v| {
                q.filter(reviews::Column::UserId.eq(v))
            })
            .apply_if(filter.movie_id, |q, v| {
                q.filter(reviews::Column::MovieId.eq(v))
            })
            .apply_if(filter.date, |q, v| q.filter(reviews::Column::Date.eq(v)))
            .apply_if(filter.grade, |q, v| q.filter(reviews::Column::Grade.eq(v)))
            .apply_if(filter.description.as_deref(), |q, v| {
                q.contains_ignore_case(reviews::Column::Description, v)
            })
            .order_by_asc(reviews::Column::Id);
        Ok(fetch_page(self.db, select, page, "reviews")
            .await?
            .map(review_from_model))
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review, MoviesServiceError> {
        let model = reviews::ActiveModel {
            id: NotSet,
            user_id: Set(Some(draft.user_id)),
            movie_id: Set(Some(draft.movie_id)),
            description: Set(draft.description.clone()),
            date: Set(draft.date),
            grade: Set(draft.grade),
        }
        .insert(self.db)
        .await
        .context("create review")?;
        Ok(review_from_model(model))
    }

    async fn update(&self, review: &Review) -> Result<(), MoviesServiceError> {
        reviews::ActiveModel {
            id: Set(review.id),
            user_id: Set(review.user_id),
            movie_id: Set(review.movie_id),
            description: Set(review.description.clone()),
            date: Set(review.date),
            grade: Set(review.grade),
        }
        .update(self.db)
        .await
        .context("update review")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let result = reviews::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .context("delete review")?;
        Ok(result.rows_affected > 0)
    }
}

fn review_from_model(model: reviews::Model) -> Review {
    Review {
        id: model.id,
        user_id: model.user_id,
        movie_id: model.movie_id,
        description: model.description,
        date: model.date,
        grade: model.grade,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

pub struct DbCommentRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl CommentRepository for DbCommentRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, MoviesServiceError> {
        let model = comments::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn list(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> Result<Page<Comment>, MoviesServiceError> {
        let select = comments::Entity::find()
            .apply_if(filter.review_id, |q, v| {
                q.filter(comments::Column::ReviewId.eq(v))
            })
            .apply_if(filter.user_id, |q, v| {
                q.filter(comments::Column::UserId.eq(v))
            })
            .apply_if(filter.date, |q, v| q.filter(comments::Column::Date.eq(v)))
            .apply_if(filter.description.as_deref(), |q, v| {
                q.contains_ignore_case(comments::Column::Description, v)
            })
            .order_by_asc(comments::Column::Id);
        Ok(fetch_page(self.db, select, page, "comments")
            .await?
            .map(comment_from_model))
    }

    async fn create(&self, draft: &CommentDraft) -> Result<Comment, MoviesServiceError> {
        let model = comments::ActiveModel {
            id: NotSet,
            review_id: Set(Some(draft.review_id)),
            user_id: Set(Some(draft.user_id)),
            description: Set(draft.description.clone()),
            date: Set(draft.date),
            is_active: Set(draft.is_active),
        }
        .insert(self.db)
        .await
        .context("create comment")?;
        Ok(comment_from_model(model))
    }

    async fn update(&self, comment: &Comment) -> Result<(), MoviesServiceError> {
        comments::ActiveModel {
            id: Set(comment.id),
            review_id: Set(comment.review_id),
            user_id: Set(comment.user_id),
            description: Set(comment.description.clone()),
            date: Set(comment.date),
            is_active: Set(comment.is_active),
        }
        .update(self.db)
        .await
        .context("update comment")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, MoviesServiceError> {
        let result = comments::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        id: model.id,
        review_id: model.review_id,
        user_id: model.user_id,
        description: model.description,
        date: model.date,
        is_active: model.is_active,
    }
}

// ── Security repository ──────────────────────────────────────────────────────

pub struct DbSecurityRepository<'a> {
    pub db: &'a DatabaseTransaction,
}

impl SecurityRepository for DbSecurityRepository<'_> {
    async fn find_by_login(&self, login: &str) -> Result<Option<Credentials>, MoviesServiceError> {
        let model = securities::Entity::find()
            .filter(securities::Column::Login.eq(login))
            .one(self.db)
            .await
            .context("find credentials by login")?;
        model.map(credentials_from_model).transpose()
    }

    async fn create(&self, credentials: &NewCredentials) -> Result<Credentials, MoviesServiceError> {
        let model = securities::ActiveModel {
            id: NotSet,
            user_id: Set(credentials.user_id),
            login: Set(credentials.login.clone()),
            password: Set(credentials.password_hash.clone()),
            name: Set(credentials.name.clone()),
            role: Set(credentials.role.as_i16()),
        }
        .insert(self.db)
        .await
        .context("create credentials")?;
        credentials_from_model(model)
    }
}

fn credentials_from_model(model: securities::Model) -> Result<Credentials, MoviesServiceError> {
    let role = Role::from_i16(model.role)
        .ok_or_else(|| anyhow!("unknown role value {} for login {}", model.role, model.login))?;
    Ok(Credentials {
        id: model.id,
        user_id: model.user_id,
        login: model.login,
        password_hash: model.password,
        name: model.name,
        role,
    })
}
