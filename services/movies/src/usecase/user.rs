use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserDraft, UserFilter};
use crate::error::MoviesServiceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, MoviesServiceError> {
        self.repo.list(filter, page).await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<User, MoviesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MoviesServiceError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, draft: UserDraft) -> Result<User, MoviesServiceError> {
        if self.repo.find_by_email(&draft.email).await?.is_some() {
            return Err(MoviesServiceError::EmailAlreadyExists);
        }
        self.repo.create(&draft).await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, id: i32, draft: UserDraft) -> Result<User, MoviesServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(MoviesServiceError::UserNotFound);
        }
        if let Some(owner) = self.repo.find_by_email(&draft.email).await? {
            if owner.id != id {
                return Err(MoviesServiceError::EmailAlreadyExists);
            }
        }
        let user = draft.with_id(id);
        self.repo.update(&user).await?;
        Ok(user)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), MoviesServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MoviesServiceError::UserNotFound)
        }
    }
}
