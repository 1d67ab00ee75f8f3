use marquee_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{CommentRepository, ReviewRepository, UserRepository};
use crate::domain::rules::ensure_clean_text;
use crate::domain::types::{Comment, CommentDraft, CommentFilter};
use crate::error::MoviesServiceError;

async fn check_comment<R: ReviewRepository, U: UserRepository>(
    reviews: &R,
    users: &U,
    draft: &CommentDraft,
) -> Result<(), MoviesServiceError> {
    ensure_clean_text(Some(&draft.description))?;
    if reviews.find_by_id(draft.review_id).await?.is_none() {
        return Err(MoviesServiceError::ReviewNotFound);
    }
    if users.find_by_id(draft.user_id).await?.is_none() {
        return Err(MoviesServiceError::UserNotFound);
    }
    Ok(())
}

// ── ListComments ─────────────────────────────────────────────────────────────

pub struct ListCommentsUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> ListCommentsUseCase<R> {
    pub async fn execute(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> Result<Page<Comment>, MoviesServiceError> {
        self.repo.list(filter, page).await
    }
}

// ── GetComment ───────────────────────────────────────────────────────────────

pub struct GetCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> GetCommentUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Comment, MoviesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(MoviesServiceError::CommentNotFound)
    }
}

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentUseCase<C: CommentRepository, R: ReviewRepository, U: UserRepository> {
    pub comments: C,
    pub reviews: R,
    pub users: U,
}

impl<C: CommentRepository, R: ReviewRepository, U: UserRepository> CreateCommentUseCase<C, R, U> {
    pub async fn execute(&self, draft: CommentDraft) -> Result<Comment, MoviesServiceError> {
        check_comment(&self.reviews, &self.users, &draft).await?;
        self.comments.create(&draft).await
    }
}

// ── UpdateComment ────────────────────────────────────────────────────────────

pub struct UpdateCommentUseCase<C: CommentRepository, R: ReviewRepository, U: UserRepository> {
    pub comments: C,
    pub reviews: R,
    pub users: U,
}

impl<C: CommentRepository, R: ReviewRepository, U: UserRepository> UpdateCommentUseCase<C, R, U> {
    pub async fn execute(
        &self,
        id: i32,
        draft: CommentDraft,
    ) -> Result<Comment, MoviesServiceError> {
        if self.comments.find_by_id(id).await?.is_none() {
            return Err(MoviesServiceError::CommentNotFound);
        }
        check_comment(&self.reviews, &self.users, &draft).await?;
        let comment = draft.with_id(id);
        self.comments.update(&comment).await?;
        Ok(comment)
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> DeleteCommentUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), MoviesServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MoviesServiceError::CommentNotFound)
        }
    }
}
