use marquee_movies::error::MoviesServiceError;
use marquee_movies::usecase::comment::{CreateCommentUseCase, DeleteCommentUseCase};

use crate::helpers::{
    MockCommentRepo, MockReviewRepo, MockUserRepo, comment_draft, test_review, test_user,
};

fn usecase() -> CreateCommentUseCase<MockCommentRepo, MockReviewRepo, MockUserRepo> {
    CreateCommentUseCase {
        comments: MockCommentRepo::default(),
        reviews: MockReviewRepo::new(vec![test_review(1, 1, 1)]),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    }
}

#[tokio::test]
async fn should_create_comment_on_existing_review() {
    let comment = usecase()
        .execute(comment_draft(1, 1, "Totalmente de acuerdo"))
        .await
        .unwrap();

    assert_eq!(comment.id, 1);
    assert_eq!(comment.review_id, Some(1));
}

#[tokio::test]
async fn should_reject_comment_with_forbidden_words() {
    let result = usecase()
        .execute(comment_draft(1, 1, "Que mierda de opinion"))
        .await;

    assert!(matches!(result, Err(MoviesServiceError::ForbiddenWords)));
}

#[tokio::test]
async fn should_reject_comment_on_missing_review() {
    let result = usecase()
        .execute(comment_draft(7, 1, "Totalmente de acuerdo"))
        .await;

    assert!(matches!(result, Err(MoviesServiceError::ReviewNotFound)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_comment() {
    let usecase = DeleteCommentUseCase {
        repo: MockCommentRepo::default(),
    };

    let result = usecase.execute(1).await;

    assert!(matches!(result, Err(MoviesServiceError::CommentNotFound)));
}
