use marquee_movies::error::MoviesServiceError;
use marquee_movies::usecase::review::{CreateReviewUseCase, UpdateReviewUseCase};

use crate::helpers::{
    MockMovieRepo, MockReviewRepo, MockUserRepo, review_draft, test_movie, test_review,
    test_user,
};

fn create_usecase(
    reviews: MockReviewRepo,
) -> CreateReviewUseCase<MockReviewRepo, MockMovieRepo, MockUserRepo> {
    CreateReviewUseCase {
        reviews,
        movies: MockMovieRepo::new(vec![test_movie(1, "Alien")]),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    }
}

#[tokio::test]
async fn should_accept_grades_at_both_bounds() {
    let usecase = create_usecase(MockReviewRepo::default());

    assert!(usecase.execute(review_draft(1, 1, 1.0, "Floja")).await.is_ok());
    assert!(usecase.execute(review_draft(1, 1, 10.0, "Perfecta")).await.is_ok());
}

#[tokio::test]
async fn should_reject_grade_above_ten() {
    let reviews = MockReviewRepo::default();
    let handle = reviews.handle();
    let usecase = create_usecase(reviews);

    let result = usecase.execute(review_draft(1, 1, 11.0, "Increible")).await;

    assert!(matches!(result, Err(MoviesServiceError::GradeOutOfRange)));
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_forbidden_words_inside_other_words() {
    let usecase = create_usecase(MockReviewRepo::default());

    let result = usecase
        .execute(review_draft(1, 1, 5.0, "Una JODERIA de pelicula"))
        .await;

    assert!(matches!(result, Err(MoviesServiceError::ForbiddenWords)));
}

#[tokio::test]
async fn should_require_existing_movie_and_user() {
    let usecase = create_usecase(MockReviewRepo::default());

    let missing_movie = usecase.execute(review_draft(9, 1, 5.0, "Bien")).await;
    let missing_user = usecase.execute(review_draft(1, 9, 5.0, "Bien")).await;

    assert!(matches!(missing_movie, Err(MoviesServiceError::MovieNotFound)));
    assert!(matches!(missing_user, Err(MoviesServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_update_existing_review() {
    let reviews = MockReviewRepo::new(vec![test_review(1, 1, 1)]);
    let handle = reviews.handle();
    let usecase = UpdateReviewUseCase {
        reviews,
        movies: MockMovieRepo::new(vec![test_movie(1, "Alien")]),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    };

    let review = usecase
        .execute(1, review_draft(1, 1, 6.5, "Mejor la segunda vez"))
        .await
        .unwrap();

    assert_eq!(review.grade, 6.5);
    assert_eq!(handle.lock().unwrap()[0].grade, 6.5);
}

#[tokio::test]
async fn should_return_not_found_for_missing_review_on_update() {
    let usecase = UpdateReviewUseCase {
        reviews: MockReviewRepo::default(),
        movies: MockMovieRepo::new(vec![test_movie(1, "Alien")]),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    };

    let result = usecase.execute(5, review_draft(1, 1, 6.0, "Bien")).await;

    assert!(matches!(result, Err(MoviesServiceError::ReviewNotFound)));
}
