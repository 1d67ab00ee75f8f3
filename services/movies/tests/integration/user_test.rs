use marquee_movies::domain::types::UserDraft;
use marquee_movies::error::MoviesServiceError;
use marquee_movies::usecase::user::{CreateUserUseCase, UpdateUserUseCase};

use crate::helpers::{MockUserRepo, date, test_user};

fn draft(email: &str) -> UserDraft {
    UserDraft {
        first_name: "Luis".into(),
        last_name: "Perez".into(),
        email: email.into(),
        date_of_birth: date(1990, 6, 30),
        telephone: Some("+34600111222".into()),
        is_active: true,
    }
}

#[tokio::test]
async fn should_reject_registered_email_on_create() {
    let usecase = CreateUserUseCase {
        repo: MockUserRepo::new(vec![test_user(1, "luis@example.com")]),
    };

    let result = usecase.execute(draft("luis@example.com")).await;

    assert!(matches!(result, Err(MoviesServiceError::EmailAlreadyExists)));
}

#[tokio::test]
async fn should_keep_own_email_on_update() {
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::new(vec![test_user(1, "luis@example.com")]),
    };

    let user = usecase.execute(1, draft("luis@example.com")).await.unwrap();

    assert_eq!(user.first_name, "Luis");
}

#[tokio::test]
async fn should_reject_email_of_another_user_on_update() {
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::new(vec![
            test_user(1, "luis@example.com"),
            test_user(2, "ana@example.com"),
        ]),
    };

    let result = usecase.execute(2, draft("luis@example.com")).await;

    assert!(matches!(result, Err(MoviesServiceError::EmailAlreadyExists)));
}
