use marquee_auth_types::token::validate_token;
use marquee_domain::role::Role;
use marquee_movies::domain::validation::Registration;
use marquee_movies::error::MoviesServiceError;
use marquee_movies::usecase::security::{IssueTokenUseCase, RegisterUseCase};
use marquee_testing::auth::test_jwt_settings;

use crate::helpers::{MockSecurityRepo, MockUserRepo, test_user};

fn registration(login: &str) -> Registration {
    Registration {
        user_id: 1,
        login: login.into(),
        password: "hunter22".into(),
        name: "Ana Lopez".into(),
        role: Role::User,
    }
}

#[tokio::test]
async fn should_store_hashed_password_on_register() {
    let securities = MockSecurityRepo::default();
    let handle = securities.handle();
    let usecase = RegisterUseCase {
        securities,
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    };

    let credentials = usecase.execute(registration("ana")).await.unwrap();

    assert_eq!(credentials.login, "ana");
    let stored = handle.lock().unwrap();
    assert_ne!(stored[0].password_hash, "hunter22");
    assert!(stored[0].password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn should_reject_taken_login() {
    let usecase = RegisterUseCase {
        securities: MockSecurityRepo::default(),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    };

    usecase.execute(registration("ana")).await.unwrap();
    let again = usecase.execute(registration("ana")).await;

    assert!(matches!(again, Err(MoviesServiceError::LoginAlreadyExists)));
}

#[tokio::test]
async fn should_reject_registration_for_missing_user() {
    let usecase = RegisterUseCase {
        securities: MockSecurityRepo::default(),
        users: MockUserRepo::default(),
    };

    let result = usecase.execute(registration("ghost")).await;

    assert!(matches!(result, Err(MoviesServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_issue_token_for_valid_credentials() {
    let securities = MockSecurityRepo::default();
    RegisterUseCase {
        securities: securities.clone(),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    }
    .execute(registration("ana"))
    .await
    .unwrap();

    let usecase = IssueTokenUseCase {
        securities,
        jwt: test_jwt_settings(),
    };
    let issued = usecase.execute("ana", "hunter22").await.unwrap();

    let claims = validate_token(&issued.token, &test_jwt_settings()).unwrap();
    assert_eq!(claims.sub, "ana");
    assert_eq!(claims.uid, 1);
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.exp, issued.expires_at);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_login() {
    let securities = MockSecurityRepo::default();
    RegisterUseCase {
        securities: securities.clone(),
        users: MockUserRepo::new(vec![test_user(1, "ana@example.com")]),
    }
    .execute(registration("ana"))
    .await
    .unwrap();

    let usecase = IssueTokenUseCase {
        securities,
        jwt: test_jwt_settings(),
    };

    assert!(matches!(
        usecase.execute("ana", "wrong-password").await,
        Err(MoviesServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        usecase.execute("nobody", "hunter22").await,
        Err(MoviesServiceError::InvalidCredentials)
    ));
}
