use marquee_domain::pagination::PageRequest;
use marquee_movies::domain::types::{MovieDraft, MovieFilter};
use marquee_movies::error::MoviesServiceError;
use marquee_movies::usecase::actor::CreateActorUseCase;
use marquee_movies::usecase::movie::{
    CreateMovieUseCase, DeleteMovieUseCase, ListMoviesUseCase, UpdateMovieUseCase,
};

use crate::helpers::{MockActorRepo, MockMovieRepo, date, test_movie};

fn draft(title: &str, genre: &str) -> MovieDraft {
    MovieDraft {
        title: title.into(),
        description: "Una historia de prueba".into(),
        release_date: date(2021, 7, 9),
        length: "1h 45m".into(),
        genre: genre.into(),
    }
}

#[tokio::test]
async fn should_store_created_movie() {
    let repo = MockMovieRepo::default();
    let handle = repo.handle();
    let usecase = CreateMovieUseCase { repo };

    let movie = usecase.execute(draft("Hereditary", "Terror")).await.unwrap();

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], movie);
}

#[tokio::test]
async fn should_not_store_movie_with_duplicate_title() {
    let repo = MockMovieRepo::new(vec![test_movie(1, "Hereditary")]);
    let handle = repo.handle();
    let usecase = CreateMovieUseCase { repo };

    let result = usecase.execute(draft("Hereditary", "Terror")).await;

    assert!(matches!(result, Err(MoviesServiceError::DuplicateTitle)));
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_update_to_unlisted_genre_and_keep_row() {
    let repo = MockMovieRepo::new(vec![test_movie(1, "Hereditary")]);
    let handle = repo.handle();
    let usecase = UpdateMovieUseCase { repo };

    let result = usecase.execute(1, draft("Hereditary", "Comedia")).await;

    assert!(matches!(result, Err(MoviesServiceError::InvalidGenre)));
    assert_eq!(handle.lock().unwrap()[0].genre, "Terror");
}

#[tokio::test]
async fn should_apply_update_in_place() {
    let repo = MockMovieRepo::new(vec![test_movie(1, "Hereditary")]);
    let handle = repo.handle();
    let usecase = UpdateMovieUseCase { repo };

    let updated = usecase
        .execute(1, draft("Hereditary (2018)", "Suspenso"))
        .await
        .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(handle.lock().unwrap()[0].title, "Hereditary (2018)");
}

#[tokio::test]
async fn should_page_filtered_movies() {
    let movies = (1..=25).map(|i| test_movie(i, &format!("Movie {i}"))).collect();
    let usecase = ListMoviesUseCase {
        repo: MockMovieRepo::new(movies),
    };

    let page = usecase
        .execute(
            &MovieFilter {
                genre: Some("Terror".into()),
                ..Default::default()
            },
            PageRequest {
                page_size: 10,
                page_number: 2,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, 11);
    assert_eq!(page.total_count, 25);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_previous_page);
    assert!(page.has_next_page);
}

#[tokio::test]
async fn should_delete_existing_movie_once() {
    let usecase = DeleteMovieUseCase {
        repo: MockMovieRepo::new(vec![test_movie(4, "Alien")]),
    };

    usecase.execute(4).await.unwrap();
    let again = usecase.execute(4).await;

    assert!(matches!(again, Err(MoviesServiceError::MovieNotFound)));
}

#[tokio::test]
async fn should_require_existing_movie_for_actor() {
    let usecase = CreateActorUseCase {
        actors: MockActorRepo::default(),
        movies: MockMovieRepo::default(),
    };

    let result = usecase
        .execute(marquee_movies::domain::types::ActorDraft {
            movie_id: 3,
            first_name: "Toni".into(),
            last_name: "Collette".into(),
            email: "toni@example.com".into(),
            date_of_birth: date(1972, 11, 1),
            is_active: true,
        })
        .await;

    assert!(matches!(result, Err(MoviesServiceError::MovieNotFound)));
}
