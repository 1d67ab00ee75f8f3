use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Transaction, Value};

use marquee_movies::domain::repository::ReportRepository;
use marquee_movies::domain::types::MovieDraft;
use marquee_movies::error::MoviesServiceError;
use marquee_movies::infra::uow::DbUnitOfWork;
use marquee_movies::usecase::movie::CreateMovieUseCase;
use marquee_movies_schema::movies;

use crate::helpers::date;

fn alien_row() -> movies::Model {
    movies::Model {
        id: 1,
        title: "Alien".into(),
        description: "Una nave, un polizon".into(),
        release_date: date(1979, 5, 25),
        length: "1h 57m".into(),
        genre: "Terror".into(),
    }
}

fn alien_draft() -> MovieDraft {
    MovieDraft {
        title: "Alien".into(),
        description: "Una nave, un polizon".into(),
        release_date: date(1979, 5, 25),
        length: "1h 57m".into(),
        genre: "Terror".into(),
    }
}

fn statements(log: &[Transaction]) -> Vec<String> {
    assert_eq!(log.len(), 1, "expected a single transaction");
    log[0].statements().iter().map(|s| s.sql.clone()).collect()
}

async fn create_alien(db: &DatabaseConnection) -> Result<(), MoviesServiceError> {
    let uow = DbUnitOfWork::begin(db).await?;
    let usecase = CreateMovieUseCase { repo: uow.movies() };
    usecase.execute(alien_draft()).await?;
    uow.commit().await
}

#[tokio::test]
async fn should_commit_create_in_one_transaction() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<movies::Model>::new()])
        .append_query_results([vec![alien_row()]])
        .into_connection();

    create_alien(&db).await.unwrap();

    let sql = statements(&db.into_transaction_log());
    assert_eq!(sql.len(), 4);
    assert_eq!(sql[0], "BEGIN");
    assert!(sql[1].starts_with("SELECT"));
    assert!(sql[2].starts_with("INSERT INTO \"movies\""));
    assert_eq!(sql[3], "COMMIT");
}

#[tokio::test]
async fn should_roll_back_when_create_fails() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alien_row()]])
        .into_connection();

    let result = create_alien(&db).await;

    assert!(matches!(result, Err(MoviesServiceError::DuplicateTitle)));
    let sql = statements(&db.into_transaction_log());
    assert_eq!(sql.first().map(String::as_str), Some("BEGIN"));
    assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"));
    assert!(!sql.iter().any(|s| s.starts_with("INSERT")));
    assert!(!sql.iter().any(|s| s == "COMMIT"));
}

#[tokio::test]
async fn should_map_report_rows_inside_the_transaction() {
    let row = BTreeMap::from([
        ("title", Value::from("Alien")),
        ("description", Value::from("Una nave, un polizon")),
        ("release_date", Value::from(date(1979, 5, 25))),
        ("length", Value::from("1h 57m")),
        ("genre", Value::from("Terror")),
        ("total_reviews", Value::from(4i64)),
    ]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let uow = DbUnitOfWork::begin(&db).await.unwrap();
    let movie = uow.reports().most_reviewed_movie(1979).await.unwrap().unwrap();
    drop(uow);

    assert_eq!(movie.title, "Alien");
    assert_eq!(movie.release_date, date(1979, 5, 25));
    assert_eq!(movie.total_reviews, 4);

    let log = db.into_transaction_log();
    let sql = statements(&log);
    assert_eq!(sql[0], "BEGIN");
    assert!(sql[1].contains("EXTRACT(YEAR FROM m.release_date) = $1"));
    let values = log[0].statements()[1].values.as_ref().map(|v| v.0.clone());
    assert_eq!(values, Some(vec![Value::from(1979)]));
}
