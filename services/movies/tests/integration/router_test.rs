use std::collections::BTreeMap;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value as DbValue,
};
use serde_json::{Value, json};

use marquee_auth_types::token::{JwtSettings, issue_token};
use marquee_domain::role::Role;
use marquee_movies::router::build_router;
use marquee_movies::state::AppState;
use marquee_movies_schema::movies;
use marquee_testing::auth::{MockAuth, test_jwt_settings};

use crate::helpers::date;

fn server(db: DatabaseConnection) -> TestServer {
    let state = AppState {
        db: Arc::new(db),
        jwt: test_jwt_settings(),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn movie_row(id: i32) -> movies::Model {
    movies::Model {
        id,
        title: "Alien".into(),
        description: "Una nave, un polizon".into(),
        release_date: date(1979, 5, 25),
        length: "1h 57m".into(),
        genre: "Terror".into(),
    }
}

#[tokio::test]
async fn should_answer_healthz_with_request_id() {
    let response = server(empty_db()).get("/healthz").await;

    response.assert_status_ok();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_return_401_without_token() {
    let response = server(empty_db()).get("/api/movies").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
    assert_eq!(body["messages"][0]["type"], "error");
}

#[tokio::test]
async fn should_return_401_for_token_from_another_issuer() {
    let foreign = JwtSettings {
        issuer: "someone-else".into(),
        ..test_jwt_settings()
    };
    let (token, _) = issue_token(&foreign, "ana", 1, "Ana", Role::User).unwrap();

    let response = server(empty_db())
        .get("/api/movies")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_403_for_role_outside_route_set() {
    let (name, value): (HeaderName, HeaderValue) = MockAuth::new(1, Role::User).header();

    let response = server(empty_db())
        .get("/api/comments")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_return_field_errors_for_invalid_movie() {
    let (name, value) = MockAuth::new(1, Role::Provider).header();

    let response = server(empty_db())
        .post("/api/movies")
        .add_header(name, value)
        .json(&json!({
            "title": "",
            "description": "corta",
            "release_date": "1979-05-25",
            "length": "7h",
            "genre": "Terror"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"description"));
    assert!(fields.contains(&"release_date"));
    assert!(fields.contains(&"length"));
}

#[tokio::test]
async fn should_return_400_when_body_id_differs_from_path() {
    let (name, value) = MockAuth::new(1, Role::Provider).header();

    let response = server(empty_db())
        .put("/api/movies/1")
        .add_header(name, value)
        .json(&json!({
            "id": 2,
            "title": "Alien",
            "description": "Una nave, un polizon",
            "release_date": "25-05-1979",
            "length": "1h 57m",
            "genre": "Terror"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "ID_MISMATCH");
}

#[tokio::test]
async fn should_return_movie_in_envelope() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![movie_row(1)]])
        .into_connection();
    let (name, value) = MockAuth::new(3, Role::User).header();

    let response = server(db).get("/api/movies/1").add_header(name, value).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["title"], "Alien");
    assert_eq!(body["data"]["release_date"], "25-05-1979");
    assert!(body.get("pagination").is_none());
}

#[tokio::test]
async fn should_return_404_for_missing_movie() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<movies::Model>::new()])
        .into_connection();
    let (name, value) = MockAuth::new(3, Role::Administrator).header();

    let response = server(db).get("/api/movies/7").add_header(name, value).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MOVIE_NOT_FOUND");
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_movie() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let (name, value) = MockAuth::new(2, Role::Provider).header();

    let response = server(db)
        .delete("/api/movies/5")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_204_after_delete() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let (name, value) = MockAuth::new(2, Role::Administrator).header();

    let response = server(db)
        .delete("/api/movies/5")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_reject_unknown_genre_report() {
    let (name, value) = MockAuth::new(1, Role::User).header();

    let response = server(empty_db())
        .get("/api/reviews/reports/by-genre/Comedia")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_GENRE");
}

#[tokio::test]
async fn should_reject_malformed_filter_date() {
    let (name, value) = MockAuth::new(1, Role::User).header();

    let response = server(empty_db())
        .get("/api/reviews?date=2024-01-10")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_QUERY");
}

#[tokio::test]
async fn should_let_anyone_attempt_sign_up() {
    let response = server(empty_db())
        .post("/api/users")
        .json(&json!({ "first_name": "Ana" }))
        .await;

    // Reaches validation instead of being rejected for the missing token.
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION");
}

#[tokio::test]
async fn should_map_undecodable_genre_to_invalid_query() {
    let (name, value) = MockAuth::new(1, Role::User).header();

    let response = server(empty_db())
        .get("/api/reviews/reports/by-genre/%FF")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_QUERY");
}

#[tokio::test]
async fn should_return_empty_page_for_huge_page_number() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([("num_items", DbValue::from(3i64))])]])
        .append_query_results([Vec::<movies::Model>::new()])
        .into_connection();
    let (name, value) = MockAuth::new(3, Role::User).header();

    let response = server(db)
        .get("/api/movies?page-number=18446744073709551615")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total_count"], 3);
    assert_eq!(body["pagination"]["current_page"], u64::from(u32::MAX));
    assert_eq!(body["pagination"]["has_next_page"], false);
    assert_eq!(body["messages"][0]["type"], "warning");
}

#[tokio::test]
async fn should_return_every_report_row_on_one_page() {
    let rows: Vec<_> = (1..=12)
        .map(|n| {
            BTreeMap::from([
                ("description", DbValue::from(format!("Opinion {n}"))),
                ("grade", DbValue::from(8.5f32)),
                ("date", DbValue::from(date(2024, 1, n))),
                ("movie_title", DbValue::from("Alien")),
                ("user_name", DbValue::from("Ana")),
            ])
        })
        .collect();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows])
        .into_connection();
    let (name, value) = MockAuth::new(3, Role::User).header();

    let response = server(db)
        .get("/api/reviews/reports/young-reviewers")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["data"][0]["date"], "01-01-2024");
    assert_eq!(body["pagination"]["total_count"], 12);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["pagination"]["has_next_page"], false);
}
