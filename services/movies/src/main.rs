use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use marquee_core::config::Config;
use marquee_core::tracing::init_tracing;
use marquee_movies::config::MoviesConfig;
use marquee_movies::router::build_router;
use marquee_movies::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    init_tracing("info,sqlx=warn");

    let config = MoviesConfig::from_env().context("load configuration")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db: Arc::new(db),
        jwt: config.jwt_settings(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.movies_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("movies service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
