use sea_orm_migration::prelude::*;

use marquee_movies_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
