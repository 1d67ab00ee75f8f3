use sea_orm_migration::prelude::*;

mod m20251001_000001_create_movies;
mod m20251001_000002_create_users;
mod m20251001_000003_create_actors;
mod m20251001_000004_create_reviews;
mod m20251001_000005_create_comments;
mod m20251001_000006_create_securities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_movies::Migration),
            Box::new(m20251001_000002_create_users::Migration),
            Box::new(m20251001_000003_create_actors::Migration),
            Box::new(m20251001_000004_create_reviews::Migration),
            Box::new(m20251001_000005_create_comments::Migration),
            Box::new(m20251001_000006_create_securities::Migration),
        ]
    }
}
