use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actors::MovieId).integer().null())
                    .col(ColumnDef::new(Actors::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Actors::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Actors::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Actors::DateOfBirth).date().not_null())
                    .col(
                        ColumnDef::new(Actors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actors_movie")
                            .from(Actors::Table, Actors::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_actors_movie_id")
                    .table(Actors::Table)
                    .col(Actors::MovieId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Actors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Actors {
    Table,
    Id,
    MovieId,
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    IsActive,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}
