use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comments::ReviewId).integer().null())
                    .col(ColumnDef::new(Comments::UserId).integer().null())
                    .col(ColumnDef::new(Comments::Description).text().not_null())
                    .col(ColumnDef::new(Comments::Date).date().not_null())
                    .col(ColumnDef::new(Comments::IsActive).boolean().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_review")
                            .from(Comments::Table, Comments::ReviewId)
                            .to(Reviews::Table, Reviews::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_review_id")
                    .table(Comments::Table)
                    .col(Comments::ReviewId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    ReviewId,
    UserId,
    Description,
    Date,
    IsActive,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
