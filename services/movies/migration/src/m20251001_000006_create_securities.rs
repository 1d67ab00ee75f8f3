use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Securities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Securities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Securities::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Securities::Login)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Securities::Password).text().not_null())
                    .col(ColumnDef::new(Securities::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Securities::Role).small_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_securities_user")
                            .from(Securities::Table, Securities::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Securities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Securities {
    Table,
    Id,
    UserId,
    Login,
    Password,
    Name,
    Role,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
