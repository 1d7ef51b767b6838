use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(pk_auto(Form::Id))
                    .col(string(Form::Title))
                    .col(integer(Form::AuthorId))
                    .col(json(Form::Fields))
                    .col(
                        timestamp_with_time_zone(Form::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_author_id")
                            .from(Form::Table, Form::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_author_id")
                    .table(Form::Table)
                    .col(Form::AuthorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Form::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Form {
    Table,
    Id,
    Title,
    AuthorId,
    Fields,
    CreatedAt,
}
