use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251210_000001_create_game_table::Game, m20251210_000002_create_user_table::User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Review::Id))
                    .col(big_integer(Review::Score))
                    .col(string_null(Review::Comment))
                    .col(big_integer(Review::GameId))
                    .col(big_integer(Review::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_game_id")
                            .from(Review::Table, Review::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
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
                    .name("idx_review_game_id")
                    .table(Review::Table)
                    .col(Review::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    Score,
    Comment,
    GameId,
    UserId,
}
