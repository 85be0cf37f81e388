use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Game::Id))
                    .col(string_uniq(Game::Title))
                    .col(string(Game::Genre))
                    .col(string(Game::Platform))
                    .col(big_integer(Game::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "games")]
    Table,
    Id,
    Title,
    Genre,
    Platform,
    Price,
}
