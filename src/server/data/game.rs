//! Game data repository for database operations.
//!
//! This module provides the `GameRepository` for reading game records. Games are never
//! written through the API, so the repository only exposes queries.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::game::Game;

/// Repository providing database operations for games.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of games ordered by ID.
    ///
    /// Pages past the end of the table yield an empty vector rather than an error. The
    /// page query is skipped entirely in that case, which also keeps the offset from
    /// overflowing for very large page numbers.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of games per page, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((games, total))` - Games on the page and total number of games
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Game>, u64), DbErr> {
        let paginator = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        if page.saturating_mul(per_page) >= total {
            return Ok((Vec::new(), total));
        }

        let entities = paginator.fetch_page(page).await?;
        let games = entities.into_iter().map(Game::from_entity).collect();

        Ok((games, total))
    }

    /// Finds a game by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with the given ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }
}
