use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::{
        game::{GamePage, GameWithReviews},
        user::User,
    },
};

/// Page size used when the requested size is below one.
const FALLBACK_PER_PAGE: u64 = 20;

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of games.
    ///
    /// Pagination is lenient: a page below 1 is treated as page 1 and a page size below 1
    /// falls back to 20. Pages past the end return no games instead of failing.
    ///
    /// # Arguments
    /// - `page` - One-indexed page number as requested by the client
    /// - `per_page` - Requested number of games per page
    ///
    /// # Returns
    /// - `Ok(GamePage)` - Games on the page with the normalised page number, page count
    ///   and total number of games
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(&self, page: i64, per_page: i64) -> Result<GamePage, AppError> {
        let page = u64::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let per_page = u64::try_from(per_page)
            .ok()
            .filter(|p| *p >= 1)
            .unwrap_or(FALLBACK_PER_PAGE);

        let (games, total) = GameRepository::new(self.db)
            .get_paginated(page - 1, per_page)
            .await?;

        Ok(GamePage {
            games,
            page,
            pages: total.div_ceil(per_page),
            total,
        })
    }

    /// Gets a game with all of its reviews and their authors.
    ///
    /// # Returns
    /// - `Ok(Some(GameWithReviews))` - Game found, reviews in creation order
    /// - `Ok(None)` - No game with the given ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i64) -> Result<Option<GameWithReviews>, AppError> {
        let Some(game) = GameRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let reviews = ReviewRepository::new(self.db)
            .get_by_game_id_with_users(game.id)
            .await?;

        Ok(Some(GameWithReviews { game, reviews }))
    }

    /// Gets the users who reviewed a game, once per review in creation order.
    ///
    /// # Returns
    /// - `Ok(Some(users))` - Game found
    /// - `Ok(None)` - No game with the given ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_reviewers(&self, id: i64) -> Result<Option<Vec<User>>, AppError> {
        if GameRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let users = UserRepository::new(self.db)
            .get_reviewers_by_game_id(id)
            .await?;

        Ok(Some(users))
    }
}
