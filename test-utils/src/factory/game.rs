//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("Chess")
///     .genre("Strategy")
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    genre: String,
    platform: String,
    price: i64,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - genre: `"Puzzle"`
    /// - platform: `"PC"`
    /// - price: `20`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Game {}", id),
            genre: "Puzzle".to_string(),
            platform: "PC".to_string(),
            price: 20,
        }
    }

    /// Sets the game title. Titles must be unique.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the game genre.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Sets the game platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sets the game price.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            genre: ActiveValue::Set(self.genre),
            platform: ActiveValue::Set(self.platform),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
