//! Review factory for creating test review entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The game and user must already exist; foreign keys are enforced by SQLite.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, game.id, user.id)
///     .score(9)
///     .comment("Great")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i64,
    user_id: i64,
    score: i64,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - score: `5`
    /// - comment: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - ID of the reviewed game
    /// - `user_id` - ID of the reviewing user
    pub fn new(db: &'a DatabaseConnection, game_id: i64, user_id: i64) -> Self {
        Self {
            db,
            game_id,
            user_id,
            score: 5,
            comment: None,
        }
    }

    /// Sets the review score.
    pub fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Sets the review comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            score: ActiveValue::Set(self.score),
            comment: ActiveValue::Set(self.comment),
            game_id: ActiveValue::Set(self.game_id),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given game and user.
///
/// Shorthand for `ReviewFactory::new(db, game_id, user_id).build().await`.
pub async fn create_review(
    db: &DatabaseConnection,
    game_id: i64,
    user_id: i64,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, game_id, user_id).build().await
}
