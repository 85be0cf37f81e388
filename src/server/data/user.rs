//! User data repository for database operations.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::user::User;

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with the given ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets the authors of every review for a game.
    ///
    /// Users are returned once per review, in the order the reviews were written, so a
    /// user who reviewed the game twice appears twice.
    ///
    /// # Arguments
    /// - `game_id` - ID of the reviewed game
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Review authors, empty if the game has no reviews
    /// - `Err(DbErr::RecordNotFound)` - A review references a user that no longer exists
    /// - `Err(DbErr)` - Other database error during query
    pub async fn get_reviewers_by_game_id(&self, game_id: i64) -> Result<Vec<User>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::GameId.eq(game_id))
            .order_by_asc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(review, user)| {
                user.map(User::from_entity).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "User with id {} for review {} not found",
                        review.user_id, review.id
                    ))
                })
            })
            .collect()
    }
}
