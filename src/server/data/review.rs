//! Review data repository for database operations.
//!
//! This module provides the `ReviewRepository` for inserting reviews and reading them
//! back together with their authors.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    review::{CreateReviewParam, Review, ReviewWithUser},
    user::User,
};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new review.
    ///
    /// The game and user referenced by `param` must exist; the foreign key constraints
    /// reject the insert otherwise.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing game_id, user_id, score and comment
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            score: ActiveValue::Set(param.score),
            comment: ActiveValue::Set(param.comment),
            game_id: ActiveValue::Set(param.game_id),
            user_id: ActiveValue::Set(param.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets all reviews for a game with their authors.
    ///
    /// Reviews are ordered by ID, which is their insertion order.
    ///
    /// # Arguments
    /// - `game_id` - ID of the reviewed game
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewWithUser>)` - Reviews paired with their users
    /// - `Err(DbErr::RecordNotFound)` - A review references a user that no longer exists
    /// - `Err(DbErr)` - Other database error during query
    pub async fn get_by_game_id_with_users(
        &self,
        game_id: i64,
    ) -> Result<Vec<ReviewWithUser>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::GameId.eq(game_id))
            .order_by_asc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(review, user)| {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "User with id {} for review {} not found",
                        review.user_id, review.id
                    ))
                })?;

                Ok(ReviewWithUser {
                    review: Review::from_entity(review),
                    user: User::from_entity(user),
                })
            })
            .collect()
    }
}
