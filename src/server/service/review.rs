use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::review::{CreateReviewParam, ReviewWithUser},
};

/// Message returned when a review references a game or user that does not exist.
pub const INVALID_REFERENCE_MESSAGE: &str = "Invalid game_id or user_id";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review after resolving the referenced game and user.
    ///
    /// Nothing is written when either reference fails to resolve.
    ///
    /// # Arguments
    /// - `param` - Review fields with the referenced game and user IDs
    ///
    /// # Returns
    /// - `Ok(ReviewWithUser)` - The created review with its author
    /// - `Err(AppError::NotFound)` - `game_id` or `user_id` does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateReviewParam) -> Result<ReviewWithUser, AppError> {
        let game = GameRepository::new(self.db).find_by_id(param.game_id).await?;
        let user = UserRepository::new(self.db).find_by_id(param.user_id).await?;

        let (Some(_), Some(user)) = (game, user) else {
            return Err(AppError::NotFound(INVALID_REFERENCE_MESSAGE.to_string()));
        };

        let review = ReviewRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Created review {} for game {} by user {}",
            review.id,
            review.game_id,
            review.user_id
        );

        Ok(ReviewWithUser { review, user })
    }
}
