//! Domain models and parameter types for reviews.

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::AppError, model::user::User},
};

/// Message returned when a review payload lacks one of its required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: game_id, user_id, score";

/// A review as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub score: i64,
    pub comment: Option<String>,
    pub game_id: i64,
    pub user_id: i64,
}

impl Review {
    /// Converts the review to a DTO without its author.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            score: self.score,
            comment: self.comment,
            user: None,
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            score: entity.score,
            comment: entity.comment,
            game_id: entity.game_id,
            user_id: entity.user_id,
        }
    }
}

/// A review paired with the user who wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithUser {
    pub review: Review,
    pub user: User,
}

impl ReviewWithUser {
    /// Converts to a DTO with the nested `user` populated.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            user: Some(self.user.into_dto()),
            ..self.review.into_dto()
        }
    }
}

/// Parameters for creating a new review.
///
/// The referenced game and user are not checked here; the service resolves them
/// before inserting.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub game_id: i64,
    pub user_id: i64,
    pub score: i64,
    pub comment: Option<String>,
}

impl CreateReviewParam {
    /// Builds create parameters from the request body.
    ///
    /// # Returns
    /// - `Ok(CreateReviewParam)` - All required fields were present
    /// - `Err(AppError::BadRequest)` - `game_id`, `user_id` or `score` was missing
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        match (dto.game_id, dto.user_id, dto.score) {
            (Some(game_id), Some(user_id), Some(score)) => Ok(Self {
                game_id,
                user_id,
                score,
                comment: dto.comment,
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}
