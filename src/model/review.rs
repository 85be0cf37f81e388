use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    pub score: i64,
    pub comment: Option<String>,
    /// Author of the review, present when the review is returned on its own or nested
    /// under a game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

/// Body of `POST /reviews`.
///
/// Every field is optional at the type level so that missing fields can be reported
/// with a single error message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub game_id: Option<i64>,
    pub user_id: Option<i64>,
    pub score: Option<i64>,
    pub comment: Option<String>,
}
