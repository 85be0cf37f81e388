use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::review::ReviewDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: i64,
    /// Reviews with their authors, only included when fetching a single game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedGamesDto {
    pub games: Vec<GameDto>,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
}
