//! Domain models for games.
//!
//! Entity models are converted into these types at the repository boundary and turned
//! into DTOs at the controller boundary.

use crate::{
    model::game::{GameDto, PaginatedGamesDto},
    server::model::review::ReviewWithUser,
};

/// A game as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Unique identifier assigned by the database.
    pub id: i64,
    /// Title of the game, unique across all games.
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: i64,
}

impl Game {
    /// Converts the game to a DTO without nested reviews.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            price: self.price,
            reviews: None,
        }
    }

    /// Converts an entity model to a game domain model.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            platform: entity.platform,
            price: entity.price,
        }
    }
}

/// A game together with all of its reviews, in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithReviews {
    pub game: Game,
    pub reviews: Vec<ReviewWithUser>,
}

impl GameWithReviews {
    /// Converts to a DTO with `reviews` populated, each review carrying its user.
    pub fn into_dto(self) -> GameDto {
        let reviews = self.reviews.into_iter().map(|r| r.into_dto()).collect();

        GameDto {
            reviews: Some(reviews),
            ..self.game.into_dto()
        }
    }
}

/// One page of games along with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePage {
    /// Games on the requested page, empty when the page is out of range.
    pub games: Vec<Game>,
    /// Requested page number, starting at 1.
    pub page: u64,
    /// Total number of pages for the current page size.
    pub pages: u64,
    /// Total number of games.
    pub total: u64,
}

impl GamePage {
    pub fn into_dto(self) -> PaginatedGamesDto {
        PaginatedGamesDto {
            games: self.games.into_iter().map(|g| g.into_dto()).collect(),
            page: self.page,
            pages: self.pages,
            total: self.total,
        }
    }
}
