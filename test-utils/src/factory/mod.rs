//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Defaults are derived from a shared counter so
//! unique columns (game title, username) never collide within a test run.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let game = factory::create_game(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let review = factory::create_review(&db, game.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .title("Chess")
//!     .price(0)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;
pub mod review;
pub mod user;

pub use game::create_game;
pub use review::create_review;
pub use user::create_user;
