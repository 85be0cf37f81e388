//! Game Reviews Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the game
//! reviews server. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases whose schema is generated from the entity definitions.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories under [`factory`] insert games, users and reviews with unique
//! default values.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_reviews() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_review_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (game, user, review) = factory::helpers::create_review_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
