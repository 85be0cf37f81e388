//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review together with the game and user it belongs to.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, user, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::user::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let review = crate::factory::review::create_review(db, game.id, user.id).await?;

    Ok((game, user, review))
}
