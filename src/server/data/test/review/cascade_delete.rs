use super::*;

async fn review_count(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Review::find().count(db).await
}

/// Tests deleting a game deletes its reviews.
///
/// Expected: Only the reviews of the deleted game are removed
#[tokio::test]
async fn deleting_game_deletes_its_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user, _) = factory::helpers::create_review_with_dependencies(db).await?;
    let other_game = factory::create_game(db).await?;
    let kept = factory::create_review(db, other_game.id, user.id).await?;

    entity::prelude::Game::delete_by_id(game.id).exec(db).await?;

    assert_eq!(review_count(db).await?, 1);
    let remaining = entity::prelude::Review::find()
        .filter(entity::review::Column::GameId.eq(other_game.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(remaining.id, kept.id);

    Ok(())
}

/// Tests deleting a user deletes their reviews.
///
/// Expected: No reviews remain for the deleted user, the game is untouched
#[tokio::test]
async fn deleting_user_deletes_their_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user, _) = factory::helpers::create_review_with_dependencies(db).await?;
    factory::create_review(db, game.id, user.id).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    assert_eq!(review_count(db).await?, 0);
    assert!(entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
