use super::*;

/// Tests reviewers are returned in review order, once per review.
///
/// Expected: Ok with one user per review, duplicates preserved
#[tokio::test]
async fn returns_reviewers_in_review_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    factory::create_review(db, game.id, second.id).await?;
    factory::create_review(db, game.id, first.id).await?;
    factory::create_review(db, game.id, second.id).await?;

    let repo = UserRepository::new(db);
    let reviewers = repo.get_reviewers_by_game_id(game.id).await?;

    let ids: Vec<i64> = reviewers.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![second.id, first.id, second.id]);

    Ok(())
}

/// Tests reviewers of other games are excluded.
///
/// Expected: Ok with only the reviewers of the requested game
#[tokio::test]
async fn excludes_reviewers_of_other_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;

    factory::create_review(db, game.id, user.id).await?;
    factory::create_review(db, other_game.id, other_user.id).await?;

    let repo = UserRepository::new(db);
    let reviewers = repo.get_reviewers_by_game_id(game.id).await?;

    assert_eq!(reviewers.len(), 1);
    assert_eq!(reviewers[0].id, user.id);
    assert_eq!(reviewers[0].username, user.username);

    Ok(())
}

/// Tests a game without reviews has no reviewers.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unreviewed_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.get_reviewers_by_game_id(game.id).await?.is_empty());

    Ok(())
}

/// Tests a review whose author row is gone.
///
/// Expected: Err(RecordNotFound) rather than a shortened list
#[tokio::test]
async fn fails_when_review_author_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_review(db, game.id, user.id).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    factory::create_review(db, game.id, user.id + 100).await?;

    let repo = UserRepository::new(db);
    let result = repo.get_reviewers_by_game_id(game.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
