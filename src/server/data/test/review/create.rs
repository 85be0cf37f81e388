use super::*;

/// Tests creating a review for an existing game and user.
///
/// Expected: Ok(Review) with generated ID and the provided fields
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParam {
            game_id: game.id,
            user_id: user.id,
            score: 8,
            comment: Some("Tense endgame".to_string()),
        })
        .await?;

    assert!(review.id > 0);
    assert_eq!(review.game_id, game.id);
    assert_eq!(review.user_id, user.id);
    assert_eq!(review.score, 8);
    assert_eq!(review.comment.as_deref(), Some("Tense endgame"));

    let stored = entity::prelude::Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests scores are stored as given, without range checks.
///
/// Expected: Ok(Review) with negative score preserved
#[tokio::test]
async fn stores_score_without_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParam {
            game_id: game.id,
            user_id: user.id,
            score: -42,
            comment: None,
        })
        .await?;

    assert_eq!(review.score, -42);
    assert!(review.comment.is_none());

    Ok(())
}

/// Tests the foreign key constraint rejects reviews for a missing game.
///
/// Expected: Err(DbErr) and no review persisted
#[tokio::test]
async fn fails_for_nonexistent_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParam {
            game_id: 99999,
            user_id: user.id,
            score: 5,
            comment: None,
        })
        .await;

    assert!(result.is_err());

    let count = entity::prelude::Review::find()
        .filter(entity::review::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}
