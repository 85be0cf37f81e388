use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested subset of games in
/// insertion order along with the total number of games.
///
/// Expected: Ok with correct page of games and total count
#[tokio::test]
async fn returns_correct_page_of_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_game(db).await?);
    }

    let repo = GameRepository::new(db);

    let (games, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, created[0].id);
    assert_eq!(games[1].id, created[1].id);

    let (games, _) = repo.get_paginated(2, 2).await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, created[4].id);

    Ok(())
}

/// Tests pagination past the last page.
///
/// Expected: Ok with empty vector and the full total
#[tokio::test]
async fn returns_empty_page_when_out_of_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;
    factory::create_game(db).await?;

    let repo = GameRepository::new(db);

    let (games, total) = repo.get_paginated(5, 10).await?;
    assert!(games.is_empty());
    assert_eq!(total, 2);

    let (games, total) = repo.get_paginated(u64::MAX, u64::MAX).await?;
    assert!(games.is_empty());
    assert_eq!(total, 2);

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let (games, total) = repo.get_paginated(0, 10).await?;

    assert!(games.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
