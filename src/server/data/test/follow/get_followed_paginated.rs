use super::*;

/// Tests paging through followed authors.
///
/// Verifies subscription order is kept and the total counts every subscription.
///
/// Expected: Ok with the second author on page 1 and total 3
#[tokio::test]
async fn paginates_in_subscription_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let third = factory::user::create_user(db).await?;
    factory::link::create_follow(db, reader.id, third.id).await?;
    factory::link::create_follow(db, reader.id, first.id).await?;
    factory::link::create_follow(db, reader.id, second.id).await?;
    factory::link::create_follow(db, first.id, second.id).await?;

    let repo = FollowRepository::new(db);
    let (page0, total) = repo
        .get_followed_paginated(reader.id, Page::new(0, 2))
        .await?;
    assert_eq!(total, 3);
    assert_eq!(
        page0.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![third.id, first.id]
    );

    let (page1, _) = repo
        .get_followed_paginated(reader.id, Page::new(1, 2))
        .await?;
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].id, second.id);

    Ok(())
}

/// Tests the largest page number a query string can carry.
///
/// Expected: Ok with no authors and the full total
#[tokio::test]
async fn huge_page_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Follow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let author = factory::user::create_user(db).await?;
    factory::link::create_follow(db, reader.id, author.id).await?;

    let (authors, total) = FollowRepository::new(db)
        .get_followed_paginated(reader.id, Page::new(u64::MAX, 1))
        .await?;

    assert_eq!(total, 1);
    assert!(authors.is_empty());

    Ok(())
}
