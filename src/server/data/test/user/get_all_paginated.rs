use super::*;

/// Tests paginating users.
///
/// Verifies that pages are ordered by id and the total counts every user rather
/// than the number of pages.
///
/// Expected: Ok with 2 users on page 1 and total 5
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(Page::new(1, 2)).await?;

    assert_eq!(total, 5);
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![ids[2], ids[3]]
    );

    let (last, _) = repo.get_all_paginated(Page::new(2, 2)).await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests an empty user table.
///
/// Expected: Ok with no users and total 0
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(Page::default())
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the largest page number a query string can carry.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn huge_page_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let page = PaginationParams {
        page: u64::MAX,
        limit: 6,
    }
    .into_page();
    let (users, total) = UserRepository::new(db).get_all_paginated(page).await?;

    assert_eq!(total, 1);
    assert!(users.is_empty());

    Ok(())
}
