use super::*;

/// Tests email uniqueness checks.
///
/// Verifies that an address held by another user is taken, while the holder itself
/// may keep it.
///
/// Expected: true for others, false when excluding the holder
#[tokio::test]
async fn email_taken_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("taken@example.com", Some(user.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests username uniqueness checks.
///
/// Expected: true for others, false when excluding the holder
#[tokio::test]
async fn username_taken_respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("chef")
        .build()
        .await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.username_taken("chef", Some(other.id)).await?);
    assert!(!repo.username_taken("chef", Some(user.id)).await?);

    Ok(())
}
