use super::*;

/// Tests creating a user from registration params.
///
/// Verifies that the stored row carries the given fields and hash, and that new
/// users are never admins.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            CreateUserParams {
                email: "cook@example.com".to_string(),
                username: "cook".to_string(),
                first_name: "Julia".to_string(),
                last_name: "Child".to_string(),
                password: "ignored-here".to_string(),
            },
            "$argon2id$fake".to_string(),
        )
        .await?;

    assert_eq!(user.email, "cook@example.com");
    assert_eq!(user.username, "cook");
    assert_eq!(user.password_hash, "$argon2id$fake");
    assert!(!user.admin);

    let found = repo.find_by_email("cook@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_email_returns_none_for_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;
    assert!(found.is_none());

    Ok(())
}
