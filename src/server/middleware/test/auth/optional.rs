use super::*;

/// Tests anonymous and stale sessions resolve to no user.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn treats_missing_user_as_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    assert!(AuthGuard::new(db, session).optional().await?.is_none());

    AuthSession::new(session).set_user_id(77).await?;
    assert!(AuthGuard::new(db, session).optional().await?.is_none());

    Ok(())
}

/// Tests a logged in user is returned.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let viewer = AuthGuard::new(db, session).optional().await?;

    assert_eq!(viewer.map(|u| u.id), Some(user.id));

    Ok(())
}
