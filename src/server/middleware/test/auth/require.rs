use super::*;

/// Tests an anonymous session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a logged in user passes when no permissions are required.
///
/// Expected: Ok(User) for the session user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guarded = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(guarded.id, user.id);

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests the admin permission.
///
/// Verifies that a regular user is denied and an admin is let through.
///
/// Expected: Err(AccessDenied) for the user, Ok for the admin
#[tokio::test]
async fn requires_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    auth_session.set_user_id(admin.id).await?;
    let guarded = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;
    assert_eq!(guarded.id, admin.id);

    Ok(())
}

/// Tests logging out returns the session to anonymous.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn rejects_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
