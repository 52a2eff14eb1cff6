use super::*;

/// Tests narrowing a set of authors to the ones a user follows.
///
/// Expected: Ok with only the followed author
#[tokio::test]
async fn returns_followed_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let followed = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    factory::link::create_follow(db, reader.id, followed.id).await?;

    let result = FollowRepository::new(db)
        .followed_among(reader.id, &[followed.id, stranger.id])
        .await?;

    assert!(result.contains(&followed.id));
    assert!(!result.contains(&stranger.id));
    assert_eq!(result.len(), 1);

    Ok(())
}
