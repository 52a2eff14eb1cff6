use super::*;

/// Tests following and unfollowing an author.
///
/// Verifies that the relation is directional.
///
/// Expected: exists true one way only; delete reports whether a row was removed
#[tokio::test]
async fn creates_and_deletes_follow() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Follow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let author = factory::user::create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.create(reader.id, author.id).await?;

    assert!(repo.exists(reader.id, author.id).await?);
    assert!(!repo.exists(author.id, reader.id).await?);

    assert!(repo.delete(reader.id, author.id).await?);
    assert!(!repo.delete(reader.id, author.id).await?);

    Ok(())
}
