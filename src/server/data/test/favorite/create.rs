use super::*;

/// Tests marking a favorite.
///
/// Verifies that the link exists afterwards for that user only.
///
/// Expected: Ok with exists true for the user, false for others
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(!repo.exists(fan.id, recipe.id).await?);

    repo.create(fan.id, recipe.id).await?;

    assert!(repo.exists(fan.id, recipe.id).await?);
    assert!(!repo.exists(author.id, recipe.id).await?);

    Ok(())
}
