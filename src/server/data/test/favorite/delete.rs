use super::*;

/// Tests removing a favorite.
///
/// Expected: Ok(true) the first time, Ok(false) once nothing is left
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;
    factory::link::create_favorite(db, fan.id, recipe.id).await?;

    let repo = FavoriteRepository::new(db);
    assert!(repo.delete(fan.id, recipe.id).await?);
    assert!(!repo.delete(fan.id, recipe.id).await?);
    assert!(!repo.exists(fan.id, recipe.id).await?);

    Ok(())
}
