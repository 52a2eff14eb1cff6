use super::*;

/// Tests deleting a recipe cascades to links, favorites and cart entries.
///
/// Expected: Ok(true) with every dependent row removed
#[tokio::test]
async fn cascades_to_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;
    factory::link::create_favorite(db, fan.id, recipe.id).await?;
    factory::link::create_shopping_cart_entry(db, fan.id, recipe.id).await?;

    assert!(RecipeRepository::new(db).delete(recipe.id).await?);

    assert!(entity::prelude::TagRecipe::find().all(db).await?.is_empty());
    assert!(entity::prelude::IngredientAmount::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Favorite::find().all(db).await?.is_empty());
    assert!(entity::prelude::ShoppingCart::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting a missing recipe.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!RecipeRepository::new(db).delete(5).await?);

    Ok(())
}
