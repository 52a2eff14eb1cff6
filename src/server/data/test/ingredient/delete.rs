use super::*;

/// Tests deleting an ingredient removes the recipe amounts that use it.
///
/// Expected: Ok(true) with amounts gone and recipe intact
#[tokio::test]
async fn cascades_to_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let ingredient = factory::ingredient::create_ingredient(db).await?;
    let recipe = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(ingredient.id, 250)
        .build()
        .await?;

    assert!(IngredientRepository::new(db).delete(ingredient.id).await?);

    assert!(entity::prelude::IngredientAmount::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Recipe::find_by_id(recipe.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
