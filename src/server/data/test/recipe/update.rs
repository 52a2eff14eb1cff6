use super::*;

/// Tests a partial update of scalar fields.
///
/// Verifies that omitted fields and links stay as they were.
///
/// Expected: Ok(true) with only the name changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, recipe) = factory::helpers::create_recipe_with_author(db).await?;

    let repo = RecipeRepository::new(db);
    let updated = repo
        .update(
            recipe.id,
            UpdateRecipeParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert!(updated);

    let stored = repo.get_by_id(recipe.id, None).await?.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.text, recipe.text);
    assert_eq!(stored.cooking_time, recipe.cooking_time);
    assert_eq!(stored.tags.len(), 1);
    assert_eq!(stored.ingredients.len(), 1);

    Ok(())
}

/// Tests that provided tag and ingredient lists replace the old links.
///
/// Expected: Ok(true) with exactly the new links stored
#[tokio::test]
async fn replaces_tags_and_ingredients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let new_tag = factory::tag::create_tag(db).await?;
    let new_ingredient = factory::ingredient::create_ingredient(db).await?;

    let repo = RecipeRepository::new(db);
    repo.update(
        recipe.id,
        UpdateRecipeParams {
            tags: Some(vec![new_tag.id]),
            ingredients: Some(vec![IngredientAmountParam {
                ingredient_id: new_ingredient.id,
                amount: 3,
            }]),
            ..Default::default()
        },
    )
    .await?;

    let links = entity::prelude::TagRecipe::find()
        .filter(entity::tag_recipe::Column::RecipeId.eq(recipe.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].tag_id, new_tag.id);

    let stored = repo.get_by_id(recipe.id, None).await?.unwrap();
    assert_eq!(stored.ingredients.len(), 1);
    assert_eq!(stored.ingredients[0].id, new_ingredient.id);
    assert_eq!(stored.ingredients[0].amount, 3);

    Ok(())
}

/// Tests updating a missing recipe.
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

    let updated = RecipeRepository::new(db)
        .update(
            12,
            UpdateRecipeParams {
                cooking_time: Some(10),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
