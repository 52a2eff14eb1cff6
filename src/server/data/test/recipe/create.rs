use super::*;

/// Tests creating a recipe with tags and ingredient amounts.
///
/// Verifies that the recipe row and every link row are written, and that the
/// assembled read model reflects them.
///
/// Expected: Ok with recipe and links created
#[tokio::test]
async fn creates_recipe_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let breakfast = factory::tag::create_tag(db).await?;
    let sweet = factory::tag::create_tag(db).await?;
    let flour = factory::ingredient::create_ingredient_named(db, "Flour", "g").await?;
    let eggs = factory::ingredient::create_ingredient_named(db, "Eggs", "pcs").await?;

    let repo = RecipeRepository::new(db);
    let id = repo
        .create(CreateRecipeParams {
            author_id: author.id,
            tags: vec![sweet.id, breakfast.id],
            ingredients: vec![
                IngredientAmountParam {
                    ingredient_id: flour.id,
                    amount: 200,
                },
                IngredientAmountParam {
                    ingredient_id: eggs.id,
                    amount: 2,
                },
            ],
            name: "Pancakes".to_string(),
            image: TEST_IMAGE.to_string(),
            text: "Mix and fry.".to_string(),
            cooking_time: 20,
        })
        .await?;

    let recipe = repo.get_by_id(id, None).await?.unwrap();

    assert_eq!(recipe.name, "Pancakes");
    assert_eq!(recipe.author.user.id, author.id);
    assert_eq!(
        recipe.tags.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![breakfast.id, sweet.id]
    );
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].name, "Flour");
    assert_eq!(recipe.ingredients[0].amount, 200);
    assert_eq!(recipe.ingredients[1].measurement_unit, "pcs");

    Ok(())
}

/// Tests a failing link insert leaves nothing behind.
///
/// Verifies that when an ingredient id violates its foreign key the recipe row is
/// rolled back with the rest of the transaction.
///
/// Expected: Err with no recipe stored
#[tokio::test]
async fn rolls_back_on_invalid_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let result = RecipeRepository::new(db)
        .create(CreateRecipeParams {
            author_id: author.id,
            tags: vec![tag.id],
            ingredients: vec![IngredientAmountParam {
                ingredient_id: 9999,
                amount: 1,
            }],
            name: "Broken".to_string(),
            image: TEST_IMAGE.to_string(),
            text: "Never stored.".to_string(),
            cooking_time: 5,
        })
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Recipe::find().all(db).await?.is_empty());

    Ok(())
}
