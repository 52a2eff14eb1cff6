use super::*;

/// Tests deleting a tag removes its recipe links but keeps the recipes.
///
/// Expected: Ok(true) with links gone and recipe intact
#[tokio::test]
async fn cascades_to_recipe_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    let recipe = factory::recipe::RecipeFactory::new(db, author.id)
        .tag(tag.id)
        .build()
        .await?;

    assert!(TagRepository::new(db).delete(tag.id).await?);

    assert!(entity::prelude::TagRecipe::find().all(db).await?.is_empty());
    assert!(entity::prelude::Recipe::find_by_id(recipe.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a missing tag.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TagRepository::new(db).delete(1).await?);

    Ok(())
}
