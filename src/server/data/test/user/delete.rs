use super::*;

/// Tests deleting a user cascades to their recipes and links.
///
/// Verifies that the author's recipes disappear along with the favorites other users
/// held on them and the follow rows pointing at the author.
///
/// Expected: Ok(true) with dependent rows removed
#[tokio::test]
async fn cascades_to_recipes_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let fan = factory::user::create_user(db).await?;
    factory::link::create_favorite(db, fan.id, recipe.id).await?;
    factory::link::create_follow(db, fan.id, author.id).await?;

    let deleted = UserRepository::new(db).delete(author.id).await?;
    assert!(deleted);

    assert!(entity::prelude::Recipe::find_by_id(recipe.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Favorite::find().all(db).await?.is_empty());
    assert!(entity::prelude::Follow::find().all(db).await?.is_empty());
    assert!(entity::prelude::User::find_by_id(fan.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(42).await?);

    Ok(())
}
