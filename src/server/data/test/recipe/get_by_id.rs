use super::*;

/// Tests viewer-relative flags on a single recipe.
///
/// Verifies that favorite, cart and subscription flags reflect the viewer's own
/// rows and are all false for an anonymous viewer.
///
/// Expected: Ok(Some) with flags set for the viewer only
#[tokio::test]
async fn sets_viewer_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let viewer = factory::user::create_user(db).await?;
    factory::link::create_favorite(db, viewer.id, recipe.id).await?;
    factory::link::create_shopping_cart_entry(db, viewer.id, recipe.id).await?;
    factory::link::create_follow(db, viewer.id, author.id).await?;

    let repo = RecipeRepository::new(db);

    let seen = repo.get_by_id(recipe.id, Some(viewer.id)).await?.unwrap();
    assert!(seen.is_favorited);
    assert!(seen.is_in_shopping_cart);
    assert!(seen.author.is_subscribed);

    let anonymous = repo.get_by_id(recipe.id, None).await?.unwrap();
    assert!(!anonymous.is_favorited);
    assert!(!anonymous.is_in_shopping_cart);
    assert!(!anonymous.author.is_subscribed);

    let author_view = repo.get_by_id(recipe.id, Some(author.id)).await?.unwrap();
    assert!(!author_view.is_favorited);

    Ok(())
}

/// Tests loading a missing recipe.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(RecipeRepository::new(db).get_by_id(1, None).await?.is_none());

    Ok(())
}
