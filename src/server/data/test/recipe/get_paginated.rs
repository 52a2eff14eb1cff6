use super::*;

/// Tests pagination over all recipes.
///
/// Expected: Ok with recipes in id order and the full total
#[tokio::test]
async fn paginates_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::recipe::create_recipe(db, author.id).await?.id);
    }

    let repo = RecipeRepository::new(db);
    let (recipes, total) = repo
        .get_paginated(&RecipeFilter::default(), None, Page::new(1, 3))
        .await?;

    assert_eq!(total, 4);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, ids[3]);

    Ok(())
}

/// Tests the author filter.
///
/// Expected: Ok with only the chosen author's recipes
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    factory::helpers::create_recipe_with_author(db).await?;

    let filter = RecipeFilter {
        author: Some(author.id),
        ..Default::default()
    };
    let (recipes, total) = RecipeRepository::new(db)
        .get_paginated(&filter, None, Page::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(recipes[0].id, recipe.id);

    Ok(())
}

/// Tests the tag filter matches any slug and never duplicates a recipe.
///
/// Verifies that a recipe carrying both requested tags appears once, and that a
/// recipe with neither tag is excluded.
///
/// Expected: Ok with two distinct recipes
#[tokio::test]
async fn filters_by_any_tag_without_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let lunch = factory::tag::TagFactory::new(db).slug("lunch").build().await?;
    let dinner = factory::tag::TagFactory::new(db).slug("dinner").build().await?;
    let other = factory::tag::create_tag(db).await?;

    let both = factory::recipe::RecipeFactory::new(db, author.id)
        .tag(lunch.id)
        .tag(dinner.id)
        .build()
        .await?;
    let dinner_only = factory::recipe::RecipeFactory::new(db, author.id)
        .tag(dinner.id)
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, author.id)
        .tag(other.id)
        .build()
        .await?;

    let filter = RecipeFilter {
        tags: vec!["lunch".to_string(), "dinner".to_string()],
        ..Default::default()
    };
    let (recipes, total) = RecipeRepository::new(db)
        .get_paginated(&filter, None, Page::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![both.id, dinner_only.id]
    );

    Ok(())
}

/// Tests an unknown tag slug matches nothing.
///
/// Expected: Ok with no recipes
#[tokio::test]
async fn unknown_tag_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_recipe_with_author(db).await?;

    let filter = RecipeFilter {
        tags: vec!["missing".to_string()],
        ..Default::default()
    };
    let (recipes, total) = RecipeRepository::new(db)
        .get_paginated(&filter, None, Page::default())
        .await?;

    assert!(recipes.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the favorite and shopping cart filters.
///
/// Verifies that both predicates narrow the listing for a logged in viewer and are
/// ignored for anonymous requests.
///
/// Expected: Ok with filtered results for the viewer, all recipes when anonymous
#[tokio::test]
async fn filters_by_viewer_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, favorite) = factory::helpers::create_recipe_with_author(db).await?;
    let (_author, in_cart) = factory::helpers::create_recipe_with_author(db).await?;
    factory::helpers::create_recipe_with_author(db).await?;
    let viewer = factory::user::create_user(db).await?;
    factory::link::create_favorite(db, viewer.id, favorite.id).await?;
    factory::link::create_shopping_cart_entry(db, viewer.id, in_cart.id).await?;

    let repo = RecipeRepository::new(db);

    let favorites = RecipeFilter {
        is_favorited: true,
        ..Default::default()
    };
    let (recipes, _) = repo
        .get_paginated(&favorites, Some(viewer.id), Page::default())
        .await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, favorite.id);
    assert!(recipes[0].is_favorited);

    let cart = RecipeFilter {
        is_in_shopping_cart: true,
        ..Default::default()
    };
    let (recipes, _) = repo
        .get_paginated(&cart, Some(viewer.id), Page::default())
        .await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, in_cart.id);

    let both = RecipeFilter {
        is_favorited: true,
        is_in_shopping_cart: true,
        ..Default::default()
    };
    let (recipes, _) = repo
        .get_paginated(&both, Some(viewer.id), Page::default())
        .await?;
    assert!(recipes.is_empty());

    let (recipes, total) = repo.get_paginated(&favorites, None, Page::default()).await?;
    assert_eq!(recipes.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests a page number far past the end of the listing.
///
/// Verifies that the largest `u64` page from a query string is clamped before reaching
/// the paginator, so the offset cannot overflow.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn huge_page_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::recipe::create_recipe(db, author.id).await?;

    let query = RecipeListQuery::parse(Some("page=18446744073709551615")).unwrap();

    let (recipes, total) = RecipeRepository::new(db)
        .get_paginated(&query.filter, None, query.page)
        .await?;

    assert_eq!(total, 1);
    assert!(recipes.is_empty());

    Ok(())
}
