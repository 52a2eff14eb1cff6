use super::*;

/// Tests aggregating ingredients across the cart.
///
/// Verifies that amounts for the same ingredient and unit are summed across recipes,
/// that lines are sorted by name, and that recipes outside the cart are ignored.
///
/// Expected: Ok with two summed lines
#[tokio::test]
async fn sums_amounts_across_recipes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let shopper = factory::user::create_user(db).await?;
    let sugar = factory::ingredient::create_ingredient_named(db, "Sugar", "g").await?;
    let butter = factory::ingredient::create_ingredient_named(db, "Butter", "g").await?;

    let cake = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(sugar.id, 100)
        .ingredient(butter.id, 50)
        .build()
        .await?;
    let cookies = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(sugar.id, 30)
        .build()
        .await?;
    let ignored = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(sugar.id, 1000)
        .build()
        .await?;
    factory::link::create_shopping_cart_entry(db, shopper.id, cake.id).await?;
    factory::link::create_shopping_cart_entry(db, shopper.id, cookies.id).await?;
    factory::link::create_shopping_cart_entry(db, author.id, ignored.id).await?;

    let list = ShoppingCartRepository::new(db)
        .build_shopping_list(shopper.id)
        .await?;

    assert_eq!(list.render(), "Butter – 50g.\nSugar – 130g.\n");

    Ok(())
}

/// Tests an empty cart.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_cart_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::user::create_user(db).await?;

    let list = ShoppingCartRepository::new(db)
        .build_shopping_list(shopper.id)
        .await?;

    assert_eq!(list, ShoppingList::new());
    assert_eq!(list.render(), "");

    Ok(())
}
