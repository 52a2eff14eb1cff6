use super::*;

/// Tests adding and removing a cart entry.
///
/// Expected: exists follows create and delete; a second delete returns false
#[tokio::test]
async fn creates_and_deletes_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
    let shopper = factory::user::create_user(db).await?;

    let repo = ShoppingCartRepository::new(db);
    repo.create(shopper.id, recipe.id).await?;
    assert!(repo.exists(shopper.id, recipe.id).await?);

    assert!(repo.delete(shopper.id, recipe.id).await?);
    assert!(!repo.exists(shopper.id, recipe.id).await?);
    assert!(!repo.delete(shopper.id, recipe.id).await?);

    Ok(())
}
