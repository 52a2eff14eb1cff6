use super::*;

/// Tests creating an ingredient.
///
/// Expected: Ok with ingredient stored and retrievable by id
#[tokio::test]
async fn creates_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IngredientRepository::new(db);
    let ingredient = repo
        .create(IngredientParams {
            name: "Flour".to_string(),
            measurement_unit: "g".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_id(ingredient.id).await?, Some(ingredient));

    Ok(())
}

/// Tests the existence filter for ingredient ids.
///
/// Expected: Ok with only stored ids returned
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::ingredient::create_ingredient(db).await?;
    let second = factory::ingredient::create_ingredient(db).await?;

    let mut existing = IngredientRepository::new(db)
        .existing_ids(&[second.id, first.id, second.id + 50])
        .await?;
    existing.sort();

    assert_eq!(existing, vec![first.id, second.id]);
    assert!(IngredientRepository::new(db)
        .existing_ids(&[])
        .await?
        .is_empty());

    Ok(())
}
