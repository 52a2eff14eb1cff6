use super::*;

/// Tests replacing an ingredient's fields.
///
/// Expected: Ok(Some) with the new name and unit
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ingredient = factory::ingredient::create_ingredient_named(db, "Milk", "ml").await?;

    let updated = IngredientRepository::new(db)
        .update(
            ingredient.id,
            IngredientParams {
                name: "Whole milk".to_string(),
                measurement_unit: "l".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Whole milk");
    assert_eq!(updated.measurement_unit, "l");

    Ok(())
}

/// Tests updating a missing ingredient.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = IngredientRepository::new(db)
        .update(
            3,
            IngredientParams {
                name: "Salt".to_string(),
                measurement_unit: "g".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
