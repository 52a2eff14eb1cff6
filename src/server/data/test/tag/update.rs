use super::*;

/// Tests replacing every tag field.
///
/// Expected: Ok(Some) with new values stored
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    let updated = repo
        .update(
            tag.id,
            TagParams {
                name: "Dinner".to_string(),
                color: "#123456".to_string(),
                slug: "dinner".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, tag.id);
    assert_eq!(updated.slug, "dinner");
    assert_eq!(repo.find_by_id(tag.id).await?, Some(updated));

    Ok(())
}

/// Tests updating a missing tag.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagRepository::new(db)
        .update(
            7,
            TagParams {
                name: "Dinner".to_string(),
                color: "#123456".to_string(),
                slug: "dinner".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
