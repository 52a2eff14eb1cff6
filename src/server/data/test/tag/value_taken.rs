use super::*;

/// Tests uniqueness lookups per column.
///
/// Verifies that a value used by another tag is taken, and that a tag may keep its
/// own values during an update.
///
/// Expected: true for a new tag, false when excluding the holder
#[tokio::test]
async fn checks_each_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::TagFactory::new(db)
        .name("Lunch")
        .color("#00FF00")
        .slug("lunch")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    assert!(repo.value_taken(entity::tag::Column::Name, "Lunch", None).await?);
    assert!(repo.value_taken(entity::tag::Column::Color, "#00FF00", None).await?);
    assert!(repo.value_taken(entity::tag::Column::Slug, "lunch", None).await?);
    assert!(!repo
        .value_taken(entity::tag::Column::Slug, "lunch", Some(tag.id))
        .await?);
    assert!(!repo.value_taken(entity::tag::Column::Name, "Dinner", None).await?);

    Ok(())
}
