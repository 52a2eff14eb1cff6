use super::*;

/// Tests filtering a list of ids down to existing tags.
///
/// Expected: Ok with only the stored id returned
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let existing = TagRepository::new(db)
        .existing_ids(&[tag.id, tag.id + 100])
        .await?;

    assert_eq!(existing, vec![tag.id]);

    Ok(())
}
