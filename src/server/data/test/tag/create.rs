use super::*;

/// Tests creating a tag.
///
/// Expected: Ok with tag created and listed
#[tokio::test]
async fn creates_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(TagParams {
            name: "Breakfast".to_string(),
            color: "#E26C2D".to_string(),
            slug: "breakfast".to_string(),
        })
        .await?;

    assert_eq!(tag.name, "Breakfast");
    assert_eq!(tag.color, "#E26C2D");

    let all = repo.get_all().await?;
    assert_eq!(all, vec![tag]);

    Ok(())
}

/// Tests tags are listed in id order.
///
/// Expected: Ok with tags ordered by id
#[tokio::test]
async fn lists_tags_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::tag::create_tag(db).await?;
    let second = factory::tag::create_tag(db).await?;

    let ids: Vec<i32> = TagRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
