use super::*;

/// Tests short recipe lists for an author.
///
/// Verifies newest-first ordering, truncation by the limit, and that the count
/// ignores the limit.
///
/// Expected: Ok with the two newest recipes and a count of 3
#[tokio::test]
async fn lists_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::recipe::create_recipe(db, author.id).await?.id);
    }
    factory::recipe::create_recipe(db, other.id).await?;

    let repo = RecipeRepository::new(db);
    let summaries = repo.get_summaries_by_author(author.id, Some(2)).await?;

    assert_eq!(
        summaries.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );
    assert_eq!(repo.count_by_author(author.id).await?, 3);

    let all = repo.get_summaries_by_author(author.id, None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
