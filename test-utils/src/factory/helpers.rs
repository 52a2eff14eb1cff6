//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Monotonic counter backing unique test values across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author together with one recipe carrying a single tag and ingredient.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, recipe))` - The inserted user and recipe
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::recipe::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let tag = crate::factory::tag::create_tag(db).await?;
    let ingredient = crate::factory::ingredient::create_ingredient(db).await?;

    let recipe = crate::factory::recipe::RecipeFactory::new(db, author.id)
        .tag(tag.id)
        .ingredient(ingredient.id, 100)
        .build()
        .await?;

    Ok((author, recipe))
}
