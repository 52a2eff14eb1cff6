//! Factories for the user-to-recipe and user-to-user link tables.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `recipe_id` as a favorite of `user_id`.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Puts `recipe_id` into the shopping cart of `user_id`.
pub async fn create_shopping_cart_entry(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::shopping_cart::Model, DbErr> {
    entity::shopping_cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Subscribes `user_id` to `author_id`.
pub async fn create_follow(
    db: &DatabaseConnection,
    user_id: i32,
    author_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        author_id: ActiveValue::Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
