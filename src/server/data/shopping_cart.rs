use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::shopping_cart::ShoppingList;

/// Shopping cart entries linking users to recipes.
pub struct ShoppingCartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingCartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShoppingCart::find()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the entry, returning false if there was none
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShoppingCart::delete_many()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums ingredient amounts across every recipe in the user's cart.
    ///
    /// # Returns
    /// - `Ok(ShoppingList)` - Totals per ingredient name and unit; empty for an empty cart
    /// - `Err(DbErr)` - Database error
    pub async fn build_shopping_list(&self, user_id: i32) -> Result<ShoppingList, DbErr> {
        let recipe_ids: Vec<i32> = entity::prelude::ShoppingCart::find()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entry| entry.recipe_id)
            .collect();

        let mut list = ShoppingList::new();
        if recipe_ids.is_empty() {
            return Ok(list);
        }

        let amounts = entity::prelude::IngredientAmount::find()
            .filter(entity::ingredient_amount::Column::RecipeId.is_in(recipe_ids))
            .all(self.db)
            .await?;

        let ingredient_ids: Vec<i32> = amounts.iter().map(|amount| amount.ingredient_id).collect();
        if ingredient_ids.is_empty() {
            return Ok(list);
        }

        let ingredients: HashMap<i32, entity::ingredient::Model> =
            entity::prelude::Ingredient::find()
                .filter(entity::ingredient::Column::Id.is_in(ingredient_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|ingredient| (ingredient.id, ingredient))
                .collect();

        for amount in amounts {
            if let Some(ingredient) = ingredients.get(&amount.ingredient_id) {
                list.add(&ingredient.name, &ingredient.measurement_unit, amount.amount);
            }
        }

        Ok(list)
    }
}
