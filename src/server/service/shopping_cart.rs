use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recipe::RecipeRepository, shopping_cart::ShoppingCartRepository},
    error::AppError,
    model::{recipe::RecipeSummary, shopping_cart::ShoppingList},
};

pub struct ShoppingCartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingCartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts a recipe into the shopping cart of `user_id`.
    ///
    /// # Returns
    /// - `Ok(RecipeSummary)` - The added recipe
    /// - `Err(AppError::NotFound)` - No recipe with that id
    /// - `Err(AppError::BadRequest)` - Already in the cart
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<RecipeSummary, AppError> {
        let Some(recipe) = RecipeRepository::new(self.db).find_summary(recipe_id).await? else {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        };

        let cart_repo = ShoppingCartRepository::new(self.db);
        if cart_repo.exists(user_id, recipe_id).await? {
            return Err(AppError::BadRequest("Recipe already added".to_string()));
        }

        cart_repo.create(user_id, recipe_id).await?;

        Ok(recipe)
    }

    /// Takes a recipe out of the cart.
    ///
    /// # Returns
    /// - `Ok(())` - Removed
    /// - `Err(AppError::NotFound)` - No such recipe, or it is not in the cart
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), AppError> {
        if RecipeRepository::new(self.db)
            .find_author_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        if !ShoppingCartRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Recipe is not in the shopping cart".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds the aggregated ingredient list for everything in the cart.
    pub async fn shopping_list(&self, user_id: i32) -> Result<ShoppingList, AppError> {
        Ok(ShoppingCartRepository::new(self.db)
            .build_shopping_list(user_id)
            .await?)
    }
}
