use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, recipe::RecipeRepository},
    error::AppError,
    model::recipe::RecipeSummary,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a recipe as a favorite of `user_id`.
    ///
    /// # Returns
    /// - `Ok(RecipeSummary)` - The favorited recipe
    /// - `Err(AppError::NotFound)` - No recipe with that id
    /// - `Err(AppError::BadRequest)` - Already a favorite
    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<RecipeSummary, AppError> {
        let Some(recipe) = RecipeRepository::new(self.db).find_summary(recipe_id).await? else {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        };

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.exists(user_id, recipe_id).await? {
            return Err(AppError::BadRequest("Recipe already added".to_string()));
        }

        favorite_repo.create(user_id, recipe_id).await?;

        Ok(recipe)
    }

    /// Removes a favorite mark.
    ///
    /// # Returns
    /// - `Ok(())` - Removed
    /// - `Err(AppError::NotFound)` - No such recipe, or it is not a favorite
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), AppError> {
        if RecipeRepository::new(self.db)
            .find_author_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        if !FavoriteRepository::new(self.db)
            .delete(user_id, recipe_id)
            .await?
        {
            return Err(AppError::NotFound("Recipe is not in favorites".to_string()));
        }

        Ok(())
    }
}
