use sea_orm::DatabaseConnection;

use crate::server::{
    data::ingredient::IngredientRepository,
    error::AppError,
    model::{
        filter::IngredientFilter,
        ingredient::{Ingredient, IngredientParams},
    },
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients whose name starts with the filter prefix, ignoring case.
    ///
    /// Matching happens after loading so that case folding covers non-ASCII names,
    /// which SQLite's `LIKE` does not.
    pub async fn list(&self, filter: &IngredientFilter) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = IngredientRepository::new(self.db).get_all().await?;

        Ok(ingredients
            .into_iter()
            .filter(|ingredient| filter.matches(&ingredient.name))
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Ingredient, AppError> {
        IngredientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ingredient not found".to_string()))
    }

    pub async fn create(&self, params: IngredientParams) -> Result<Ingredient, AppError> {
        Ok(IngredientRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: IngredientParams) -> Result<Ingredient, AppError> {
        IngredientRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Ingredient not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !IngredientRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Ingredient not found".to_string()));
        }

        Ok(())
    }
}
