//! Recipe service: listing, reading and writing recipes.
//!
//! Input has been shape-checked by the `*Params` constructors; this service adds the checks
//! that need the database, namely that every referenced tag and ingredient exists.

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::{ingredient::IngredientRepository, recipe::RecipeRepository, tag::TagRepository},
    error::{validation::ValidationErrors, AppError},
    model::{
        filter::RecipeListQuery,
        recipe::{
            CreateRecipeParams, IngredientAmountParam, PaginatedRecipes, Recipe,
            UpdateRecipeParams,
        },
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists recipes matching the query, as seen by `viewer_id`.
    pub async fn list(
        &self,
        query: RecipeListQuery,
        viewer_id: Option<i32>,
    ) -> Result<PaginatedRecipes, AppError> {
        let (recipes, total) = RecipeRepository::new(self.db)
            .get_paginated(&query.filter, viewer_id, query.page)
            .await?;

        Ok(PaginatedRecipes {
            recipes,
            total,
            page: query.page.page,
            per_page: query.page.per_page,
            total_pages: query.page.total_pages(total),
        })
    }

    pub async fn get_by_id(&self, id: i32, viewer_id: Option<i32>) -> Result<Recipe, AppError> {
        RecipeRepository::new(self.db)
            .get_by_id(id, viewer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
    }

    /// Returns the author of a recipe, for permission checks before a write.
    ///
    /// # Returns
    /// - `Ok(i32)` - Author id
    /// - `Err(AppError::NotFound)` - No recipe with that id
    pub async fn get_author_id(&self, id: i32) -> Result<i32, AppError> {
        RecipeRepository::new(self.db)
            .find_author_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
    }

    /// Creates a recipe and returns it as seen by its author.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - The created recipe
    /// - `Err(AppError::ValidationErr)` - Unknown tag or ingredient ids
    pub async fn create(&self, params: CreateRecipeParams) -> Result<Recipe, AppError> {
        self.check_references(Some(&params.tags), Some(&params.ingredients))
            .await?;

        let author_id = params.author_id;
        let id = RecipeRepository::new(self.db).create(params).await?;

        tracing::info!("User {} created recipe {}", author_id, id);

        self.get_by_id(id, Some(author_id)).await
    }

    /// Applies a partial update and returns the recipe as seen by `viewer_id`.
    ///
    /// Permission checks happen before this call.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateRecipeParams,
        viewer_id: i32,
    ) -> Result<Recipe, AppError> {
        self.check_references(params.tags.as_deref(), params.ingredients.as_deref())
            .await?;

        if !RecipeRepository::new(self.db).update(id, params).await? {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        self.get_by_id(id, Some(viewer_id)).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RecipeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        tracing::info!("Deleted recipe {}", id);

        Ok(())
    }

    /// Reports every referenced tag or ingredient id that does not exist.
    async fn check_references(
        &self,
        tags: Option<&[i32]>,
        ingredients: Option<&[IngredientAmountParam]>,
    ) -> Result<(), AppError> {
        let mut errors = ValidationErrors::new();

        if let Some(tags) = tags {
            let existing: HashSet<i32> = TagRepository::new(self.db)
                .existing_ids(tags)
                .await?
                .into_iter()
                .collect();
            for id in tags.iter().filter(|id| !existing.contains(id)) {
                errors.add("tags", format!("Tag {} does not exist.", id));
            }
        }

        if let Some(ingredients) = ingredients {
            let ids: Vec<i32> = ingredients
                .iter()
                .map(|ingredient| ingredient.ingredient_id)
                .collect();
            let existing: HashSet<i32> = IngredientRepository::new(self.db)
                .existing_ids(&ids)
                .await?
                .into_iter()
                .collect();
            for id in ids.iter().filter(|id| !existing.contains(id)) {
                errors.add("ingredients", format!("Ingredient {} does not exist.", id));
            }
        }

        Ok(errors.into_result(())?)
    }
}
