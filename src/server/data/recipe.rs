//! Recipe data repository.
//!
//! Writes go through a transaction so a recipe never exists without its tag and
//! ingredient links. Reads assemble the full `Recipe` read model with batched queries:
//! one query per related table for a whole page, joined up in memory.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::server::model::{
    filter::RecipeFilter,
    pagination::Page,
    recipe::{
        CreateRecipeParams, IngredientAmountParam, Recipe, RecipeIngredient, RecipeSummary,
        UpdateRecipeParams,
    },
    tag::Tag,
    user::{User, UserProfile},
};

pub struct RecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a recipe with its tag links and ingredient amounts.
    ///
    /// Tag and ingredient ids must already be known to exist.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new recipe
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateRecipeParams) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;

        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            name: ActiveValue::Set(params.name),
            image: ActiveValue::Set(params.image),
            text: ActiveValue::Set(params.text),
            cooking_time: ActiveValue::Set(params.cooking_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_tags(&txn, recipe.id, &params.tags).await?;
        insert_ingredients(&txn, recipe.id, &params.ingredients).await?;

        txn.commit().await?;

        Ok(recipe.id)
    }

    /// Applies a partial update; provided tag or ingredient lists replace the old links.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe updated
    /// - `Ok(false)` - No recipe with that id
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn update(&self, id: i32, params: UpdateRecipeParams) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Recipe::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        let mut active: entity::recipe::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(text) = params.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(cooking_time) = params.cooking_time {
            active.cooking_time = ActiveValue::Set(cooking_time);
        }
        if active.is_changed() {
            active.update(&txn).await?;
        }

        if let Some(tags) = params.tags {
            entity::prelude::TagRecipe::delete_many()
                .filter(entity::tag_recipe::Column::RecipeId.eq(id))
                .exec(&txn)
                .await?;
            insert_tags(&txn, id, &tags).await?;
        }

        if let Some(ingredients) = params.ingredients {
            entity::prelude::IngredientAmount::delete_many()
                .filter(entity::ingredient_amount::Column::RecipeId.eq(id))
                .exec(&txn)
                .await?;
            insert_ingredients(&txn, id, &ingredients).await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Deletes a recipe; its links, favorites and cart entries cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Recipe::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the author of a recipe, or None if the recipe does not exist.
    pub async fn find_author_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Recipe::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|recipe| recipe.author_id))
    }

    pub async fn find_summary(&self, id: i32) -> Result<Option<RecipeSummary>, DbErr> {
        let entity = entity::prelude::Recipe::find_by_id(id).one(self.db).await?;

        Ok(entity.map(RecipeSummary::from_entity))
    }

    /// Loads a fully assembled recipe as seen by `viewer_id`.
    pub async fn get_by_id(
        &self,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Option<Recipe>, DbErr> {
        let Some(entity) = entity::prelude::Recipe::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut recipes = self.assemble(vec![entity], viewer_id).await?;

        Ok(recipes.pop())
    }

    /// Gets one page of recipes matching `filter`, ordered by id.
    ///
    /// The favorite and shopping cart predicates only apply when `viewer_id` is set.
    ///
    /// # Returns
    /// - `Ok((recipes, total))` - Recipes for the page and the number of matching recipes
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &RecipeFilter,
        viewer_id: Option<i32>,
        page: Page,
    ) -> Result<(Vec<Recipe>, u64), DbErr> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if !filter.tags.is_empty() {
            let recipe_ids = self.recipe_ids_with_any_tag(&filter.tags).await?;
            query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
        }

        if let Some(viewer_id) = viewer_id {
            if filter.is_favorited {
                let recipe_ids: Vec<i32> = entity::prelude::Favorite::find()
                    .filter(entity::favorite::Column::UserId.eq(viewer_id))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|favorite| favorite.recipe_id)
                    .collect();
                query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
            }

            if filter.is_in_shopping_cart {
                let recipe_ids: Vec<i32> = entity::prelude::ShoppingCart::find()
                    .filter(entity::shopping_cart::Column::UserId.eq(viewer_id))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|entry| entry.recipe_id)
                    .collect();
                query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
            }
        }

        let paginator = query
            .order_by_asc(entity::recipe::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;
        let recipes = self.assemble(entities, viewer_id).await?;

        Ok((recipes, total))
    }

    /// Gets an author's recipes in short form, newest first, optionally truncated.
    pub async fn get_summaries_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeSummary>, DbErr> {
        let mut query = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(RecipeSummary::from_entity).collect())
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    /// Distinct ids of recipes carrying at least one tag with a slug in `slugs`.
    async fn recipe_ids_with_any_tag(&self, slugs: &[String]) -> Result<Vec<i32>, DbErr> {
        let tag_ids: Vec<i32> = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Slug.is_in(slugs.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();

        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: BTreeSet<i32> = entity::prelude::TagRecipe::find()
            .filter(entity::tag_recipe::Column::TagId.is_in(tag_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.recipe_id)
            .collect();

        Ok(recipe_ids.into_iter().collect())
    }

    /// Builds read models for `entities`, keeping their order.
    async fn assemble(
        &self,
        entities: Vec<entity::recipe::Model>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<Recipe>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = entities.iter().map(|recipe| recipe.id).collect();
        let author_ids: Vec<i32> = entities
            .iter()
            .map(|recipe| recipe.author_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Authors
        let authors: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, User::from_entity(user)))
            .collect();

        // Tag links and tags
        let tag_links = entity::prelude::TagRecipe::find()
            .filter(entity::tag_recipe::Column::RecipeId.is_in(recipe_ids.clone()))
            .all(self.db)
            .await?;
        let tag_ids: Vec<i32> = tag_links.iter().map(|link| link.tag_id).collect();
        let tags: HashMap<i32, Tag> = if tag_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Tag::find()
                .filter(entity::tag::Column::Id.is_in(tag_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|tag| (tag.id, Tag::from_entity(tag)))
                .collect()
        };

        // Ingredient amounts and ingredients
        let amounts = entity::prelude::IngredientAmount::find()
            .filter(entity::ingredient_amount::Column::RecipeId.is_in(recipe_ids.clone()))
            .order_by_asc(entity::ingredient_amount::Column::Id)
            .all(self.db)
            .await?;
        let ingredient_ids: Vec<i32> = amounts.iter().map(|amount| amount.ingredient_id).collect();
        let ingredients: HashMap<i32, entity::ingredient::Model> = if ingredient_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Ingredient::find()
                .filter(entity::ingredient::Column::Id.is_in(ingredient_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|ingredient| (ingredient.id, ingredient))
                .collect()
        };

        // Viewer-relative flags
        let (followed, favorited, in_cart) = match viewer_id {
            Some(viewer_id) => {
                let followed: HashSet<i32> = entity::prelude::Follow::find()
                    .filter(entity::follow::Column::UserId.eq(viewer_id))
                    .filter(entity::follow::Column::AuthorId.is_in(author_ids))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|follow| follow.author_id)
                    .collect();
                let favorited: HashSet<i32> = entity::prelude::Favorite::find()
                    .filter(entity::favorite::Column::UserId.eq(viewer_id))
                    .filter(entity::favorite::Column::RecipeId.is_in(recipe_ids.clone()))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|favorite| favorite.recipe_id)
                    .collect();
                let in_cart: HashSet<i32> = entity::prelude::ShoppingCart::find()
                    .filter(entity::shopping_cart::Column::UserId.eq(viewer_id))
                    .filter(entity::shopping_cart::Column::RecipeId.is_in(recipe_ids))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|entry| entry.recipe_id)
                    .collect();
                (followed, favorited, in_cart)
            }
            None => (HashSet::new(), HashSet::new(), HashSet::new()),
        };

        let mut tags_by_recipe: HashMap<i32, Vec<Tag>> = HashMap::new();
        for link in tag_links {
            if let Some(tag) = tags.get(&link.tag_id) {
                tags_by_recipe
                    .entry(link.recipe_id)
                    .or_default()
                    .push(tag.clone());
            }
        }
        for recipe_tags in tags_by_recipe.values_mut() {
            recipe_tags.sort_by_key(|tag| tag.id);
        }

        let mut ingredients_by_recipe: HashMap<i32, Vec<RecipeIngredient>> = HashMap::new();
        for amount in amounts {
            if let Some(ingredient) = ingredients.get(&amount.ingredient_id) {
                ingredients_by_recipe
                    .entry(amount.recipe_id)
                    .or_default()
                    .push(RecipeIngredient {
                        id: ingredient.id,
                        name: ingredient.name.clone(),
                        measurement_unit: ingredient.measurement_unit.clone(),
                        amount: amount.amount,
                    });
            }
        }

        let mut recipes = Vec::with_capacity(entities.len());
        for entity in entities {
            let Some(author) = authors.get(&entity.author_id) else {
                return Err(DbErr::RecordNotFound(format!(
                    "Author {} of recipe {} not found",
                    entity.author_id, entity.id
                )));
            };

            recipes.push(Recipe {
                id: entity.id,
                author: UserProfile {
                    user: author.clone(),
                    is_subscribed: followed.contains(&entity.author_id),
                },
                tags: tags_by_recipe.remove(&entity.id).unwrap_or_default(),
                ingredients: ingredients_by_recipe.remove(&entity.id).unwrap_or_default(),
                is_favorited: favorited.contains(&entity.id),
                is_in_shopping_cart: in_cart.contains(&entity.id),
                name: entity.name,
                image: entity.image,
                text: entity.text,
                cooking_time: entity.cooking_time,
            });
        }

        Ok(recipes)
    }
}

async fn insert_tags<C: sea_orm::ConnectionTrait>(
    db: &C,
    recipe_id: i32,
    tag_ids: &[i32],
) -> Result<(), DbErr> {
    for tag_id in tag_ids {
        entity::tag_recipe::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            tag_id: ActiveValue::Set(*tag_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

async fn insert_ingredients<C: sea_orm::ConnectionTrait>(
    db: &C,
    recipe_id: i32,
    ingredients: &[IngredientAmountParam],
) -> Result<(), DbErr> {
    for ingredient in ingredients {
        entity::ingredient_amount::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient.ingredient_id),
            amount: ActiveValue::Set(ingredient.amount),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}
