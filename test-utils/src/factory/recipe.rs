//! Recipe factory for creating test recipes together with their tag and ingredient links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// 1x1 transparent PNG encoded as a data URI.
pub const TEST_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Factory for creating test recipes.
///
/// Tag and ingredient links are inserted after the recipe row; the referenced tags and
/// ingredients must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let recipe = RecipeFactory::new(&db, author.id)
///     .name("Borscht")
///     .tag(tag.id)
///     .ingredient(beet.id, 300)
///     .build()
///     .await?;
/// ```
pub struct RecipeFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    name: String,
    image: String,
    text: String,
    cooking_time: i32,
    tags: Vec<i32>,
    ingredients: Vec<(i32, i32)>,
}

impl<'a> RecipeFactory<'a> {
    /// Defaults: name `"Recipe {id}"`, 30 minutes cooking time, no tags or ingredients.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            name: format!("Recipe {}", id),
            image: TEST_IMAGE.to_string(),
            text: format!("Instructions for recipe {}", id),
            cooking_time: 30,
            tags: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn cooking_time(mut self, cooking_time: i32) -> Self {
        self.cooking_time = cooking_time;
        self
    }

    /// Links an existing tag to the recipe.
    pub fn tag(mut self, tag_id: i32) -> Self {
        self.tags.push(tag_id);
        self
    }

    /// Links an existing ingredient with the given amount.
    pub fn ingredient(mut self, ingredient_id: i32, amount: i32) -> Self {
        self.ingredients.push((ingredient_id, amount));
        self
    }

    /// Builds and inserts the recipe and its links.
    ///
    /// # Returns
    /// - `Ok(entity::recipe::Model)` - Created recipe row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            text: ActiveValue::Set(self.text),
            cooking_time: ActiveValue::Set(self.cooking_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tags {
            entity::tag_recipe::ActiveModel {
                tag_id: ActiveValue::Set(tag_id),
                recipe_id: ActiveValue::Set(recipe.id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (ingredient_id, amount) in self.ingredients {
            entity::ingredient_amount::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                ingredient_id: ActiveValue::Set(ingredient_id),
                amount: ActiveValue::Set(amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(recipe)
    }
}

/// Creates a recipe without tags or ingredients for the given author.
pub async fn create_recipe(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::recipe::Model, DbErr> {
    RecipeFactory::new(db, author_id).build().await
}
