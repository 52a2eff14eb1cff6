//! Recipe domain models and parameters.
//!
//! A `Recipe` is the fully assembled read model: author profile, tags, ingredient amounts
//! and the requester-relative flags. `CreateRecipeParams` / `UpdateRecipeParams` carry
//! validated write input; checks that need the database (tag and ingredient existence)
//! run in `RecipeService`.

use std::collections::HashSet;

use crate::{
    model::recipe::{
        CreateRecipeDto, IngredientAmountDto, PaginatedRecipesDto, RecipeDto,
        RecipeIngredientDto, RecipeSummaryDto, UpdateRecipeDto,
    },
    server::{
        error::validation::{ValidationErrors, REQUIRED},
        model::{tag::Tag, user::UserProfile},
        util::validate::{self, is_valid_image},
    },
};

pub const RECIPE_NAME_MAX_LENGTH: usize = 200;
pub const MIN_AMOUNT: i64 = 1;
/// Upper bound of a positive small integer column.
pub const MAX_AMOUNT: i64 = 32767;
pub const MIN_COOKING_TIME: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i32,
    pub author: UserProfile,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

impl Recipe {
    pub fn into_dto(self) -> RecipeDto {
        RecipeDto {
            id: self.id,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            author: self.author.into_dto(),
            ingredients: self
                .ingredients
                .into_iter()
                .map(RecipeIngredient::into_dto)
                .collect(),
            is_favorited: self.is_favorited,
            is_in_shopping_cart: self.is_in_shopping_cart,
            name: self.name,
            image: self.image,
            text: self.text,
            cooking_time: self.cooking_time,
        }
    }
}

/// Ingredient line of a recipe; `id` is the ingredient id.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl RecipeIngredient {
    pub fn into_dto(self) -> RecipeIngredientDto {
        RecipeIngredientDto {
            id: self.id,
            name: self.name,
            measurement_unit: self.measurement_unit,
            amount: self.amount,
        }
    }
}

/// Short recipe form for favorites, the shopping cart and subscriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl RecipeSummary {
    pub fn into_dto(self) -> RecipeSummaryDto {
        RecipeSummaryDto {
            id: self.id,
            name: self.name,
            image: self.image,
            cooking_time: self.cooking_time,
        }
    }

    pub fn from_entity(entity: entity::recipe::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            cooking_time: entity.cooking_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRecipes {
    pub recipes: Vec<Recipe>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRecipes {
    pub fn into_dto(self) -> PaginatedRecipesDto {
        PaginatedRecipesDto {
            recipes: self.recipes.into_iter().map(Recipe::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientAmountParam {
    pub ingredient_id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecipeParams {
    pub author_id: i32,
    pub tags: Vec<i32>,
    pub ingredients: Vec<IngredientAmountParam>,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

impl CreateRecipeParams {
    pub fn from_dto(author_id: i32, dto: CreateRecipeDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let tags = match dto.tags {
            Some(tags) => check_tags(&mut errors, tags),
            None => {
                errors.add("tags", REQUIRED);
                Vec::new()
            }
        };
        let ingredients = match dto.ingredients {
            Some(ingredients) => check_ingredients(&mut errors, ingredients),
            None => {
                errors.add("ingredients", REQUIRED);
                Vec::new()
            }
        };
        let cooking_time = match dto.cooking_time {
            Some(cooking_time) => check_cooking_time(&mut errors, cooking_time),
            None => {
                errors.add("cooking_time", REQUIRED);
                None
            }
        };

        let name = validate::required(&mut errors, "name", dto.name);
        let text = validate::required(&mut errors, "text", dto.text);
        let image = validate::required(&mut errors, "image", dto.image);

        if let Some(ref name) = name {
            validate::max_length(&mut errors, "name", name, RECIPE_NAME_MAX_LENGTH);
        }
        if let Some(ref image) = image {
            check_image(&mut errors, image);
        }

        match (name, text, image, cooking_time) {
            (Some(name), Some(text), Some(image), Some(cooking_time)) if errors.is_empty() => {
                Ok(Self {
                    author_id,
                    tags,
                    ingredients,
                    name,
                    image,
                    text,
                    cooking_time,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Partial recipe update; `Some` tag or ingredient lists replace the whole set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRecipeParams {
    pub tags: Option<Vec<i32>>,
    pub ingredients: Option<Vec<IngredientAmountParam>>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
}

impl UpdateRecipeParams {
    pub fn from_dto(dto: UpdateRecipeDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let tags = dto.tags.map(|tags| check_tags(&mut errors, tags));
        let ingredients = dto
            .ingredients
            .map(|ingredients| check_ingredients(&mut errors, ingredients));
        let cooking_time = dto
            .cooking_time
            .and_then(|cooking_time| check_cooking_time(&mut errors, cooking_time));

        let name = dto
            .name
            .and_then(|name| validate::required(&mut errors, "name", Some(name)));
        let text = dto
            .text
            .and_then(|text| validate::required(&mut errors, "text", Some(text)));
        let image = dto
            .image
            .and_then(|image| validate::required(&mut errors, "image", Some(image)));

        if let Some(ref name) = name {
            validate::max_length(&mut errors, "name", name, RECIPE_NAME_MAX_LENGTH);
        }
        if let Some(ref image) = image {
            check_image(&mut errors, image);
        }

        errors.into_result(Self {
            tags,
            ingredients,
            name,
            image,
            text,
            cooking_time,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn check_tags(errors: &mut ValidationErrors, tags: Vec<i32>) -> Vec<i32> {
    if tags.is_empty() {
        errors.add("tags", "Select at least one tag.");
        return tags;
    }

    let mut seen = HashSet::new();
    if !tags.iter().all(|id| seen.insert(*id)) {
        errors.add("tags", "Tags must not repeat.");
    }

    tags
}

fn check_ingredients(
    errors: &mut ValidationErrors,
    ingredients: Vec<IngredientAmountDto>,
) -> Vec<IngredientAmountParam> {
    if ingredients.is_empty() {
        errors.add("ingredients", "Select at least one ingredient.");
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut duplicate = false;
    let mut out_of_range = false;
    let mut params = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        if !seen.insert(ingredient.id) {
            duplicate = true;
        }
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&ingredient.amount) {
            out_of_range = true;
            continue;
        }
        params.push(IngredientAmountParam {
            ingredient_id: ingredient.id,
            amount: ingredient.amount as i32,
        });
    }

    if duplicate {
        errors.add("ingredients", "Ingredients must not repeat.");
    }
    if out_of_range {
        errors.add(
            "ingredients",
            format!(
                "Ingredient amount must be between {} and {}.",
                MIN_AMOUNT, MAX_AMOUNT
            ),
        );
    }

    params
}

fn check_cooking_time(errors: &mut ValidationErrors, cooking_time: i64) -> Option<i32> {
    match i32::try_from(cooking_time) {
        Ok(minutes) if cooking_time >= MIN_COOKING_TIME => Some(minutes),
        _ => {
            errors.add(
                "cooking_time",
                format!(
                    "Cooking time must be at least {} minute.",
                    MIN_COOKING_TIME
                ),
            );
            None
        }
    }
}

fn check_image(errors: &mut ValidationErrors, image: &str) {
    if !is_valid_image(image) {
        errors.add(
            "image",
            "Upload a valid image as a base64 data URI (data:image/<type>;base64,...).",
        );
    }
}
