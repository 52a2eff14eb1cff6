//! Query filters for recipe and ingredient listings.
//!
//! Recipe listings take repeated `tags` parameters (`?tags=a&tags=b`), which a plain
//! `serde` query struct cannot express, so `RecipeListQuery` parses the raw query
//! string itself.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::validation::ValidationErrors,
    model::pagination::{Page, DEFAULT_PAGE_SIZE},
};

/// Predicates applied to the recipe listing, all AND-ed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Only recipes by this user id.
    pub author: Option<i32>,
    /// Recipes carrying ANY of these tag slugs; empty means no tag filter.
    pub tags: Vec<String>,
    /// Only the requester's favorites. Ignored for anonymous requests.
    pub is_favorited: bool,
    /// Only recipes in the requester's shopping cart. Ignored for anonymous requests.
    pub is_in_shopping_cart: bool,
}

/// Parsed `GET /api/recipes` query string.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeListQuery {
    pub filter: RecipeFilter,
    pub page: Page,
}

impl RecipeListQuery {
    /// Parses a raw query string.
    ///
    /// Unknown parameters are ignored. Malformed numbers are reported per field.
    pub fn parse(query: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut filter = RecipeFilter::default();
        let mut page = 0;
        let mut limit = DEFAULT_PAGE_SIZE;

        let pairs = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            match key.as_ref() {
                "author" => match value.parse::<i32>() {
                    Ok(author) => filter.author = Some(author),
                    Err(_) => errors.add("author", "A valid user id is required."),
                },
                "tags" => {
                    if !value.is_empty() && !filter.tags.iter().any(|slug| *slug == value) {
                        filter.tags.push(value.into_owned());
                    }
                }
                "is_favorited" => match parse_flag(&value) {
                    Some(flag) => filter.is_favorited = flag,
                    None => errors.add("is_favorited", "Must be one of 1, 0, true, false."),
                },
                "is_in_shopping_cart" => match parse_flag(&value) {
                    Some(flag) => filter.is_in_shopping_cart = flag,
                    None => errors.add(
                        "is_in_shopping_cart",
                        "Must be one of 1, 0, true, false.",
                    ),
                },
                "page" => match value.parse::<u64>() {
                    Ok(value) => page = value,
                    Err(_) => errors.add("page", "A valid page number is required."),
                },
                "limit" => match value.parse::<u64>() {
                    Ok(value) => limit = value,
                    Err(_) => errors.add("limit", "A valid page size is required."),
                },
                _ => {}
            }
        }

        errors.into_result(Self {
            filter,
            page: Page::new(page, limit),
        })
    }
}

/// Accepts `1`, `true`, `0` and `false` (case-insensitive).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" | "" => Some(false),
        _ => None,
    }
}

/// `?name=` filter for the ingredient listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientFilter {
    /// Case-insensitive name prefix
    pub name: Option<String>,
}

impl IngredientFilter {
    /// Case-insensitive starts-with over the full Unicode range.
    pub fn matches(&self, ingredient_name: &str) -> bool {
        match self.name.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(prefix) => ingredient_name
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),
        }
    }
}
