//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, ingredient, recipe, tag, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodgram API",
        description = "Recipes, tag and ingredient catalogs, favorites, shopping carts and author subscriptions"
    ),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Accounts and subscriptions"),
        (name = "tag", description = "Recipe tags"),
        (name = "ingredient", description = "Ingredient catalog"),
        (name = "recipe", description = "Recipes, favorites and the shopping cart")
    )
)]
pub struct ApiDoc;

/// Builds every API route plus Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_all_users, user::register_user))
        .routes(routes!(user::get_current_user, user::update_current_user))
        .routes(routes!(user::set_password))
        .routes(routes!(user::get_subscriptions))
        .routes(routes!(user::get_user_by_id, user::delete_user))
        .routes(routes!(user::subscribe, user::unsubscribe))
        .routes(routes!(tag::get_all_tags, tag::create_tag))
        .routes(routes!(tag::get_tag_by_id, tag::update_tag, tag::delete_tag))
        .routes(routes!(
            ingredient::get_all_ingredients,
            ingredient::create_ingredient
        ))
        .routes(routes!(
            ingredient::get_ingredient_by_id,
            ingredient::update_ingredient,
            ingredient::delete_ingredient
        ))
        .routes(routes!(recipe::get_recipes, recipe::create_recipe))
        .routes(routes!(recipe::download_shopping_cart))
        .routes(routes!(
            recipe::get_recipe_by_id,
            recipe::update_recipe,
            recipe::delete_recipe
        ))
        .routes(routes!(recipe::add_favorite, recipe::remove_favorite))
        .routes(routes!(
            recipe::add_to_shopping_cart,
            recipe::remove_from_shopping_cart
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
