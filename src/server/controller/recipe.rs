use axum::{
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        recipe::{
            CreateRecipeDto, PaginatedRecipesDto, RecipeDto, RecipeSummaryDto, UpdateRecipeDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::{
            filter::RecipeListQuery,
            recipe::{CreateRecipeParams, UpdateRecipeParams},
            shopping_cart::SHOPPING_LIST_FILENAME,
        },
        service::{
            favorite::FavoriteService, recipe::RecipeService, shopping_cart::ShoppingCartService,
        },
        state::AppState,
    },
};

/// Tag for grouping recipe endpoints in OpenAPI documentation
pub static RECIPE_TAG: &str = "recipe";

/// Get a filtered, paginated list of recipes.
///
/// `tags` may repeat and matches recipes carrying any of the slugs. `is_favorited` and
/// `is_in_shopping_cart` only apply to logged in users.
///
/// # Access Control
/// Public. Per-user flags are false for anonymous requests.
///
/// # Returns
/// - `200 OK` - Paginated recipes
/// - `400 Bad Request` - Malformed filter values
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)"),
        ("author" = Option<i32>, Query, description = "Only recipes by this user"),
        ("tags" = Option<Vec<String>>, Query, description = "Tag slugs, repeatable"),
        ("is_favorited" = Option<String>, Query, description = "1 or true to list favorites"),
        ("is_in_shopping_cart" = Option<String>, Query, description = "1 or true to list the cart")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recipes", body = PaginatedRecipesDto),
        (status = 400, description = "Invalid filter", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    session: Session,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let query = RecipeListQuery::parse(query.as_deref())?;

    let recipes = RecipeService::new(&state.db)
        .list(query, viewer.map(|user| user.id))
        .await?;

    Ok((StatusCode::OK, Json(recipes.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let recipe = RecipeService::new(&state.db)
        .get_by_id(id, viewer.map(|user| user.id))
        .await?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Publish a recipe as the logged in user.
///
/// # Returns
/// - `201 Created` - The new recipe
/// - `400 Bad Request` - Field errors, including unknown tag or ingredient ids
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Successfully created recipe", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateRecipeParams::from_dto(user.id, payload)?;

    let recipe = RecipeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

/// Partially update a recipe.
///
/// `tags` and `ingredients`, when present, replace the whole set.
///
/// # Access Control
/// - `AuthorOrAdmin` - The recipe's author or an admin
///
/// # Returns
/// - `200 OK` - Updated recipe
/// - `400 Bad Request` - Field errors
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither the author nor an admin
/// - `404 Not Found` - No such recipe
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Successfully updated recipe", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = RecipeService::new(&state.db);

    let author_id = service.get_author_id(id).await?;
    AuthGuard::check(&user, &[Permission::AuthorOrAdmin(author_id)])?;

    let params = UpdateRecipeParams::from_dto(payload)?;

    let recipe = service.update(id, params, user.id).await?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Delete a recipe. Author or admin only.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted recipe"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = RecipeService::new(&state.db);

    let author_id = service.get_author_id(id).await?;
    AuthGuard::check(&user, &[Permission::AuthorOrAdmin(author_id)])?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the logged in user's favorites.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Successfully added to favorites", body = RecipeSummaryDto),
        (status = 400, description = "Recipe already added", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let recipe = FavoriteService::new(&state.db).add(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Successfully removed from favorites"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found or not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FavoriteService::new(&state.db).remove(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Put a recipe into the logged in user's shopping cart.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Successfully added to the shopping cart", body = RecipeSummaryDto),
        (status = 400, description = "Recipe already added", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let recipe = ShoppingCartService::new(&state.db).add(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Successfully removed from the shopping cart"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in the cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ShoppingCartService::new(&state.db)
        .remove(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the shopping list for every recipe in the cart.
///
/// Plain text attachment, one line per ingredient and unit with amounts summed across
/// recipes, sorted by ingredient name.
///
/// # Returns
/// - `200 OK` - `shop_list.txt`
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Shopping list", body = String, content_type = "text/plain"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let list = ShoppingCartService::new(&state.db)
        .shopping_list(user.id)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILENAME),
        ),
    ];

    Ok((StatusCode::OK, headers, list.render()))
}
