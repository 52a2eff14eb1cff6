use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        ingredient::{IngredientDto, IngredientInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::{
            filter::IngredientFilter,
            ingredient::{Ingredient, IngredientParams},
        },
        service::ingredient::IngredientService,
        state::AppState,
    },
};

/// Tag for grouping ingredient endpoints in OpenAPI documentation
pub static INGREDIENT_TAG: &str = "ingredient";

/// List ingredients, optionally narrowed by a case-insensitive name prefix.
///
/// # Access Control
/// Public.
///
/// # Returns
/// - `200 OK` - Matching ingredients, not paginated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientFilter),
    responses(
        (status = 200, description = "Successfully retrieved ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_ingredients(
    State(state): State<AppState>,
    Query(filter): Query<IngredientFilter>,
) -> Result<impl IntoResponse, AppError> {
    let ingredients = IngredientService::new(&state.db).list(&filter).await?;

    let dtos: Vec<IngredientDto> = ingredients
        .into_iter()
        .map(Ingredient::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(
        ("id" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ingredient", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient = IngredientService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// Create an ingredient. Admin only.
#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    request_body = IngredientInputDto,
    responses(
        (status = 201, description = "Successfully created ingredient", body = IngredientDto),
        (status = 400, description = "Invalid ingredient data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<IngredientInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = IngredientParams::from_dto(payload)?;

    let ingredient = IngredientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ingredient.into_dto())))
}

/// Replace an ingredient. Admin only.
#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(
        ("id" = i32, Path, description = "Ingredient ID")
    ),
    request_body = IngredientInputDto,
    responses(
        (status = 200, description = "Successfully updated ingredient", body = IngredientDto),
        (status = 400, description = "Invalid ingredient data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<IngredientInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = IngredientParams::from_dto(payload)?;

    let ingredient = IngredientService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// Delete an ingredient. Admin only; recipes using it lose that line.
#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(
        ("id" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted ingredient"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    IngredientService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
