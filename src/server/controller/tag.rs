use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        tag::{TagDto, TagInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::tag::{Tag, TagParams},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping recipe tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// List every tag.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    let dtos: Vec<TagDto> = tags.into_iter().map(Tag::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Create a tag.
///
/// # Access Control
/// - `Admin` - Only admins manage the tag catalog
///
/// # Returns
/// - `201 Created` - The new tag, color upper-cased
/// - `400 Bad Request` - Field errors, including a name, color or slug already in use
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = TagInputDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<TagInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = TagParams::from_dto(payload)?;

    let tag = TagService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Replace a tag. Admin only.
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = TagInputDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<TagInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = TagParams::from_dto(payload)?;

    let tag = TagService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag. Admin only; recipes lose the tag.
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tag"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TagService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
