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
        follow::{PaginatedSubscriptionsDto, SubscriptionDto},
        user::{CreateUserDto, PaginatedUsersDto, SetPasswordDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::{
            follow::{RecipesLimitParams, SubscriptionListParams},
            pagination::PaginationParams,
            user::{CreateUserParams, SetPasswordParams, UpdateUserParams},
        },
        service::{follow::FollowService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// # Access Control
/// Public.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Field errors, including an email or username already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto(false))))
}

/// Get a paginated list of all users.
///
/// # Access Control
/// - `Admin` - Only admins can list every user
///
/// # Returns
/// - `200 OK` - Paginated users, `is_subscribed` relative to the admin
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all(params.into_page(), viewer.id)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get the logged in user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Update the logged in user's profile.
///
/// Only the provided fields change. Email and username keep their registration rules.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Field errors
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Change the logged in user's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Current password wrong, or new password too short
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users/set_password",
    tag = USER_TAG,
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Successfully changed password"),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_password(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<SetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = SetPasswordParams::from_dto(payload)?;

    UserService::new(&state.db)
        .set_password(&user, params)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a user by id.
///
/// # Access Control
/// Any logged in user.
///
/// # Returns
/// - `200 OK` - The user, `is_subscribed` relative to the requester
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .get_profile(id, viewer.id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Delete a user and everything they own.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authors the logged in user follows.
///
/// Each entry carries the author's recipes, truncated to `recipes_limit` when given.
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    params(SubscriptionListParams),
    responses(
        (status = 200, description = "Successfully retrieved subscriptions", body = PaginatedSubscriptionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubscriptionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subscriptions = FollowService::new(&state.db)
        .list(user.id, params.page(), params.recipes_limit)
        .await?;

    Ok((StatusCode::OK, Json(subscriptions.into_dto())))
}

/// Follow an author.
///
/// # Returns
/// - `201 Created` - The new subscription
/// - `400 Bad Request` - Following oneself, or already following
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such author
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Author ID"),
        RecipesLimitParams
    ),
    responses(
        (status = 201, description = "Successfully subscribed", body = SubscriptionDto),
        (status = 400, description = "Cannot subscribe", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(params): Query<RecipesLimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subscription = FollowService::new(&state.db)
        .subscribe(user.id, author_id, params.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

/// Stop following an author.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Successfully unsubscribed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Author not found or not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FollowService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
