//! User service for business logic.
//!
//! Registration, profile reads and updates, password changes and admin user management.
//! Profiles are always computed relative to a viewer so `is_subscribed` can be filled in.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{auth::AuthError, validation::ValidationErrors, AppError},
    model::{
        pagination::Page,
        user::{
            CreateUserParams, PaginatedUsers, SetPasswordParams, UpdateUserParams, User,
            UserProfile,
        },
    },
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Email or username already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut errors = ValidationErrors::new();
        if user_repo.email_taken(&params.email, None).await? {
            errors.add("email", "A user with that email already exists.");
        }
        if user_repo.username_taken(&params.username, None).await? {
            errors.add("username", "A user with that username already exists.");
        }
        errors.into_result(())?;

        let password_hash = hash_password(&params.password)?;
        let user = user_repo.create(params, password_hash).await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Gets one page of users as seen by `viewer_id`.
    pub async fn get_all(&self, page: Page, viewer_id: i32) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);
        let follow_repo = FollowRepository::new(self.db);

        let (users, total) = user_repo.get_all_paginated(page).await?;

        let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
        let followed = follow_repo.followed_among(viewer_id, &ids).await?;

        let users = users
            .into_iter()
            .map(|user| UserProfile {
                is_subscribed: followed.contains(&user.id),
                user,
            })
            .collect();

        Ok(PaginatedUsers {
            users,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total),
        })
    }

    /// Gets a single user as seen by `viewer_id`.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_profile(&self, id: i32, viewer_id: i32) -> Result<UserProfile, AppError> {
        let user_repo = UserRepository::new(self.db);
        let follow_repo = FollowRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let is_subscribed = viewer_id != id && follow_repo.exists(viewer_id, id).await?;

        Ok(UserProfile {
            user,
            is_subscribed,
        })
    }

    /// Updates the profile of `user_id`.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::ValidationErr)` - New email or username belongs to someone else
    /// - `Err(AppError::NotFound)` - User disappeared
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut errors = ValidationErrors::new();
        if let Some(ref email) = params.email {
            if user_repo.email_taken(email, Some(user_id)).await? {
                errors.add("email", "A user with that email already exists.");
            }
        }
        if let Some(ref username) = params.username {
            if user_repo.username_taken(username, Some(user_id)).await? {
                errors.add("username", "A user with that username already exists.");
            }
        }
        errors.into_result(())?;

        user_repo
            .update(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Changes the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::WrongPassword)` - `current_password` does not match
    pub async fn set_password(&self, user: &User, params: SetPasswordParams) -> Result<(), AppError> {
        if !verify_password(&params.current_password, &user.password_hash) {
            return Err(AuthError::WrongPassword.into());
        }

        let password_hash = hash_password(&params.new_password)?;
        UserRepository::new(self.db)
            .set_password_hash(user.id, password_hash)
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }

    /// Deletes a user together with everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
