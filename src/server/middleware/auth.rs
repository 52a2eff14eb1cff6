use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// User must have the admin flag.
    Admin,
    /// User must be the given author or an admin.
    AuthorOrAdmin(i32),
}

/// Resolves the session user and checks permissions against it.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every permission in `permissions`.
    ///
    /// An empty slice only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Self::check(&user, permissions)?;

        Ok(user)
    }

    /// Returns the session user for endpoints that also serve anonymous requests.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Logged-in user
    /// - `Ok(None)` - Anonymous request
    /// - `Err(AppError)` - Session or database failure
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }

    /// Checks `permissions` against an already loaded user.
    ///
    /// Used when a permission depends on data that is only known after authentication,
    /// such as the author of the recipe being modified.
    ///
    /// # Returns
    /// - `Ok(())` - Every permission holds
    /// - `Err(AuthError::AccessDenied)` - The first failing permission
    pub fn check(user: &User, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin action without admin permissions".to_string(),
                        )
                        .into());
                    }
                }
                Permission::AuthorOrAdmin(author_id) => {
                    if !user.admin && user.id != *author_id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to modify content owned by user {}",
                                author_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}
