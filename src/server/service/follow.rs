//! Author subscriptions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, recipe::RecipeRepository, user::UserRepository},
    error::AppError,
    model::{
        follow::{PaginatedSubscriptions, Subscription},
        pagination::Page,
        user::User,
    },
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`.
    ///
    /// # Arguments
    /// - `recipes_limit` - Truncates the author's recipe list in the response
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The new subscription
    /// - `Err(AppError::NotFound)` - No user with id `author_id`
    /// - `Err(AppError::BadRequest)` - Subscribing to oneself, or already subscribed
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<Subscription, AppError> {
        let Some(author) = UserRepository::new(self.db).find_by_id(author_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if user_id == author_id {
            return Err(AppError::BadRequest(
                "You cannot subscribe to yourself".to_string(),
            ));
        }

        let follow_repo = FollowRepository::new(self.db);
        if follow_repo.exists(user_id, author_id).await? {
            return Err(AppError::BadRequest("Already subscribed".to_string()));
        }

        follow_repo.create(user_id, author_id).await?;

        tracing::info!("User {} subscribed to {}", user_id, author_id);

        self.build_subscription(author, recipes_limit).await
    }

    /// Cancels a subscription.
    ///
    /// # Returns
    /// - `Ok(())` - Unsubscribed
    /// - `Err(AppError::NotFound)` - No such author, or not subscribed
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if !FollowRepository::new(self.db)
            .delete(user_id, author_id)
            .await?
        {
            return Err(AppError::NotFound("Subscription not found".to_string()));
        }

        Ok(())
    }

    /// Lists the authors `user_id` follows, each with their recipes.
    pub async fn list(
        &self,
        user_id: i32,
        page: Page,
        recipes_limit: Option<u64>,
    ) -> Result<PaginatedSubscriptions, AppError> {
        let (authors, total) = FollowRepository::new(self.db)
            .get_followed_paginated(user_id, page)
            .await?;

        let mut subscriptions = Vec::with_capacity(authors.len());
        for author in authors {
            subscriptions.push(self.build_subscription(author, recipes_limit).await?);
        }

        Ok(PaginatedSubscriptions {
            subscriptions,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total),
        })
    }

    async fn build_subscription(
        &self,
        author: User,
        recipes_limit: Option<u64>,
    ) -> Result<Subscription, AppError> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipes = recipe_repo
            .get_summaries_by_author(author.id, recipes_limit)
            .await?;
        let recipes_count = recipe_repo.count_by_author(author.id).await?;

        Ok(Subscription {
            author,
            recipes,
            recipes_count,
        })
    }
}
