use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::{pagination::Page, user::User};

/// Follow relations between users and the authors they subscribe to.
pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the subscription, returning false if there was none
    pub async fn delete(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Which of `author_ids` the user follows.
    pub async fn followed_among(
        &self,
        user_id: i32,
        author_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let follows = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.is_in(author_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(follows.into_iter().map(|follow| follow.author_id).collect())
    }

    /// Gets one page of authors the user follows, in subscription order.
    ///
    /// # Returns
    /// - `Ok((authors, total))` - Authors for the page and the total number of subscriptions
    /// - `Err(DbErr)` - Database error
    pub async fn get_followed_paginated(
        &self,
        user_id: i32,
        page: Page,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .order_by_asc(entity::follow::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let follows = paginator.fetch_page(page.page).await?;

        let author_ids: Vec<i32> = follows.iter().map(|follow| follow.author_id).collect();
        if author_ids.is_empty() {
            return Ok((Vec::new(), total));
        }

        let mut authors: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, User::from_entity(user)))
            .collect();

        let ordered = author_ids
            .into_iter()
            .filter_map(|id| authors.remove(&id))
            .collect();

        Ok((ordered, total))
    }
}
