use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tag::{Tag, TagParams};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tag ordered by id
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Returns the subset of `ids` that exist
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|tag| tag.id).collect())
    }

    /// Checks whether a tag other than `exclude_id` has `value` in `column`
    pub async fn value_taken(
        &self,
        column: entity::tag::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Tag::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::tag::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: TagParams) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    /// Replaces all fields of a tag, returning None if it does not exist
    pub async fn update(&self, id: i32, params: TagParams) -> Result<Option<Tag>, DbErr> {
        let Some(entity) = entity::prelude::Tag::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::tag::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.color = ActiveValue::Set(params.color);
        active.slug = ActiveValue::Set(params.slug);

        let entity = active.update(self.db).await?;

        Ok(Some(Tag::from_entity(entity)))
    }

    /// Deletes a tag; recipe links to it cascade
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
