use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository,
    error::{validation::ValidationErrors, AppError},
    model::tag::{Tag, TagParams},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Tag, AppError> {
        TagRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))
    }

    /// Creates a tag after checking name, color and slug are unused
    pub async fn create(&self, params: TagParams) -> Result<Tag, AppError> {
        self.check_unique(&params, None).await?;

        let tag = TagRepository::new(self.db).create(params).await?;
        tracing::info!("Created tag {} ({})", tag.id, tag.slug);

        Ok(tag)
    }

    /// Replaces a tag; it may keep its own name, color and slug
    pub async fn update(&self, id: i32, params: TagParams) -> Result<Tag, AppError> {
        let tag_repo = TagRepository::new(self.db);
        if tag_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }

        self.check_unique(&params, Some(id)).await?;

        tag_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TagRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }

        Ok(())
    }

    async fn check_unique(&self, params: &TagParams, exclude_id: Option<i32>) -> Result<(), AppError> {
        let tag_repo = TagRepository::new(self.db);
        let mut errors = ValidationErrors::new();

        let checks = [
            ("name", entity::tag::Column::Name, &params.name),
            ("color", entity::tag::Column::Color, &params.color),
            ("slug", entity::tag::Column::Slug, &params.slug),
        ];
        for (field, column, value) in checks {
            if tag_repo.value_taken(column, value, exclude_id).await? {
                errors.add(field, format!("A tag with this {} already exists.", field));
            }
        }

        Ok(errors.into_result(())?)
    }
}
