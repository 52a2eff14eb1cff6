//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags.
///
/// Name, color and slug are unique columns; defaults are derived from the shared counter
/// so several tags can coexist.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
    slug: String,
}

impl<'a> TagFactory<'a> {
    /// Defaults: name `"Tag {id}"`, slug `"tag-{id}"`, color `#` + id as six hex digits.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tag {}", id),
            color: format!("#{:06X}", id & 0xFF_FFFF),
            slug: format!("tag-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            slug: ActiveValue::Set(self.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
