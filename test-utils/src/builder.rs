use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are generated from the SeaORM entity definitions rather than the migrations, so
/// composite unique indexes from the migration crate are absent in tests. Foreign keys and
/// single-column unique constraints are present.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Tag};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Tag)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for `entity`, using SQLite syntax.
    ///
    /// Add parent tables before the tables referencing them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every Foodgram table in foreign key dependency order.
    ///
    /// Most repository and service tests touch recipes, which pull in users, tags and
    /// ingredients, so this is the usual starting point.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_foodgram_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_foodgram_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Recipe)
            .with_table(IngredientAmount)
            .with_table(TagRecipe)
            .with_table(Favorite)
            .with_table(ShoppingCart)
            .with_table(Follow)
    }

    /// Adds the user table and the tag and ingredient catalogs.
    ///
    /// Enough for catalog administration tests that never create recipes.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Tag)
            .with_table(Ingredient)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with `db` populated
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
