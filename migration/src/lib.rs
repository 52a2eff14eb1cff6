pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_tag_table;
mod m20260105_000003_create_ingredient_table;
mod m20260105_000004_create_recipe_table;
mod m20260105_000005_create_ingredient_amount_table;
mod m20260105_000006_create_tag_recipe_table;
mod m20260105_000007_create_favorite_table;
mod m20260105_000008_create_shopping_cart_table;
mod m20260105_000009_create_follow_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_tag_table::Migration),
            Box::new(m20260105_000003_create_ingredient_table::Migration),
            Box::new(m20260105_000004_create_recipe_table::Migration),
            Box::new(m20260105_000005_create_ingredient_amount_table::Migration),
            Box::new(m20260105_000006_create_tag_recipe_table::Migration),
            Box::new(m20260105_000007_create_favorite_table::Migration),
            Box::new(m20260105_000008_create_shopping_cart_table::Migration),
            Box::new(m20260105_000009_create_follow_table::Migration),
        ]
    }
}
