use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_ingredient_table::Ingredient,
    m20260105_000004_create_recipe_table::Recipe,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IngredientAmount::Table)
                    .if_not_exists()
                    .col(pk_auto(IngredientAmount::Id))
                    .col(integer(IngredientAmount::RecipeId))
                    .col(integer(IngredientAmount::IngredientId))
                    .col(integer(IngredientAmount::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_amount_recipe_id")
                            .from(IngredientAmount::Table, IngredientAmount::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_amount_ingredient_id")
                            .from(IngredientAmount::Table, IngredientAmount::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ingredient_amount_unique_pair")
                    .table(IngredientAmount::Table)
                    .col(IngredientAmount::RecipeId)
                    .col(IngredientAmount::IngredientId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ingredient_amount_unique_pair")
                    .table(IngredientAmount::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IngredientAmount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IngredientAmount {
    Table,
    Id,
    RecipeId,
    IngredientId,
    Amount,
}
