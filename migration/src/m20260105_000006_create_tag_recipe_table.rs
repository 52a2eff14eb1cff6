use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_tag_table::Tag,
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
                    .table(TagRecipe::Table)
                    .if_not_exists()
                    .col(pk_auto(TagRecipe::Id))
                    .col(integer(TagRecipe::RecipeId))
                    .col(integer(TagRecipe::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_recipe_recipe_id")
                            .from(TagRecipe::Table, TagRecipe::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_recipe_tag_id")
                            .from(TagRecipe::Table, TagRecipe::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_recipe_unique_pair")
                    .table(TagRecipe::Table)
                    .col(TagRecipe::RecipeId)
                    .col(TagRecipe::TagId)
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
                    .name("idx_tag_recipe_unique_pair")
                    .table(TagRecipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TagRecipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagRecipe {
    Table,
    Id,
    RecipeId,
    TagId,
}
