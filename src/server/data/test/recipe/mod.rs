use crate::server::{
    data::recipe::RecipeRepository,
    model::{
        filter::{RecipeFilter, RecipeListQuery},
        pagination::Page,
        recipe::{CreateRecipeParams, IngredientAmountParam, UpdateRecipeParams},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::recipe::TEST_IMAGE};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod get_summaries_by_author;
mod update;
