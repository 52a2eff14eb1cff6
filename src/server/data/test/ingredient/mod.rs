use crate::server::{data::ingredient::IngredientRepository, model::ingredient::IngredientParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
