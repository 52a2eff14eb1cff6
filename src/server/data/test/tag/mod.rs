use crate::server::{data::tag::TagRepository, model::tag::TagParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod existing_ids;
mod update;
mod value_taken;
