use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::{Page, PaginationParams},
        user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod taken;
mod update;
