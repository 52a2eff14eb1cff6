use crate::server::{data::shopping_cart::ShoppingCartRepository, model::shopping_cart::ShoppingList};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod build_shopping_list;
mod create;
