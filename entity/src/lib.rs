//! SeaORM entity definitions for the Foodgram database schema.
//!
//! One module per table. The `migration` crate owns the actual DDL; these models mirror it
//! so that queries and the in-memory test schema (built with `Schema::create_table_from_entity`)
//! agree on column names and types.

pub mod prelude;

pub mod favorite;
pub mod follow;
pub mod ingredient;
pub mod ingredient_amount;
pub mod recipe;
pub mod shopping_cart;
pub mod tag;
pub mod tag_recipe;
pub mod user;
