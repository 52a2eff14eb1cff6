//! Database repository layer.
//!
//! One repository per table group. Repositories take a `&DatabaseConnection`, return
//! `DbErr` on failure and convert entity models into `server::model` types so nothing
//! above this layer depends on SeaORM entities.

pub mod favorite;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
