//! Domain models and operation parameters.
//!
//! Repositories return these types instead of SeaORM entities, and request DTOs are
//! validated into the `*Params` types before reaching a service.

pub mod filter;
pub mod follow;
pub mod ingredient;
pub mod pagination;
pub mod recipe;
pub mod shopping_cart;
pub mod tag;
pub mod user;
