//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules that
//! need the database (uniqueness, existence of referenced rows, duplicate links), combine
//! repository calls, and return domain models or `AppError`.

pub mod auth;
pub mod favorite;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod tag;
pub mod user;
