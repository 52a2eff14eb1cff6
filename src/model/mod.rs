//! API data transfer objects.
//!
//! These types define the JSON shapes exchanged over HTTP. Request DTOs keep every field
//! optional where the API reports missing fields as validation errors; conversion into
//! validated server parameters happens in `server::model`.

pub mod api;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
