//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO into validated
//! parameters, calls a service and converts the resulting domain model back into a DTO.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
