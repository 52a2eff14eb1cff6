//! JSON body extractor whose rejections render as `AppError`.
//!
//! `axum::Json` rejects undecodable bodies with a plain-text response. `AppJson` routes
//! the rejection through `AppError` so clients get the same JSON error bodies as every
//! other failure.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// Drop-in replacement for `axum::Json` on request bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
