//! Field-level validation errors.
//!
//! Validation collects every problem with a request body before failing, so a client sees
//! all rejected fields at once:
//!
//! ```json
//! {"error": "Validation failed", "fields": {"name": ["This field is required."]}}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

pub const REQUIRED: &str = "This field is required.";

/// Key for failures that belong to the request body as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Accumulated validation messages keyed by field name.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Validation failed: {fields:?}")]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for a failure on exactly one field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Merges the messages of `other` into `self`.
    pub fn extend(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Validation failed".to_string(),
                fields: self.fields,
            }),
        )
            .into_response()
    }
}
