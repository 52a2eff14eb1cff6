//! Tag domain model and parameters.

use crate::{
    model::tag::{TagDto, TagInputDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{self, is_valid_slug, normalize_color},
    },
};

pub const TAG_FIELD_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    /// `#RRGGBB`, upper case.
    pub color: String,
    pub slug: String,
}

impl Tag {
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            color: self.color,
            slug: self.slug,
        }
    }

    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            slug: entity.slug,
        }
    }
}

/// Validated tag fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct TagParams {
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl TagParams {
    /// Validates the input and normalizes the color to upper case.
    pub fn from_dto(dto: TagInputDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate::required(&mut errors, "name", dto.name);
        let color = validate::required(&mut errors, "color", dto.color);
        let slug = validate::required(&mut errors, "slug", dto.slug);

        if let Some(ref name) = name {
            validate::max_length(&mut errors, "name", name, TAG_FIELD_MAX_LENGTH);
        }

        let color = color.and_then(|color| {
            let normalized = normalize_color(color.trim());
            if normalized.is_none() {
                errors.add("color", "Enter a valid HEX color, e.g. #49B64E.");
            }
            normalized
        });

        if let Some(ref slug) = slug {
            validate::max_length(&mut errors, "slug", slug, TAG_FIELD_MAX_LENGTH);
            if !is_valid_slug(slug) {
                errors.add(
                    "slug",
                    "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
                );
            }
        }

        match (name, color, slug) {
            (Some(name), Some(color), Some(slug)) if errors.is_empty() => {
                Ok(Self { name, color, slug })
            }
            _ => Err(errors),
        }
    }
}
