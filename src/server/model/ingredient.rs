//! Ingredient domain model and parameters.

use crate::{
    model::ingredient::{IngredientDto, IngredientInputDto},
    server::{error::validation::ValidationErrors, util::validate},
};

pub const INGREDIENT_FIELD_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            id: self.id,
            name: self.name,
            measurement_unit: self.measurement_unit,
        }
    }

    pub fn from_entity(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            measurement_unit: entity.measurement_unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientParams {
    pub name: String,
    pub measurement_unit: String,
}

impl IngredientParams {
    pub fn from_dto(dto: IngredientInputDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate::required(&mut errors, "name", dto.name);
        let measurement_unit =
            validate::required(&mut errors, "measurement_unit", dto.measurement_unit);

        if let Some(ref name) = name {
            validate::max_length(&mut errors, "name", name, INGREDIENT_FIELD_MAX_LENGTH);
        }
        if let Some(ref unit) = measurement_unit {
            validate::max_length(
                &mut errors,
                "measurement_unit",
                unit,
                INGREDIENT_FIELD_MAX_LENGTH,
            );
        }

        match (name, measurement_unit) {
            (Some(name), Some(measurement_unit)) if errors.is_empty() => Ok(Self {
                name,
                measurement_unit,
            }),
            _ => Err(errors),
        }
    }
}
