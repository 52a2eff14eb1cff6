use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// Body for both creating and replacing an ingredient.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct IngredientInputDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub measurement_unit: Option<String>,
}
