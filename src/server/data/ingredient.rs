use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::ingredient::{Ingredient, IngredientParams};

pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every ingredient ordered by id
    pub async fn get_all(&self) -> Result<Vec<Ingredient>, DbErr> {
        let entities = entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, DbErr> {
        let entity = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ingredient::from_entity))
    }

    /// Returns the subset of `ids` that exist
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|ingredient| ingredient.id).collect())
    }

    pub async fn create(&self, params: IngredientParams) -> Result<Ingredient, DbErr> {
        let entity = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(params.name),
            measurement_unit: ActiveValue::Set(params.measurement_unit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ingredient::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: IngredientParams,
    ) -> Result<Option<Ingredient>, DbErr> {
        let Some(entity) = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::ingredient::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.measurement_unit = ActiveValue::Set(params.measurement_unit);

        let entity = active.update(self.db).await?;

        Ok(Some(Ingredient::from_entity(entity)))
    }

    /// Deletes an ingredient; recipe amounts using it cascade
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ingredient::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
