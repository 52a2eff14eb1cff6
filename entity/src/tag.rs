use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Hex color as `#RRGGBB`
    #[sea_orm(unique)]
    pub color: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_recipe::Entity")]
    TagRecipe,
}

impl Related<super::tag_recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagRecipe.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_recipe::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_recipe::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
