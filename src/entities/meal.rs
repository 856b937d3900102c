//! Meal entity - A named dish in one meal category.
//!
//! Meals own their ingredient rows and are referenced by plan slots.
//! A meal's category never changes after creation.

use super::sea_orm_active_enums::MealCategory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    /// Unique identifier for the meal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Category the meal belongs to
    pub category: MealCategory,
    /// Name of the meal, letters and spaces only
    pub name: String,
    /// When the meal was added to the catalog
    pub created_at: DateTime,
}

/// Defines relationships between Meal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One meal has many ingredients
    #[sea_orm(has_many = "super::ingredient::Entity")]
    Ingredients,
    /// One meal can fill many plan slots
    #[sea_orm(has_many = "super::plan_slot::Entity")]
    PlanSlots,
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl Related<super::plan_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
