//! Ingredient entity - One ingredient line of a meal.
//!
//! Ingredients have no identity of their own beyond their owning meal. The
//! autoincrement id doubles as the recorded order within a meal.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier, increasing in insertion order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the meal this ingredient belongs to
    pub meal_id: i64,
    /// Ingredient name, letters and spaces only
    pub name: String,
}

/// Defines relationships between Ingredient and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ingredient belongs to one meal
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
