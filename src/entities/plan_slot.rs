//! Plan slot entity - The meal assigned to one (day, category) pair.
//!
//! At most one row exists per `(day, category)`; a unique index created alongside the
//! table enforces this (see [`crate::config::database::create_tables`]).

use super::sea_orm_active_enums::{DayOfWeek, MealCategory};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plan slot database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plan_slots")]
pub struct Model {
    /// Unique identifier for the slot row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day of the week this slot belongs to
    pub day: DayOfWeek,
    /// Meal category of this slot
    pub category: MealCategory,
    /// ID of the meal currently assigned
    pub meal_id: i64,
}

/// Defines relationships between `PlanSlot` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each slot points at one meal
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
