//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ingredient;
pub mod meal;
pub mod plan_slot;
pub mod sea_orm_active_enums;

// Re-export specific types to avoid conflicts
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use meal::{Column as MealColumn, Entity as Meal, Model as MealModel};
pub use plan_slot::{Column as PlanSlotColumn, Entity as PlanSlot, Model as PlanSlotModel};
pub use sea_orm_active_enums::{DayOfWeek, MealCategory};
