//! Core business logic - framework-agnostic catalog, planning and shopping operations.
//!
//! Nothing here reads from or writes to the terminal; the menu layer formats and prompts.

/// Meal and ingredient storage
pub mod catalog;
/// Weekly plan slots
pub mod planner;
/// Shopping list aggregation
pub mod shopping;

pub use catalog::{Catalog, Meal};
pub use planner::{PlannedMeal, Planner, WeeklyPlan};
pub use shopping::{Aggregator, ShoppingList};
