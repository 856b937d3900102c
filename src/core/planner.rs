//! Weekly plan business logic.
//!
//! A plan slot is keyed by `(day, category)` and holds one meal. Assigning to a slot that
//! already exists replaces its meal; there is never more than one slot per pair.

use crate::{
    entities::{DayOfWeek, Meal as MealEntity, MealCategory, PlanSlot, plan_slot},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use std::fmt;
use tracing::{debug, info, instrument};

/// One filled slot of the weekly plan, resolved to its meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMeal {
    /// Day of the slot
    pub day: DayOfWeek,
    /// Category of the slot
    pub category: MealCategory,
    /// Assigned meal id
    pub meal_id: i64,
    /// Assigned meal name
    pub meal_name: String,
}

/// Every filled slot, sorted Monday to Sunday and breakfast to dinner within a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyPlan {
    slots: Vec<PlannedMeal>,
}

impl WeeklyPlan {
    /// Builds a plan from slots in any order.
    #[must_use]
    pub fn new(mut slots: Vec<PlannedMeal>) -> Self {
        slots.sort_by_key(|slot| (slot.day, slot.category));
        Self { slots }
    }

    /// All slots in canonical order.
    #[must_use]
    pub fn slots(&self) -> &[PlannedMeal] {
        &self.slots
    }

    /// The slot for `(day, category)`, if filled.
    #[must_use]
    pub fn get(&self, day: DayOfWeek, category: MealCategory) -> Option<&PlannedMeal> {
        self.slots
            .iter()
            .find(|slot| slot.day == day && slot.category == category)
    }

    /// True when nothing has been planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Slots grouped by day, skipping days with nothing planned.
    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &[PlannedMeal])> {
        self.slots
            .chunk_by(|a, b| a.day == b.day)
            .map(|group| (group[0].day, group))
    }
}

/// Each planned day is a day label followed by one `Category: meal` line per slot
/// and a blank separator line.
impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, slots) in self.days() {
            writeln!(f, "{day}")?;
            for slot in slots {
                writeln!(f, "{}: {}", slot.category.title(), slot.meal_name)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reads and writes the weekly plan.
#[derive(Debug, Clone)]
pub struct Planner {
    db: DatabaseConnection,
}

impl Planner {
    /// Creates a planner over an existing database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts `meal_id` into the `(day, category)` slot, replacing whatever was there.
    ///
    /// The existence check and the insert or update run in one database transaction,
    /// and the unique index on `(day, category)` rejects any duplicate a concurrent
    /// writer might try to create.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No meal with `meal_id` exists
    /// - The meal belongs to a different category than the slot
    /// - The database operation fails
    #[instrument(skip(self))]
    pub async fn assign(
        &self,
        day: DayOfWeek,
        category: MealCategory,
        meal_id: i64,
    ) -> Result<plan_slot::Model> {
        let txn = self.db.begin().await?;

        let meal = MealEntity::find_by_id(meal_id)
            .one(&txn)
            .await?
            .ok_or(Error::UnknownMeal { meal_id })?;

        if meal.category != category {
            return Err(Error::CategoryMismatch {
                meal_id,
                expected: category,
                actual: meal.category,
            });
        }

        let existing = PlanSlot::find()
            .filter(plan_slot::Column::Day.eq(day))
            .filter(plan_slot::Column::Category.eq(category))
            .one(&txn)
            .await?;

        let slot = if let Some(existing) = existing {
            debug!(slot_id = existing.id, previous = existing.meal_id, "Updating slot");
            let mut slot: plan_slot::ActiveModel = existing.into();
            slot.meal_id = Set(meal_id);
            slot.update(&txn).await?
        } else {
            debug!("Inserting slot");
            plan_slot::ActiveModel {
                day: Set(day),
                category: Set(category),
                meal_id: Set(meal_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        };

        txn.commit().await?;
        info!("Planned '{}' for {} {}", meal.name, day, category);

        Ok(slot)
    }

    /// Reads every slot and resolves it to its meal.
    ///
    /// # Errors
    /// Returns [`Error::DanglingMealReference`] if a slot points at a meal that no
    /// longer exists, or an error if the database query fails.
    pub async fn current_plan(&self) -> Result<WeeklyPlan> {
        let rows = PlanSlot::find()
            .find_also_related(MealEntity)
            .all(&self.db)
            .await?;

        let slots = rows
            .into_iter()
            .map(|(slot, meal)| {
                let meal = meal.ok_or(Error::DanglingMealReference {
                    day: slot.day,
                    category: slot.category,
                    meal_id: slot.meal_id,
                })?;
                Ok(PlannedMeal {
                    day: slot.day,
                    category: slot.category,
                    meal_id: meal.id,
                    meal_name: meal.name,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WeeklyPlan::new(slots))
    }

    /// Formats a plan for printing, see the [`WeeklyPlan`] `Display` impl.
    #[must_use]
    pub fn display(plan: &WeeklyPlan) -> String {
        plan.to_string()
    }
}
