//! Shopping list aggregation.
//!
//! The shopping list is never stored. It is recomputed from the current weekly plan by
//! counting how often each ingredient occurs across all planned meals.

use crate::{core::catalog::Catalog, core::planner::WeeklyPlan, errors::Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Ingredient name to number of occurrences in the plan.
///
/// Names are compared byte for byte and iterate in alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: BTreeMap<String, u32>,
}

impl ShoppingList {
    /// Counts one more occurrence of `ingredient`.
    pub fn add(&mut self, ingredient: &str) {
        *self.items.entry(ingredient.to_string()).or_insert(0) += 1;
    }

    /// Number of occurrences of `ingredient`, zero if absent.
    #[must_use]
    pub fn count(&self, ingredient: &str) -> u32 {
        self.items.get(ingredient).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.items.values().sum()
    }

    /// Number of distinct ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to buy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Builds shopping lists from a weekly plan.
#[derive(Debug, Clone)]
pub struct Aggregator {
    catalog: Catalog,
}

impl Aggregator {
    /// Creates an aggregator reading ingredients from `catalog`.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Counts every ingredient of every planned meal.
    ///
    /// A meal planned in several slots contributes its ingredients once per slot.
    ///
    /// # Errors
    /// Returns an error if reading ingredients from the database fails.
    #[instrument(skip_all, fields(slots = plan.len()))]
    pub async fn build_shopping_list(&self, plan: &WeeklyPlan) -> Result<ShoppingList> {
        let mut list = ShoppingList::default();
        for slot in plan.slots() {
            for ingredient in self.catalog.get_ingredients(slot.meal_id).await? {
                list.add(&ingredient);
            }
        }
        debug!(
            distinct = list.len(),
            total = list.total(),
            "Built shopping list"
        );
        Ok(list)
    }

    /// Renders one line per ingredient, `"<name> x<count>"` when needed more than once.
    #[must_use]
    pub fn render(list: &ShoppingList) -> Vec<String> {
        list.iter()
            .map(|(name, count)| {
                if count > 1 {
                    format!("{name} x{count}")
                } else {
                    name.to_string()
                }
            })
            .collect()
    }
}

/// Writes rendered shopping list lines to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save_shopping_list<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    std::fs::write(path.as_ref(), contents)?;
    info!(
        "Saved {} shopping list lines to {}",
        lines.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{DayOfWeek, MealCategory};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_empty_plan_gives_empty_list() -> Result<()> {
        let (_catalog, planner, aggregator) = setup_all().await?;

        let plan = planner.current_plan().await?;
        let list = aggregator.build_shopping_list(&plan).await?;
        assert!(list.is_empty());
        assert!(Aggregator::render(&list).is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_shared_ingredient_is_counted_per_slot() -> Result<()> {
        let (catalog, planner, aggregator) = setup_all().await?;

        let omelette =
            create_test_meal(&catalog, MealCategory::Breakfast, "Omelette", &["Egg", "Milk"]).await?;
        planner.assign(DayOfWeek::Monday, MealCategory::Breakfast, omelette.id).await?;
        planner.assign(DayOfWeek::Tuesday, MealCategory::Breakfast, omelette.id).await?;

        let plan = planner.current_plan().await?;
        let list = aggregator.build_shopping_list(&plan).await?;
        assert_eq!(list.count("Egg"), 2);
        assert_eq!(list.count("Milk"), 2);
        assert_eq!(Aggregator::render(&list), vec!["Egg x2", "Milk x2"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_counts_are_conserved() -> Result<()> {
        let (catalog, planner, aggregator) = setup_all().await?;

        let toast = create_test_meal(&catalog, MealCategory::Breakfast, "Toast", &["Bread", "Butter"]).await?;
        let soup =
            create_test_meal(&catalog, MealCategory::Lunch, "Soup", &["Carrot", "Onion", "Salt"]).await?;
        let stew = create_test_meal(
            &catalog,
            MealCategory::Dinner,
            "Stew",
            &["Beef", "Onion", "Carrot", "Salt"],
        )
        .await?;

        let mut expected_total = 0;
        for day in DayOfWeek::ALL {
            planner.assign(day, MealCategory::Breakfast, toast.id).await?;
            planner.assign(day, MealCategory::Lunch, soup.id).await?;
            expected_total += 5;
        }
        for day in [DayOfWeek::Friday, DayOfWeek::Saturday] {
            planner.assign(day, MealCategory::Dinner, stew.id).await?;
            expected_total += 4;
        }

        let plan = planner.current_plan().await?;
        let list = aggregator.build_shopping_list(&plan).await?;
        assert_eq!(list.total(), expected_total);
        assert_eq!(list.count("Onion"), 9);
        assert_eq!(list.count("Beef"), 2);
        assert_eq!(list.count("Bread"), 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_keys_are_byte_exact() -> Result<()> {
        let (catalog, planner, aggregator) = setup_all().await?;

        let a = create_test_meal(&catalog, MealCategory::Lunch, "Salad", &["Tomato"]).await?;
        let b = create_test_meal(&catalog, MealCategory::Dinner, "Sauce", &["tomato"]).await?;
        planner.assign(DayOfWeek::Monday, MealCategory::Lunch, a.id).await?;
        planner.assign(DayOfWeek::Monday, MealCategory::Dinner, b.id).await?;

        let list = aggregator
            .build_shopping_list(&planner.current_plan().await?)
            .await?;
        assert_eq!(list.len(), 2);
        assert_eq!(Aggregator::render(&list), vec!["Tomato", "tomato"]);

        Ok(())
    }

    #[test]
    fn test_render_is_alphabetical() {
        let mut list = ShoppingList::default();
        for name in ["Rice", "Egg", "Beans", "Egg", "Rice", "Egg"] {
            list.add(name);
        }
        assert_eq!(Aggregator::render(&list), vec!["Beans", "Egg x3", "Rice x2"]);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping.txt");
        std::fs::write(&path, "stale contents that are longer than the new ones\n").unwrap();

        save_shopping_list(&path, &["Egg x2".to_string(), "Milk".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Egg x2\nMilk\n");
    }
}
