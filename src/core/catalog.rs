//! Catalog business logic - Stores meals and their ingredients.
//!
//! The catalog is the only writer of the `meals` and `ingredients` tables. A meal and its
//! ingredient rows are always written in one database transaction, so a meal is never
//! visible without its ingredients.

use crate::{
    entities::{Ingredient, Meal as MealEntity, MealCategory, ingredient, meal},
    errors::{Error, Result},
};
use regex::Regex;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, info, instrument};

#[allow(clippy::unwrap_used)]
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// Checks a meal or ingredient name: letters and spaces only, not blank.
///
/// # Errors
/// Returns [`Error::InvalidName`] naming `field` if the value is rejected.
pub fn validate_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() || !NAME_PATTERN.is_match(value) {
        return Err(Error::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A meal together with its ingredients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    /// Identifier assigned by the database
    pub id: i64,
    /// Category the meal belongs to
    pub category: MealCategory,
    /// Meal name
    pub name: String,
    /// Ingredients in recorded order
    pub ingredients: Vec<String>,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            write!(f, "\n{ingredient}")?;
        }
        Ok(())
    }
}

/// Meal and ingredient storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    /// Creates a catalog over an existing database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a meal with its ingredients, returning the stored meal.
    ///
    /// The name and every ingredient are validated before anything is written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name or any ingredient is blank or contains anything but letters and spaces
    /// - The ingredient list is empty
    /// - The database insert fails (nothing is written in that case)
    #[instrument(skip(self, ingredients))]
    pub async fn add_meal(
        &self,
        category: MealCategory,
        name: &str,
        ingredients: &[String],
    ) -> Result<Meal> {
        validate_name("meal name", name)?;
        if ingredients.is_empty() {
            return Err(Error::NoIngredients);
        }
        for ingredient in ingredients {
            validate_name("ingredient", ingredient)?;
        }

        let txn = self.db.begin().await?;

        let meal = meal::ActiveModel {
            category: Set(category),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let rows = ingredients.iter().map(|ingredient| ingredient::ActiveModel {
            meal_id: Set(meal.id),
            name: Set(ingredient.clone()),
            ..Default::default()
        });
        Ingredient::insert_many(rows).exec(&txn).await?;

        txn.commit().await?;
        info!(meal_id = meal.id, "Added {} meal '{}'", category, name);

        Ok(Meal {
            id: meal.id,
            category,
            name: meal.name,
            ingredients: ingredients.to_vec(),
        })
    }

    /// Lists every meal of `category` with its ingredients, in insertion order.
    ///
    /// # Errors
    /// Returns an error if a database query fails.
    pub async fn list_meals(&self, category: MealCategory) -> Result<Vec<Meal>> {
        let meals = MealEntity::find()
            .filter(meal::Column::Category.eq(category))
            .order_by_asc(meal::Column::Id)
            .all(&self.db)
            .await?;

        let mut result = Vec::with_capacity(meals.len());
        for meal in meals {
            let ingredients = self.get_ingredients(meal.id).await?;
            result.push(Meal {
                id: meal.id,
                category: meal.category,
                name: meal.name,
                ingredients,
            });
        }
        Ok(result)
    }

    /// Finds the id of the meal called `name` in `category`.
    ///
    /// Returns `None` if no such meal exists. The same name may exist in several
    /// categories as unrelated meals.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn resolve_meal_id(&self, name: &str, category: MealCategory) -> Result<Option<i64>> {
        let found = MealEntity::find()
            .filter(meal::Column::Name.eq(name))
            .filter(meal::Column::Category.eq(category))
            .order_by_asc(meal::Column::Id)
            .one(&self.db)
            .await?;
        debug!(name, %category, found = found.is_some(), "Resolved meal");
        Ok(found.map(|meal| meal.id))
    }

    /// Like [`Catalog::resolve_meal_id`], but a missing meal is an [`Error::MealNotFound`].
    ///
    /// # Errors
    /// Returns an error if the meal does not exist or the database query fails.
    pub async fn require_meal_id(&self, name: &str, category: MealCategory) -> Result<i64> {
        self.resolve_meal_id(name, category)
            .await?
            .ok_or_else(|| Error::MealNotFound {
                name: name.to_string(),
                category,
            })
    }

    /// Returns the ingredients of one meal in the order they were recorded.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn get_ingredients(&self, meal_id: i64) -> Result<Vec<String>> {
        let rows = Ingredient::find()
            .filter(ingredient::Column::MealId.eq(meal_id))
            .order_by_asc(ingredient::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}
