//! Shared test utilities for the meal planner.
//!
//! This module provides common helper functions for setting up in-memory databases
//! and creating test meals with sensible defaults.

use crate::{
    core::{Aggregator, Catalog, Meal, Planner},
    entities::MealCategory,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a catalog over a fresh in-memory database.
pub async fn setup_catalog() -> Result<Catalog> {
    Ok(Catalog::new(setup_test_db().await?))
}

/// Creates a catalog and planner sharing one fresh database.
pub async fn setup_planner() -> Result<(Catalog, Planner)> {
    let db = setup_test_db().await?;
    Ok((Catalog::new(db.clone()), Planner::new(db)))
}

/// Creates catalog, planner and aggregator sharing one fresh database.
pub async fn setup_all() -> Result<(Catalog, Planner, Aggregator)> {
    let (catalog, planner) = setup_planner().await?;
    let aggregator = Aggregator::new(catalog.clone());
    Ok((catalog, planner, aggregator))
}

/// Adds a meal with the given ingredients.
pub async fn create_test_meal(
    catalog: &Catalog,
    category: MealCategory,
    name: &str,
    ingredients: &[&str],
) -> Result<Meal> {
    catalog
        .add_meal(category, name, &strings(ingredients))
        .await
}

/// Converts string literals into owned strings.
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
