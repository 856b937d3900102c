//! Database configuration module for the meal planner.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. The one constraint entities cannot
//! express, the unique `(day, category)` pair on plan slots, is added as a separate index.

use crate::entities::{Ingredient, Meal, PlanSlot, plan_slot};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default database location, created on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://meals.db?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns the
/// default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the database at `database_url` and makes sure every table exists.
///
/// # Errors
/// Returns an error if the database cannot be opened or the schema cannot be created.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to {}", database_url);
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready at {}", database_url);
    Ok(db)
}

/// Creates the meals, ingredients and plan slot tables if they do not exist yet,
/// plus the unique index that keeps one slot per `(day, category)`.
///
/// # Errors
/// Returns an error if any statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let meal_table = schema.create_table_from_entity(Meal).if_not_exists().to_owned();
    let ingredient_table = schema
        .create_table_from_entity(Ingredient)
        .if_not_exists()
        .to_owned();
    let plan_slot_table = schema
        .create_table_from_entity(PlanSlot)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&meal_table)).await?;
    db.execute(builder.build(&ingredient_table)).await?;
    db.execute(builder.build(&plan_slot_table)).await?;

    let slot_index = Index::create()
        .name("idx_plan_slots_day_category")
        .table(PlanSlot)
        .col(plan_slot::Column::Day)
        .col(plan_slot::Column::Category)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&slot_index)).await?;

    Ok(())
}
