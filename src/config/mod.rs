/// Database connection management and table creation
pub mod database;

/// Catalog seed loading from meals.toml
pub mod meals;
