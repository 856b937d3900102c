//! Catalog seed loading from meals.toml
//!
//! Meals listed in the seed file are added to the catalog on startup so a fresh
//! database already has something to plan with. The file is optional.

use crate::core::Catalog;
use crate::entities::MealCategory;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Default seed file location
pub const DEFAULT_MEALS_CONFIG: &str = "meals.toml";

/// Configuration structure representing the entire meals.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Meals to seed into the catalog
    #[serde(default)]
    pub meals: Vec<MealConfig>,
}

/// Configuration for a single seeded meal
#[derive(Debug, Deserialize, Clone)]
pub struct MealConfig {
    /// Category the meal belongs to (`breakfast`, `lunch` or `dinner`)
    pub category: MealCategory,
    /// Name of the meal
    pub name: String,
    /// Ingredients in the order they should be recorded
    pub ingredients: Vec<String>,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read {}: {e}", path.as_ref().display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Loads the seed configuration named by `MEALS_CONFIG`, or `meals.toml`.
///
/// A missing file is not an error and yields an empty configuration.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    let path =
        std::env::var("MEALS_CONFIG").unwrap_or_else(|_| DEFAULT_MEALS_CONFIG.to_string());

    if !Path::new(&path).exists() {
        debug!("No seed file at {}, skipping", path);
        return Ok(Config::default());
    }

    let config = load_config(&path)?;
    info!("Loaded {} seed meals from {}", config.meals.len(), path);
    Ok(config)
}

/// Adds every configured meal that is not in the catalog yet.
///
/// A meal counts as present when a meal of the same name exists in the same category.
/// Returns the number of meals added.
///
/// # Errors
/// Returns an error if a seeded meal fails validation or the database fails.
#[instrument(skip_all, fields(configured = config.meals.len()))]
pub async fn seed_catalog(catalog: &Catalog, config: &Config) -> Result<usize> {
    let mut added = 0;
    for entry in &config.meals {
        if catalog
            .resolve_meal_id(&entry.name, entry.category)
            .await?
            .is_some()
        {
            debug!("Seed meal '{}' already present", entry.name);
            continue;
        }

        catalog
            .add_meal(entry.category, &entry.name, &entry.ingredients)
            .await
            .inspect_err(|e| warn!("Rejected seed meal '{}': {}", entry.name, e))?;
        added += 1;
    }
    info!("Seeded {} new meals", added);
    Ok(added)
}
