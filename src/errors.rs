//! Unified error type for the meal planner.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants fall into the
//! groups reported by [`Error::kind`], which the menu uses to decide whether to
//! re-prompt or abort the current action.

use crate::entities::{DayOfWeek, MealCategory};
use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed user input, rejected before any write
    Validation,
    /// A lookup by name or id found nothing
    NotFound,
    /// The database or filesystem failed
    Storage,
    /// The caller asked for something the data model forbids
    Logic,
    /// Bad configuration or environment
    Config,
}

/// All errors produced by the meal planner.
#[derive(Debug, Error)]
pub enum Error {
    /// A meal or ingredient name failed validation
    #[error("Invalid {field} '{value}': use letters and spaces only")]
    InvalidName {
        /// Which input was rejected
        field: &'static str,
        /// The rejected text
        value: String,
    },

    /// A meal was submitted without ingredients
    #[error("A meal needs at least one ingredient")]
    NoIngredients,

    /// No meal with this name exists in the category
    #[error("Meal '{name}' not found in category {category}")]
    MealNotFound {
        /// Name looked up
        name: String,
        /// Category searched
        category: MealCategory,
    },

    /// No meal row has this id
    #[error("No meal with id {meal_id}")]
    UnknownMeal {
        /// Id looked up
        meal_id: i64,
    },

    /// A meal was assigned to a slot of another category
    #[error("Meal {meal_id} is a {actual} meal and cannot fill the {expected} slot")]
    CategoryMismatch {
        /// Meal being assigned
        meal_id: i64,
        /// Category of the slot
        expected: MealCategory,
        /// Category of the meal
        actual: MealCategory,
    },

    /// A plan slot points at a meal that no longer exists
    #[error("Plan slot {day} {category} references missing meal {meal_id}")]
    DanglingMealReference {
        /// Day of the slot
        day: DayOfWeek,
        /// Category of the slot
        category: MealCategory,
        /// Missing meal id
        meal_id: i64,
    },

    /// Configuration file could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Reading input or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Returns the group this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName { .. } | Self::NoIngredients => ErrorKind::Validation,
            Self::MealNotFound { .. } | Self::UnknownMeal { .. } => ErrorKind::NotFound,
            Self::CategoryMismatch { .. } | Self::DanglingMealReference { .. } => {
                ErrorKind::Logic
            }
            Self::Database(_) | Self::Io(_) => ErrorKind::Storage,
            Self::Config { .. } | Self::EnvVar(_) => ErrorKind::Config,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
