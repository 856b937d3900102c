//! Closed enumerations stored as text columns.
//!
//! The value written to the database (`string_value`) and the label shown to the user
//! (`label()`) are kept separate so either can change without touching the other.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three meal categories, in canonical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Breakfast
    #[sea_orm(string_value = "breakfast")]
    Breakfast,
    /// Lunch
    #[sea_orm(string_value = "lunch")]
    Lunch,
    /// Dinner
    #[sea_orm(string_value = "dinner")]
    Dinner,
}

impl MealCategory {
    /// Every category in breakfast, lunch, dinner order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Lowercase label used in prompts, e.g. `"breakfast"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Capitalized label used in the weekly plan, e.g. `"Breakfast"`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealCategory {
    type Err = String;

    /// Parses a category case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown meal category '{wanted}'"))
    }
}

/// Days of the week, Monday first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    /// Monday
    #[sea_orm(string_value = "monday")]
    Monday,
    /// Tuesday
    #[sea_orm(string_value = "tuesday")]
    Tuesday,
    /// Wednesday
    #[sea_orm(string_value = "wednesday")]
    Wednesday,
    /// Thursday
    #[sea_orm(string_value = "thursday")]
    Thursday,
    /// Friday
    #[sea_orm(string_value = "friday")]
    Friday,
    /// Saturday
    #[sea_orm(string_value = "saturday")]
    Saturday,
    /// Sunday
    #[sea_orm(string_value = "sunday")]
    Sunday,
}

impl DayOfWeek {
    /// Every day, Monday through Sunday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Display label, e.g. `"Monday"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("dinner".parse::<MealCategory>(), Ok(MealCategory::Dinner));
        assert_eq!(" BREAKFAST ".parse::<MealCategory>(), Ok(MealCategory::Breakfast));
        assert!("brunch".parse::<MealCategory>().is_err());
        assert!("".parse::<MealCategory>().is_err());
    }

    #[test]
    fn test_labels_are_separate_from_storage_values() {
        assert_eq!(MealCategory::Lunch.label(), "lunch");
        assert_eq!(MealCategory::Lunch.title(), "Lunch");
        assert_eq!(MealCategory::Lunch.to_value(), "lunch");
        assert_eq!(DayOfWeek::Friday.label(), "Friday");
        assert_eq!(DayOfWeek::Friday.to_value(), "friday");
    }

    #[test]
    fn test_canonical_order() {
        let mut days = vec![DayOfWeek::Sunday, DayOfWeek::Monday, DayOfWeek::Wednesday];
        days.sort();
        assert_eq!(
            days,
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Sunday]
        );
        assert!(MealCategory::Breakfast < MealCategory::Lunch);
        assert!(MealCategory::Lunch < MealCategory::Dinner);
    }
}
