//! `add` and `show` actions.

use super::Menu;
use super::prompts::CATEGORY_CHOICES;
use crate::errors::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Prompts for a category, name and ingredients and stores the meal.
    pub(crate) async fn add_meal(&mut self) -> Result<()> {
        self.say(format!(
            "Which meal do you want to add ({CATEGORY_CHOICES})?"
        ))?;
        let category = self.read_category()?;
        let name = self.read_meal_name()?;
        let ingredients = self.read_ingredients()?;

        self.data
            .catalog
            .add_meal(category, &name, &ingredients)
            .await?;
        self.say("The meal has been added!")
    }

    /// Prompts for a category and prints its meals with their ingredients.
    pub(crate) async fn show_meals(&mut self) -> Result<()> {
        self.say(format!(
            "Which category do you want to print ({CATEGORY_CHOICES})?"
        ))?;
        let category = self.read_category()?;

        let meals = self.data.catalog.list_meals(category).await?;
        if meals.is_empty() {
            return self.say("No meals found.");
        }

        self.say(format!("Category: {category}"))?;
        for meal in meals {
            self.say("")?;
            self.say(meal.to_string())?;
        }
        Ok(())
    }
}
