//! `plan` and `save` actions.

use super::Menu;
use crate::{
    core::{Aggregator, Planner, shopping::save_shopping_list},
    entities::{DayOfWeek, MealCategory},
    errors::{ErrorKind, Result},
};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Walks every day and category, asking which meal to plan, then prints the plan.
    ///
    /// Stops early if a category has no meals to choose from.
    pub(crate) async fn plan_week(&mut self) -> Result<()> {
        for day in DayOfWeek::ALL {
            self.say(day.label())?;
            let mut choices = Vec::with_capacity(MealCategory::ALL.len());

            for category in MealCategory::ALL {
                let mut names: Vec<String> = self
                    .data
                    .catalog
                    .list_meals(category)
                    .await?
                    .into_iter()
                    .map(|meal| meal.name)
                    .collect();
                if names.is_empty() {
                    warn!(%category, "Planning aborted, category is empty");
                    return self.say(format!(
                        "No {category} meals found. Add some before planning."
                    ));
                }
                names.sort();
                names.dedup();
                for name in &names {
                    self.say(name)?;
                }

                let meal_id = self.choose_meal(day, category).await?;
                choices.push((category, meal_id));
            }

            for (category, meal_id) in choices {
                self.data.planner.assign(day, category, meal_id).await?;
            }
            self.say(format!("Yeah! We planned the meals for {day}."))?;
        }

        self.say("")?;
        let plan = self.data.planner.current_plan().await?;
        write!(self.output, "{}", Planner::display(&plan))?;
        Ok(())
    }

    /// Asks for a meal name until it resolves in `category`.
    async fn choose_meal(&mut self, day: DayOfWeek, category: MealCategory) -> Result<i64> {
        self.say(format!(
            "Choose the {category} for {day} from the list above:"
        ))?;
        loop {
            let name = self.read_line()?;
            match self.data.catalog.require_meal_id(&name, category).await {
                Ok(meal_id) => return Ok(meal_id),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{}", e);
                    self.say("This meal doesn’t exist. Choose a meal from the list above.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes the shopping list for the current plan to a file named by the user.
    pub(crate) async fn save_plan(&mut self) -> Result<()> {
        let plan = self.data.planner.current_plan().await?;
        if plan.is_empty() {
            return self.say("Unable to save. Plan your meals first.");
        }

        self.say("Input a filename:")?;
        let filename = self.read_line()?;

        let list = self.data.aggregator.build_shopping_list(&plan).await?;
        save_shopping_list(filename.trim(), &Aggregator::render(&list))?;
        self.say("Saved!")
    }
}
