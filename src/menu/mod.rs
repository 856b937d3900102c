//! Text menu - the interactive front end.
//!
//! The menu reads commands line by line from any [`BufRead`] and writes prompts to any
//! [`Write`], so a session can run against the terminal or against in-memory buffers.

mod meals;
mod plan;
mod prompts;

use crate::{
    core::{Aggregator, Catalog, Planner},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{error, info, instrument};

/// Shared data available to every menu action.
/// Holds the core services, all built over the same database connection.
pub struct MenuData {
    /// Meal storage
    pub catalog: Catalog,
    /// Weekly plan
    pub planner: Planner,
    /// Shopping list builder
    pub aggregator: Aggregator,
}

impl MenuData {
    /// Creates the core services over `database`.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        let catalog = Catalog::new(database.clone());
        Self {
            aggregator: Aggregator::new(catalog.clone()),
            planner: Planner::new(database),
            catalog,
        }
    }
}

/// Top-level menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Add a meal to the catalog
    Add,
    /// List the meals of one category
    Show,
    /// Plan the whole week
    Plan,
    /// Save the shopping list
    Save,
    /// Leave the program
    Exit,
}

impl MenuAction {
    /// Every action in the order they are offered
    pub const ALL: [Self; 5] = [Self::Add, Self::Show, Self::Plan, Self::Save, Self::Exit];

    /// Word the user types to pick the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Show => "show",
            Self::Plan => "plan",
            Self::Save => "save",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.label() == wanted)
            .ok_or_else(|| format!("unknown action '{wanted}'"))
    }
}

/// An interactive session.
pub struct Menu<R, W> {
    input: R,
    output: W,
    data: MenuData,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W, data: MenuData) -> Self {
        Self {
            input,
            output,
            data,
        }
    }

    /// Runs the menu until `exit` or end of input.
    ///
    /// A failed action is reported to the user and the menu carries on.
    ///
    /// # Errors
    /// Returns an error only if writing to the output fails.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let choices: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
            self.say(format!(
                "What would you like to do ({})?",
                choices.join(", ")
            ))?;

            let action = match self.read_line() {
                Ok(line) => match line.parse::<MenuAction>() {
                    Ok(action) => action,
                    Err(_) => continue,
                },
                Err(e) if is_end_of_input(&e) => MenuAction::Exit,
                Err(e) => return Err(e),
            };

            let outcome = match action {
                MenuAction::Add => self.add_meal().await,
                MenuAction::Show => self.show_meals().await,
                MenuAction::Plan => self.plan_week().await,
                MenuAction::Save => self.save_plan().await,
                MenuAction::Exit => break,
            };

            match outcome {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => self.on_error(&e)?,
            }
        }

        info!("Session finished");
        self.say("Bye!")
    }

    /// Logs a failed action and tells the user about it.
    fn on_error(&mut self, error: &Error) -> Result<()> {
        error!(kind = ?error.kind(), "Action failed: {}", error);
        self.say(format!("An error occurred: {error}"))
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn is_end_of_input(error: &Error) -> bool {
    matches!(error, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{DayOfWeek, MealCategory};
    use crate::test_utils::*;
    use std::io::Cursor;

    /// Runs a whole session over `script` and returns everything printed.
    async fn run_script(data: MenuData, script: &str) -> Result<String> {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new(), data);
        menu.run().await?;
        Ok(String::from_utf8(menu.into_output()).unwrap())
    }

    async fn setup_data() -> Result<MenuData> {
        Ok(MenuData::new(setup_test_db().await?))
    }

    #[test]
    fn test_parse_menu_action() {
        assert_eq!("add".parse::<MenuAction>(), Ok(MenuAction::Add));
        assert_eq!(" SAVE ".parse::<MenuAction>(), Ok(MenuAction::Save));
        assert!("delete".parse::<MenuAction>().is_err());
    }

    #[tokio::test]
    async fn test_exit_says_bye() -> Result<()> {
        let output = run_script(setup_data().await?, "exit\n").await?;
        assert_eq!(
            output,
            "What would you like to do (add, show, plan, save, exit)?\nBye!\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_end_of_input_exits() -> Result<()> {
        let output = run_script(setup_data().await?, "add\nlunch\n").await?;
        assert!(output.ends_with("Bye!\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_action_reprompts() -> Result<()> {
        let output = run_script(setup_data().await?, "dance\nexit\n").await?;
        assert_eq!(output.matches("What would you like to do").count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_then_show() -> Result<()> {
        let data = setup_data().await?;
        let catalog = data.catalog.clone();
        let script = "add\nsupper\ndinner\nPasta 2\nPasta\nTomato, 3\nTomato, Pasta\n\
                      show\ndinner\nexit\n";
        let output = run_script(data, script).await?;

        assert!(output.contains("Wrong meal category! Choose from: breakfast, lunch, dinner."));
        assert_eq!(output.matches("Wrong format. Use letters only!").count(), 2);
        assert!(output.contains("The meal has been added!"));
        assert!(output.contains("Category: dinner\n\nName: Pasta\nIngredients:\nTomato\nPasta\n"));

        let meal_id = catalog
            .resolve_meal_id("Pasta", MealCategory::Dinner)
            .await?
            .unwrap();
        assert_eq!(catalog.get_ingredients(meal_id).await?, vec!["Tomato", "Pasta"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_show_empty_category() -> Result<()> {
        let output = run_script(setup_data().await?, "show\nlunch\nexit\n").await?;
        assert!(output.contains("No meals found."));
        Ok(())
    }

    #[tokio::test]
    async fn test_save_without_plan() -> Result<()> {
        let output = run_script(setup_data().await?, "save\nexit\n").await?;
        assert!(output.contains("Unable to save. Plan your meals first."));
        assert!(!output.contains("Input a filename:"));
        Ok(())
    }

    #[tokio::test]
    async fn test_plan_aborts_when_category_empty() -> Result<()> {
        let data = setup_data().await?;
        create_test_meal(&data.catalog, MealCategory::Breakfast, "Toast", &["Bread"]).await?;
        let output = run_script(data, "plan\nToast\nexit\n").await?;
        assert!(output.contains("No lunch meals found. Add some before planning."));
        Ok(())
    }

    #[tokio::test]
    async fn test_plan_and_save_week() -> Result<()> {
        let data = setup_data().await?;
        let catalog = data.catalog.clone();
        let planner = data.planner.clone();
        create_test_meal(&catalog, MealCategory::Breakfast, "Omelette", &["Egg", "Milk"]).await?;
        create_test_meal(&catalog, MealCategory::Breakfast, "Toast", &["Bread"]).await?;
        create_test_meal(&catalog, MealCategory::Lunch, "Soup", &["Carrot"]).await?;
        create_test_meal(&catalog, MealCategory::Dinner, "Pasta", &["Tomato", "Pasta"]).await?;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping.txt");

        let mut script = String::from("plan\n");
        for day in DayOfWeek::ALL {
            let breakfast = if day == DayOfWeek::Monday {
                // First answer is not a breakfast, second is
                "Soup\nOmelette"
            } else if day == DayOfWeek::Tuesday {
                "Omelette"
            } else {
                "Toast"
            };
            script.push_str(&format!("{breakfast}\nSoup\nPasta\n"));
        }
        script.push_str(&format!("save\n{}\nexit\n", path.display()));

        let output = run_script(data, &script).await?;

        assert!(output.contains("Monday\nOmelette\nToast\nChoose the breakfast for Monday from the list above:\n"));
        assert_eq!(
            output
                .matches("This meal doesn’t exist. Choose a meal from the list above.")
                .count(),
            1
        );
        assert!(output.contains("Yeah! We planned the meals for Sunday."));
        assert!(output.contains("Monday\nBreakfast: Omelette\nLunch: Soup\nDinner: Pasta\n\nTuesday\n"));
        assert!(output.contains("Saved!"));

        let plan = planner.current_plan().await?;
        assert_eq!(plan.len(), 21);

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            saved,
            "Bread x5\nCarrot x7\nEgg x2\nMilk x2\nPasta x7\nTomato x7\n"
        );
        Ok(())
    }
}
