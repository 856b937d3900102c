//! Line-based input helpers shared by the menu actions.
//!
//! Every prompt loops until it gets acceptable input. End of input surfaces as an
//! `UnexpectedEof` I/O error, which the menu loop treats as `exit`.

use super::Menu;
use crate::core::catalog::validate_name;
use crate::entities::MealCategory;
use crate::errors::Result;
use std::io::{self, BufRead, Write};

pub(crate) const CATEGORY_CHOICES: &str = "breakfast, lunch, dinner";

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Prints one line of output.
    pub(crate) fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Reads one line without its line ending.
    pub(crate) fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Reads a category, re-prompting until one of the three labels is entered.
    pub(crate) fn read_category(&mut self) -> Result<MealCategory> {
        loop {
            if let Ok(category) = self.read_line()?.parse::<MealCategory>() {
                return Ok(category);
            }
            self.say(format!("Wrong meal category! Choose from: {CATEGORY_CHOICES}."))?;
        }
    }

    /// Reads a meal name, re-prompting until it is letters and spaces only.
    pub(crate) fn read_meal_name(&mut self) -> Result<String> {
        self.say("Input the meal's name:")?;
        loop {
            let name = self.read_line()?;
            if validate_name("meal name", &name).is_ok() {
                return Ok(name);
            }
            self.say("Wrong format. Use letters only!")?;
        }
    }

    /// Reads a comma-separated ingredient list, trimming each entry.
    pub(crate) fn read_ingredients(&mut self) -> Result<Vec<String>> {
        loop {
            self.say("Input the ingredients:")?;
            let ingredients = parse_ingredients(&self.read_line()?);
            if ingredients
                .iter()
                .all(|ingredient| validate_name("ingredient", ingredient).is_ok())
            {
                return Ok(ingredients);
            }
            self.say("Wrong format. Use letters only!")?;
        }
    }
}

/// Splits a comma-separated line into trimmed ingredient names.
///
/// Empty entries are kept so that validation can reject them.
pub(crate) fn parse_ingredients(line: &str) -> Vec<String> {
    line.split(',').map(|part| part.trim().to_string()).collect()
}
