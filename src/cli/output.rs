//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the EasyRecipe CLI.

use crate::types::{RecipeSummary, ShoppingItem};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the EasyRecipe banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}\n",
                "EasyRecipe".bright_green().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\n   EasyRecipe v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a subheader
    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    /// Print a plain indented paragraph
    pub fn paragraph(&self, text: &str) {
        println!("    {}", text);
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a recipe as `id  title  [category, area]`
    pub fn recipe(&self, recipe: &RecipeSummary) {
        let badges = recipe_badges(recipe);
        if self.colored {
            println!(
                "    {:>6}  {} {}",
                recipe.id.dimmed(),
                recipe.title.bright_white(),
                badges.cyan()
            );
        } else {
            println!("    {:>6}  {} {}", recipe.id, recipe.title, badges);
        }
    }

    /// Print a shopping item with its purchased checkbox
    pub fn shopping_item(&self, item: &ShoppingItem) {
        let line = item.display_line();
        if self.colored {
            if item.purchased {
                println!(
                    "    {} {:>5}  {}",
                    "[x]".green(),
                    item.id.dimmed(),
                    line.dimmed().strikethrough()
                );
            } else {
                println!("    {} {:>5}  {}", "[ ]", item.id.dimmed(), line);
            }
        } else {
            let mark = if item.purchased { "[x]" } else { "[ ]" };
            println!("    {} {:>5}  {}", mark, item.id, line);
        }
    }

    /// Prompt for confirmation (returns true if user confirms)
    pub fn confirm(&self, message: &str) -> bool {
        if self.colored {
            print!(
                "  {} {} [y/N]: ",
                "?".bright_yellow().bold(),
                message.bright_white()
            );
        } else {
            print!("  [?] {} [y/N]: ", message);
        }

        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_ok() {
            let input = input.trim().to_lowercase();
            input == "y" || input == "yes"
        } else {
            false
        }
    }

    /// Print a table header row
    pub fn table_header(&self, columns: &[&str]) {
        let header: String = columns
            .iter()
            .map(|c| format!("{:<15}", c))
            .collect::<Vec<_>>()
            .join(" ");
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * 16).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * 16));
        }
    }

    /// Print a table row
    pub fn table_row(&self, values: &[&str]) {
        let row: String = values
            .iter()
            .map(|v| format!("{:<15}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {}", row);
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

/// `[category, area]`, or empty when neither is known.
fn recipe_badges(recipe: &RecipeSummary) -> String {
    let badges: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
        .into_iter()
        .flatten()
        .filter(|b| !b.is_empty())
        .collect();
    if badges.is_empty() {
        String::new()
    } else {
        format!("[{}]", badges.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(category: Option<&str>, area: Option<&str>) -> RecipeSummary {
        RecipeSummary {
            id: "52772".into(),
            title: "Teriyaki Chicken Casserole".into(),
            thumbnail: None,
            category: category.map(String::from),
            area: area.map(String::from),
        }
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
        assert!(Output::default().colored);
    }

    #[test]
    fn test_recipe_badges() {
        assert_eq!(
            recipe_badges(&recipe(Some("Chicken"), Some("Japanese"))),
            "[Chicken, Japanese]"
        );
        assert_eq!(recipe_badges(&recipe(None, Some("Japanese"))), "[Japanese]");
        assert_eq!(recipe_badges(&recipe(None, None)), "");
    }

    #[test]
    fn test_output_methods_no_panic() {
        let item = ShoppingItem {
            id: 7,
            user_id: None,
            ingredient: "Garlic".into(),
            quantity: Some("2 cloves".into()),
            purchased: true,
            recipe_name: None,
        };

        for output in [Output::no_color(), Output::new()] {
            output.banner();
            output.success("test success");
            output.info("test info");
            output.warning("test warning");
            output.error("test error");
            output.header("Test Header");
            output.subheader("Test Subheader");
            output.kv("key", "value");
            output.list_item("item");
            output.paragraph("paragraph");
            output.hint("hint message");
            output.recipe(&recipe(Some("Chicken"), None));
            output.shopping_item(&item);
            output.table_header(&["Id", "Recipe"]);
            output.table_row(&["1", "Teriyaki Chicken Casserole"]);
            output.newline();
        }
    }
}
