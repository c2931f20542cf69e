//! CLI module for EasyRecipe
//!
//! Provides command-line interface parsing and handling for the easyrecipe binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;

pub use commands::run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EasyRecipe - recipes, favorites and shopping list from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "easyrecipe",
    version,
    about = "EasyRecipe - browse recipes, keep favorites and build a shopping list",
    long_about = "Terminal client for the ReceitaFacil recipe API.\n\n\
                  The first command that needs an identity (favorite, shopping add, ...)\n\
                  registers a placeholder user and stores its id locally.",
    after_help = "EXAMPLES:\n    \
                  easyrecipe home                           # Recipe of the day and categories\n    \
                  easyrecipe search chicken                 # Search by name\n    \
                  easyrecipe show 52772                     # Recipe detail\n    \
                  easyrecipe shopping add-recipe 52772      # Add its ingredients to the list\n    \
                  easyrecipe --api-url http://api:8000 home # Use another API"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "easyrecipe.toml", global = true)]
    pub config: PathBuf,

    /// API base URL (overrides config file and EASYRECIPE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the recipe of the day, categories and the first category's recipes
    Home,

    /// Search recipes by name
    Search {
        /// Search term
        term: String,
    },

    /// List recipes in a category
    Category {
        /// Category name (e.g. Beef)
        name: String,
    },

    /// Show a recipe with ingredients, instructions and video
    Show {
        /// Recipe id
        id: String,
    },

    /// Add a recipe to favorites, or remove it if already there
    Favorite {
        /// Recipe id
        id: String,
    },

    /// Manage favorites
    #[command(subcommand)]
    Favorites(FavoritesCommands),

    /// Manage the shopping list
    #[command(subcommand)]
    Shopping(ShoppingCommands),

    /// Show the stored identity
    Whoami,
}

/// Favorites subcommands
#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List favorite recipes
    List,

    /// Remove a favorite by its favorite id
    Remove {
        /// Favorite id (as shown by `favorites list`)
        id: i64,
    },
}

/// Shopping list subcommands
#[derive(Subcommand, Debug)]
pub enum ShoppingCommands {
    /// Show the list grouped by recipe
    List,

    /// Add an item manually
    Add {
        /// Ingredient name
        ingredient: String,

        /// Quantity (e.g. "2 cups")
        #[arg(short, long)]
        quantity: Option<String>,
    },

    /// Flip an item's purchased flag
    Toggle {
        /// Item id
        id: i64,
    },

    /// Remove an item
    Remove {
        /// Item id
        id: i64,
    },

    /// Remove every item
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the unpurchased items as plain text
    Copy,

    /// Add all ingredients of a recipe
    AddRecipe {
        /// Recipe id
        id: String,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
