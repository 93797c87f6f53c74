//! recipe-home - Render the recipe browser home screen
//!
//! Unix-style tool that loads the home screen once and prints it.

use std::sync::Arc;

use clap::Parser;
use librecipebuddy::{
    logging, Config, FetchState, HomeService, HomeState, Meal, MealDbSource, RecipeBuddyError,
    Result,
};

#[derive(Parser, Debug)]
#[command(name = "recipe-home")]
#[command(version)]
#[command(about = "Browse the recipe home screen from the terminal")]
#[command(long_about = "\
recipe-home - Render the recipe browser home screen

DESCRIPTION:
    recipe-home loads the recipe browser's home screen and prints it once:
    the list of meal categories, a randomly featured meal, and the meals in
    the selected category. The three sections load independently, so a
    section that fails is shown with its error while the rest render
    normally.

USAGE EXAMPLES:
    # Load the home screen with the configured default category
    recipe-home

    # Browse a different category
    recipe-home --category Seafood

    # Machine-readable output for scripting
    recipe-home --format json

CONFIGURATION:
    Configuration file: ~/.config/recipebuddy/config.toml

    Override with environment variables:
        RECIPEBUDDY_CONFIG        - Path to config file
        RECIPEBUDDY_LOG_FORMAT    - Log format: text, json, or pretty
        RECIPEBUDDY_LOG_LEVEL     - Log level filter (e.g. info, debug)

EXIT CODES:
    0 - Success (sections that failed are shown with their error)
    1 - Every section failed to load
    2 - Configuration error
    3 - Invalid input (bad format or category)

For more information, visit: https://github.com/recipebuddy/recipebuddy
")]
struct Cli {
    /// Category to browse instead of the configured default
    #[arg(short, long)]
    category: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    #[arg(help = "Enable verbose logging to stderr (useful for debugging)")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    logging::init_cli(cli.verbose);

    // Run the main logic and handle errors
    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    // Validate format
    if cli.format != "text" && cli.format != "json" {
        return Err(RecipeBuddyError::InvalidInput(format!(
            "Invalid format '{}'. Must be 'text' or 'json'",
            cli.format
        )));
    }

    // Validate category
    if let Some(ref category) = cli.category {
        if category.trim().is_empty() {
            return Err(RecipeBuddyError::InvalidInput(
                "Category cannot be empty".to_string(),
            ));
        }
    }

    // Load configuration
    let config = Config::load_or_default()?;

    let source = MealDbSource::from_config(&config.api)?;
    let category = cli.category.unwrap_or(config.defaults.category);

    let service = HomeService::with_category(Arc::new(source), category);
    let mut updates = service.subscribe();

    service.refresh_all();

    // Wait until every section has settled
    while updates.borrow_and_update().is_loading() {
        if updates.changed().await.is_err() {
            break;
        }
    }

    let state = service.state();

    // Output based on format
    if cli.format == "json" {
        output_screen_json(&state);
    } else {
        output_screen_text(&state);
    }

    // The screen rendered, but nothing on it loaded
    let all_failed = state.categories.is_error()
        && state.featured.is_error()
        && state.category_meals.is_error();

    Ok(if all_failed { 1 } else { 0 })
}

/// Output the settled screen as JSON
fn output_screen_json(state: &HomeState) {
    println!("{}", serde_json::to_string_pretty(state).unwrap());
}

/// Output the settled screen as human-readable text
fn output_screen_text(state: &HomeState) {
    println!("What do you want to cook today?");
    println!();

    match &state.featured {
        FetchState::Success(meal) => {
            println!("Featured: {}{}", meal.name, format_origin(meal));
            if !meal.thumbnail_url.is_empty() {
                println!("  {}", meal.thumbnail_url);
            }
        }
        FetchState::Error(message) => println!("Featured meal unavailable: {}", message),
        FetchState::Loading => println!("Featured meal still loading"),
        FetchState::Idle => println!("Featured meal not requested"),
    }
    println!();

    match &state.categories {
        FetchState::Success(categories) => {
            println!("Categories:");
            for category in categories {
                let marker = if category.name == state.selected_category {
                    " *"
                } else {
                    ""
                };
                println!("  {}{}", category.name, marker);
            }
        }
        FetchState::Error(message) => println!("Categories unavailable: {}", message),
        FetchState::Loading => println!("Categories still loading"),
        FetchState::Idle => println!("Categories not requested"),
    }
    println!();

    match &state.category_meals {
        FetchState::Success(meals) if meals.is_empty() => {
            println!("No meals found for {}", state.selected_category);
        }
        FetchState::Success(meals) => {
            println!("{} meals ({}):", state.selected_category, meals.len());
            for meal in meals {
                println!("  {} | {}", meal.id, meal.name);
            }
        }
        FetchState::Error(message) => {
            println!(
                "{} meals unavailable: {}",
                state.selected_category, message
            );
        }
        FetchState::Loading => println!("{} meals still loading", state.selected_category),
        FetchState::Idle => println!("{} meals not requested", state.selected_category),
    }
}

/// Compose the "(Category, Area)" suffix, skipping parts the source left empty
fn format_origin(meal: &Meal) -> String {
    let parts: Vec<&str> = [meal.category.as_str(), meal.area.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}
