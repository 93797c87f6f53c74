//! Recipe data source abstraction and implementations
//!
//! The home screen never talks to a remote API directly; everything it
//! shows comes through the [`RecipeDataSource`] trait. [`MealDbSource`]
//! implements it over TheMealDB's public JSON API, and [`MockSource`]
//! scripts responses for tests.
//!
//! # Examples
//!
//! ```no_run
//! use librecipebuddy::config::ApiConfig;
//! use librecipebuddy::source::{MealDbSource, RecipeDataSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MealDbSource::from_config(&ApiConfig::default())?;
//!
//! let categories = source.fetch_categories().await?;
//! println!("{} categories available", categories.len());
//!
//! let meals = source.fetch_meals_by_category("Seafood").await?;
//! for meal in meals {
//!     println!("{} ({})", meal.name, meal.id);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::{Category, Meal, MealSummary};

pub mod mealdb;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

pub use mealdb::MealDbSource;
pub use mock::MockSource;

/// Read-only access to a recipe catalog
///
/// Implementations cover the three lookups the home screen needs. All
/// methods take `&self`; implementations are expected to be cheap to share
/// behind an `Arc` and safe to call concurrently.
#[async_trait]
pub trait RecipeDataSource: Send + Sync {
    /// Fetch all recipe categories.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Network` if the catalog cannot be reached and
    /// `SourceError::Decode` if the response cannot be understood.
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError>;

    /// Fetch a randomly chosen meal, used for the featured spot.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Network` on transport failure and
    /// `SourceError::Decode` if the response carries no usable meal.
    async fn fetch_random_meal(&self) -> Result<Meal, SourceError>;

    /// Fetch the meals belonging to the named category.
    ///
    /// An unknown category is not an error; it resolves to an empty list.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Network` on transport failure and
    /// `SourceError::Decode` if the response cannot be understood.
    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, SourceError>;
}
