//! RecipeBuddy - headless home screen for a recipe browser
//!
//! This library owns the home screen's view state: three independently
//! fetched slots (the category list, a featured meal, and the selected
//! category's meals) behind an observable snapshot, fed by a pluggable
//! data source.

pub mod config;
pub mod error;
pub mod home;
pub mod logging;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{RecipeBuddyError, Result, SourceError};
pub use home::{FetchState, HomeService, HomeState, DEFAULT_CATEGORY};
pub use source::{MealDbSource, MockSource, RecipeDataSource};
pub use types::{Category, Meal, MealSummary};
