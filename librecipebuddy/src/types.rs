//! Core domain types for RecipeBuddy

use serde::{Deserialize, Serialize};

/// A recipe category, e.g. "Beef" or "Dessert".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub description: String,
}

/// A fully detailed meal, as returned by the featured-meal lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Category name; empty string when the remote record carries none.
    pub category: String,
    /// Cuisine area; empty string when the remote record carries none.
    pub area: String,
    pub thumbnail_url: String,
    pub instructions: Option<String>,
    pub tags: Option<String>,
    pub youtube_url: Option<String>,
}

/// A slim listing entry, as returned by the category filter.
///
/// The filter endpoint only carries id, name and thumbnail; the full
/// [`Meal`] requires a separate detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}
