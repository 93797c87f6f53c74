//! TheMealDB API client
//!
//! HTTP implementation of [`RecipeDataSource`] over TheMealDB's free JSON
//! API. Transport failures map to `SourceError::Network`; anything wrong
//! with a response body maps to `SourceError::Decode`. Body parsing is
//! factored into plain functions so it can be tested without a server.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ConfigError, SourceError};
use crate::source::RecipeDataSource;
use crate::types::{Category, Meal, MealSummary};

/// Public v1 endpoint with the demo API key baked into the path.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// [`RecipeDataSource`] backed by TheMealDB
pub struct MealDbSource {
    client: Client,
    base_url: String,
}

impl MealDbSource {
    /// Build a source from the `[api]` section of the configuration.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_text(&self, path_and_query: &str) -> Result<String, SourceError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!(%url, "requesting");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Network(format!(
                "{} answered HTTP {}",
                url, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("failed to read body from {}: {}", url, e)))
    }
}

#[async_trait]
impl RecipeDataSource for MealDbSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError> {
        let body = self.get_text("categories.php").await?;
        let categories = parse_categories(&body)?;
        debug!(count = categories.len(), "categories fetched");
        Ok(categories)
    }

    async fn fetch_random_meal(&self) -> Result<Meal, SourceError> {
        let body = self.get_text("random.php").await?;
        parse_random_meal(&body)
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, SourceError> {
        let query = format!("filter.php?c={}", encode_query_value(category));
        let body = self.get_text(&query).await?;
        let meals = parse_category_meals(&body)?;
        debug!(category, count = meals.len(), "category meals fetched");
        Ok(meals)
    }
}

/// Minimal query-value encoding for the characters category names can carry.
fn encode_query_value(value: &str) -> String {
    value.replace(' ', "%20").replace('&', "%26")
}

// Wire shapes as TheMealDB serves them. Unknown fields (the endless
// strIngredientN/strMeasureN columns) are ignored on decode.

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<WireCategory>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    #[serde(rename = "idCategory")]
    id: String,
    #[serde(rename = "strCategory")]
    name: String,
    #[serde(rename = "strCategoryThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    description: Option<String>,
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            id: wire.id,
            name: wire.name,
            thumbnail_url: wire.thumbnail.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<WireMeal>>,
}

#[derive(Debug, Deserialize)]
struct WireMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
}

impl From<WireMeal> for Meal {
    fn from(wire: WireMeal) -> Self {
        Meal {
            id: wire.id,
            name: wire.name,
            category: wire.category.unwrap_or_default(),
            area: wire.area.unwrap_or_default(),
            thumbnail_url: wire.thumbnail.unwrap_or_default(),
            instructions: wire.instructions,
            tags: wire.tags,
            youtube_url: wire.youtube,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FilterResponse {
    meals: Option<Vec<WireMealSummary>>,
}

#[derive(Debug, Deserialize)]
struct WireMealSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
}

impl From<WireMealSummary> for MealSummary {
    fn from(wire: WireMealSummary) -> Self {
        MealSummary {
            id: wire.id,
            name: wire.name,
            thumbnail_url: wire.thumbnail.unwrap_or_default(),
        }
    }
}

fn parse_categories(body: &str) -> Result<Vec<Category>, SourceError> {
    let response: CategoriesResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::Decode(format!("malformed categories response: {}", e)))?;
    Ok(response
        .categories
        .into_iter()
        .map(Category::from)
        .collect())
}

fn parse_random_meal(body: &str) -> Result<Meal, SourceError> {
    let response: MealsResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::Decode(format!("malformed meal response: {}", e)))?;
    response
        .meals
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(Meal::from)
        .ok_or_else(|| SourceError::Decode("meal response carried no meal".to_string()))
}

fn parse_category_meals(body: &str) -> Result<Vec<MealSummary>, SourceError> {
    let response: FilterResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::Decode(format!("malformed filter response: {}", e)))?;
    // The API answers {"meals": null} for a category with no entries.
    Ok(response
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(MealSummary::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        let body = r#"{
            "categories": [
                {
                    "idCategory": "1",
                    "strCategory": "Beef",
                    "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
                    "strCategoryDescription": "Beef is the culinary name for meat from cattle."
                },
                {
                    "idCategory": "2",
                    "strCategory": "Chicken",
                    "strCategoryThumb": "https://www.themealdb.com/images/category/chicken.png",
                    "strCategoryDescription": "Chicken is a type of domesticated fowl."
                }
            ]
        }"#;

        let categories = parse_categories(body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "1");
        assert_eq!(categories[0].name, "Beef");
        assert_eq!(
            categories[0].thumbnail_url,
            "https://www.themealdb.com/images/category/beef.png"
        );
        assert!(categories[0].description.starts_with("Beef is"));
        assert_eq!(categories[1].name, "Chicken");
    }

    #[test]
    fn test_parse_categories_malformed() {
        let err = parse_categories("not json").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
        assert!(err.message().contains("malformed categories response"));

        let err = parse_categories(r#"{"unexpected": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_parse_random_meal_ignores_extra_fields() {
        let body = r#"{
            "meals": [
                {
                    "idMeal": "52874",
                    "strMeal": "Beef and Mustard Pie",
                    "strCategory": "Beef",
                    "strArea": "British",
                    "strInstructions": "Preheat the oven to 150C.",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/sytuqu.jpg",
                    "strTags": "Meat,Pie",
                    "strYoutube": "https://www.youtube.com/watch?v=nMyBC9staMU",
                    "strIngredient1": "Beef",
                    "strMeasure1": "1kg"
                }
            ]
        }"#;

        let meal = parse_random_meal(body).unwrap();
        assert_eq!(meal.id, "52874");
        assert_eq!(meal.name, "Beef and Mustard Pie");
        assert_eq!(meal.category, "Beef");
        assert_eq!(meal.area, "British");
        assert_eq!(meal.tags, Some("Meat,Pie".to_string()));
        assert_eq!(
            meal.instructions.as_deref(),
            Some("Preheat the oven to 150C.")
        );
    }

    #[test]
    fn test_parse_random_meal_nullable_fields_become_empty() {
        let body = r#"{
            "meals": [
                {
                    "idMeal": "90000",
                    "strMeal": "Mystery Stew",
                    "strCategory": null,
                    "strArea": null,
                    "strMealThumb": null,
                    "strInstructions": null,
                    "strTags": null,
                    "strYoutube": null
                }
            ]
        }"#;

        let meal = parse_random_meal(body).unwrap();
        assert_eq!(meal.category, "");
        assert_eq!(meal.area, "");
        assert_eq!(meal.thumbnail_url, "");
        assert_eq!(meal.instructions, None);
    }

    #[test]
    fn test_parse_random_meal_missing_meal_is_decode_error() {
        let err = parse_random_meal(r#"{"meals": null}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
        assert_eq!(err.message(), "meal response carried no meal");

        let err = parse_random_meal(r#"{"meals": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_parse_category_meals() {
        let body = r#"{
            "meals": [
                {
                    "strMeal": "Beef and Mustard Pie",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/sytuqu.jpg",
                    "idMeal": "52874"
                },
                {
                    "strMeal": "Beef and Oyster pie",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/wrssvt.jpg",
                    "idMeal": "52878"
                }
            ]
        }"#;

        let meals = parse_category_meals(body).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, "52874");
        assert_eq!(meals[1].name, "Beef and Oyster pie");
    }

    #[test]
    fn test_parse_category_meals_null_is_empty_list() {
        let meals = parse_category_meals(r#"{"meals": null}"#).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("Beef"), "Beef");
        assert_eq!(encode_query_value("Side Dish"), "Side%20Dish");
        assert_eq!(encode_query_value("Fish & Chips"), "Fish%20%26%20Chips");
    }

    #[test]
    fn test_from_config_trims_trailing_slash() {
        let api = ApiConfig {
            base_url: "https://example.com/api/".to_string(),
            timeout_secs: 5,
        };
        let source = MealDbSource::from_config(&api).unwrap();
        assert_eq!(source.base_url, "https://example.com/api");
    }
}
