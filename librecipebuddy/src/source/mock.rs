//! Mock data source for testing
//!
//! This module provides a scriptable data source that can simulate
//! successes, failures and slow responses without network access. Each
//! operation has its own response queue; responses are played back in
//! order and the last one repeats, so a test can script a failure
//! followed by a recovery, or two fetches that resolve out of order.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::SourceError;
use crate::source::RecipeDataSource;
use crate::types::{Category, Meal, MealSummary};

type Scripted<T> = (Duration, Result<T, SourceError>);

struct ResponseScript<T> {
    queue: VecDeque<Scripted<T>>,
    calls: usize,
}

impl<T: Clone> ResponseScript<T> {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            calls: 0,
        }
    }

    fn push(&mut self, delay: Duration, result: Result<T, SourceError>) {
        self.queue.push_back((delay, result));
    }

    /// Next scripted response; the final entry keeps repeating.
    fn next(&mut self, operation: &str) -> Scripted<T> {
        self.calls += 1;
        if self.queue.len() > 1 {
            if let Some(entry) = self.queue.pop_front() {
                return entry;
            }
        }
        match self.queue.front() {
            Some(entry) => entry.clone(),
            None => (
                Duration::ZERO,
                Err(SourceError::Network(format!(
                    "no scripted response for {}",
                    operation
                ))),
            ),
        }
    }
}

struct MockState {
    categories: ResponseScript<Vec<Category>>,
    random_meal: ResponseScript<Meal>,
    category_meals: ResponseScript<Vec<MealSummary>>,
    requested_categories: Vec<String>,
}

impl MockState {
    fn new() -> Self {
        Self {
            categories: ResponseScript::new(),
            random_meal: ResponseScript::new(),
            category_meals: ResponseScript::new(),
            requested_categories: Vec::new(),
        }
    }
}

/// Scriptable in-memory data source for tests
///
/// Clones share the same script and counters, so a test can keep one
/// handle for scripting and inspection while the orchestrator owns
/// another. An operation with no scripted response fails with a network
/// error naming the operation.
#[derive(Clone)]
pub struct MockSource {
    state: Arc<Mutex<MockState>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::new())),
        }
    }

    /// Queue a response for `fetch_categories`.
    pub fn script_categories(&self, result: Result<Vec<Category>, SourceError>) {
        self.script_categories_after(Duration::ZERO, result);
    }

    /// Queue a response for `fetch_categories` delivered after `delay`.
    pub fn script_categories_after(
        &self,
        delay: Duration,
        result: Result<Vec<Category>, SourceError>,
    ) {
        self.state.lock().unwrap().categories.push(delay, result);
    }

    /// Queue a response for `fetch_random_meal`.
    pub fn script_random_meal(&self, result: Result<Meal, SourceError>) {
        self.script_random_meal_after(Duration::ZERO, result);
    }

    /// Queue a response for `fetch_random_meal` delivered after `delay`.
    pub fn script_random_meal_after(&self, delay: Duration, result: Result<Meal, SourceError>) {
        self.state.lock().unwrap().random_meal.push(delay, result);
    }

    /// Queue a response for `fetch_meals_by_category`.
    pub fn script_category_meals(&self, result: Result<Vec<MealSummary>, SourceError>) {
        self.script_category_meals_after(Duration::ZERO, result);
    }

    /// Queue a response for `fetch_meals_by_category` delivered after `delay`.
    pub fn script_category_meals_after(
        &self,
        delay: Duration,
        result: Result<Vec<MealSummary>, SourceError>,
    ) {
        self.state.lock().unwrap().category_meals.push(delay, result);
    }

    /// Number of times `fetch_categories` was called
    pub fn categories_calls(&self) -> usize {
        self.state.lock().unwrap().categories.calls
    }

    /// Number of times `fetch_random_meal` was called
    pub fn random_meal_calls(&self) -> usize {
        self.state.lock().unwrap().random_meal.calls
    }

    /// Number of times `fetch_meals_by_category` was called
    pub fn category_meals_calls(&self) -> usize {
        self.state.lock().unwrap().category_meals.calls
    }

    /// Category names passed to `fetch_meals_by_category`, in call order
    pub fn requested_categories(&self) -> Vec<String> {
        self.state.lock().unwrap().requested_categories.clone()
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeDataSource for MockSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError> {
        let (delay, result) = self
            .state
            .lock()
            .unwrap()
            .categories
            .next("fetch_categories");
        if !delay.is_zero() {
            sleep(delay).await;
        }
        result
    }

    async fn fetch_random_meal(&self) -> Result<Meal, SourceError> {
        let (delay, result) = self
            .state
            .lock()
            .unwrap()
            .random_meal
            .next("fetch_random_meal");
        if !delay.is_zero() {
            sleep(delay).await;
        }
        result
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, SourceError> {
        let (delay, result) = {
            let mut state = self.state.lock().unwrap();
            state.requested_categories.push(category.to_string());
            state.category_meals.next("fetch_meals_by_category")
        };
        if !delay.is_zero() {
            sleep(delay).await;
        }
        result
    }
}
