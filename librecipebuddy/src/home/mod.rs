//! Home screen orchestration
//!
//! [`HomeService`] owns the canonical [`HomeState`] and keeps it current
//! while fetches come and go. Operations return immediately: they flip the
//! affected slot to `Loading`, spawn the fetch, and let the result land in
//! the state whenever it resolves. Consumers watch the state through
//! [`HomeService::subscribe`] and render whatever the latest snapshot says.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use librecipebuddy::config::ApiConfig;
//! use librecipebuddy::{HomeService, MealDbSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MealDbSource::from_config(&ApiConfig::default())?;
//! let service = HomeService::new(Arc::new(source));
//! let mut updates = service.subscribe();
//!
//! service.refresh_all();
//! while updates.borrow_and_update().is_loading() {
//!     if updates.changed().await.is_err() {
//!         break;
//!     }
//! }
//!
//! let state = service.state();
//! if let Some(categories) = state.categories.success() {
//!     println!("{} categories", categories.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod state;

pub use state::{FetchState, HomeState, DEFAULT_CATEGORY};

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::source::RecipeDataSource;

/// Orchestrator for the home screen
///
/// Cheap to clone; clones share the same state and data source. Fetches
/// run as spawned tasks, so every operation must be called from within a
/// Tokio runtime.
///
/// When fetches for the same slot overlap, each one overwrites the slot
/// when it resolves; whichever resolves last wins.
#[derive(Clone)]
pub struct HomeService {
    source: Arc<dyn RecipeDataSource>,
    state: Arc<watch::Sender<HomeState>>,
}

impl HomeService {
    /// Create a service with the default category selected.
    pub fn new(source: Arc<dyn RecipeDataSource>) -> Self {
        Self::with_category(source, DEFAULT_CATEGORY)
    }

    /// Create a service with a specific category selected.
    pub fn with_category(source: Arc<dyn RecipeDataSource>, category: impl Into<String>) -> Self {
        let (state, _) = watch::channel(HomeState::new(category));
        Self {
            source,
            state: Arc::new(state),
        }
    }

    /// Watch the state. The receiver starts at the current snapshot and is
    /// marked changed on every state update.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    /// True while any slot has a fetch in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Currently selected category name.
    pub fn selected_category(&self) -> String {
        self.state.borrow().selected_category.clone()
    }

    /// Reload everything: categories, the featured meal, and the meals of
    /// the currently selected category. Each slot flips to `Loading` with
    /// its own notification; the three fetches run concurrently and resolve
    /// independently.
    pub fn refresh_all(&self) {
        info!("refreshing home screen");
        let category = self.selected_category();
        self.load_categories();
        self.load_featured_meal();
        self.load_meals_by_category(&category);
    }

    /// Reload the category list only.
    pub fn load_categories(&self) {
        info!("loading categories");
        self.state.send_modify(|s| s.categories = FetchState::Loading);
        self.spawn_categories_fetch();
    }

    /// Reload the featured meal only. Each call fetches a fresh random meal.
    pub fn load_featured_meal(&self) {
        info!("loading featured meal");
        self.state.send_modify(|s| s.featured = FetchState::Loading);
        self.spawn_featured_fetch();
    }

    /// Reload the meal list for `category` without changing the selection.
    pub fn load_meals_by_category(&self, category: &str) {
        info!(category, "loading category meals");
        self.state
            .send_modify(|s| s.category_meals = FetchState::Loading);
        self.spawn_meals_fetch(category.to_string());
    }

    /// Make `category` the selection and load its meals. The selection
    /// updates synchronously; the meal list arrives later. Selecting the
    /// already selected category still refetches.
    pub fn select_category(&self, category: &str) {
        info!(category, "category selected");
        self.state
            .send_modify(|s| s.selected_category = category.to_string());
        self.load_meals_by_category(category);
    }

    fn spawn_categories_fetch(&self) {
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.source.fetch_categories().await;
            let next = resolved("categories", outcome);
            this.state.send_modify(|s| s.categories = next);
        });
    }

    fn spawn_featured_fetch(&self) {
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.source.fetch_random_meal().await;
            let next = resolved("featured meal", outcome);
            this.state.send_modify(|s| s.featured = next);
        });
    }

    fn spawn_meals_fetch(&self, category: String) {
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.source.fetch_meals_by_category(&category).await;
            let next = resolved("category meals", outcome);
            this.state.send_modify(|s| s.category_meals = next);
        });
    }
}

/// Fold a fetch outcome into slot state. Failures become data; the slot
/// carries the bare cause description, not the error kind.
fn resolved<T>(slot: &str, outcome: Result<T, SourceError>) -> FetchState<T> {
    match outcome {
        Ok(value) => {
            debug!("{} fetch resolved", slot);
            FetchState::Success(value)
        }
        Err(e) => {
            warn!("{} fetch failed: {}", slot, e);
            FetchState::Error(e.message().to_string())
        }
    }
}
