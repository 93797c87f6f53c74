//! Observable state for the home screen
//!
//! Every piece of remote data on the home screen lives in its own
//! [`FetchState`] slot. Consumers render whatever the current snapshot
//! says; failures are ordinary states, not bubbled-up errors.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Meal, MealSummary};

/// Category selected before the user has picked anything.
pub const DEFAULT_CATEGORY: &str = "Beef";

/// Lifecycle of one independently fetched piece of data.
///
/// A slot starts [`Idle`](FetchState::Idle), moves to
/// [`Loading`](FetchState::Loading) when a fetch is issued, and settles in
/// either [`Success`](FetchState::Success) or [`Error`](FetchState::Error).
/// A later fetch for the same slot goes through `Loading` again, so stale
/// data is never shown as current.
///
/// ```
/// use librecipebuddy::FetchState;
///
/// let slot: FetchState<Vec<String>> = FetchState::Error("timeout".to_string());
/// let label = match &slot {
///     FetchState::Idle => "nothing yet".to_string(),
///     FetchState::Loading => "fetching".to_string(),
///     FetchState::Success(items) => format!("{} items", items.len()),
///     FetchState::Error(msg) => format!("failed: {}", msg),
/// };
/// assert_eq!(label, "failed: timeout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    /// No fetch has been issued for this slot.
    Idle,
    /// A fetch is in flight; any previous value is no longer current.
    Loading,
    /// The most recent fetch resolved with this value.
    Success(T),
    /// The most recent fetch failed; the payload is the failure description.
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    /// The resolved value, if this slot holds one.
    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure description, if this slot holds one.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// One consistent snapshot of everything the home screen shows.
///
/// The three slots are fetched and fail independently; a broken featured
/// meal never takes the category list down with it. `selected_category`
/// is plain UI state and always holds a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    pub categories: FetchState<Vec<Category>>,
    pub featured: FetchState<Meal>,
    pub category_meals: FetchState<Vec<MealSummary>>,
    pub selected_category: String,
}

impl HomeState {
    /// Fresh state with every slot idle and the given category selected.
    pub fn new(selected_category: impl Into<String>) -> Self {
        Self {
            categories: FetchState::Idle,
            featured: FetchState::Idle,
            category_meals: FetchState::Idle,
            selected_category: selected_category.into(),
        }
    }

    /// True while any slot has a fetch in flight.
    pub fn is_loading(&self) -> bool {
        self.categories.is_loading()
            || self.featured.is_loading()
            || self.category_meals.is_loading()
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}
