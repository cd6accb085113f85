//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The item fetch
//! transitions live on the plain `ItemsState` so they can be exercised without a runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{Item, Job};

/// Items page state, written and read as one unit
#[derive(Clone, Debug, PartialEq)]
pub struct ItemsState {
    /// Items from the last successful fetch
    pub list: Vec<Item>,
    /// An items fetch is in flight
    pub loading: bool,
    /// Message from the last failed items fetch
    pub error: Option<String>,
    /// Generation of the most recent items fetch
    pub generation: u64,
}

impl Default for ItemsState {
    /// Nothing fetched yet, so the first frame shows the spinner
    fn default() -> Self {
        Self {
            list: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl ItemsState {
    /// Start an items fetch and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a finished fetch. Returns `false` (and changes nothing) when a
    /// newer fetch has started since `generation` was issued.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Item>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.list = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        true
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Item fetch state; jobs writes never touch it
    pub items: ItemsState,
    /// All jobs known to the jobs panel
    pub jobs: Vec<Job>,
    /// Message from the last failed job operation
    pub jobs_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Job List Helpers
// ========================

/// Replace the job with the same id, or append it
pub fn upsert_job(jobs: &mut Vec<Job>, job: Job) {
    match jobs.iter_mut().find(|j| j.id == job.id) {
        Some(existing) => *existing = job,
        None => jobs.push(job),
    }
}

pub fn remove_job(jobs: &mut Vec<Job>, job_id: &str) {
    jobs.retain(|job| job.id != job_id);
}

/// Insert or replace a job in the store
pub fn store_upsert_job(store: &AppStore, job: Job) {
    upsert_job(&mut store.jobs().write(), job);
}

/// Remove a job from the store by ID
pub fn store_remove_job(store: &AppStore, job_id: &str) {
    remove_job(&mut store.jobs().write(), job_id);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("Task {}", id),
            description: String::new(),
            status: "pending".to_string(),
        }
    }

    fn job(id: &str, name: &str) -> Job {
        Job {
            id: id.to_string(),
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        }
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new();
        assert!(state.items.loading);
        assert!(state.items.list.is_empty());
        assert!(state.items.error.is_none());
    }

    #[test]
    fn test_successful_fetch_publishes_items() {
        let mut items = ItemsState::default();
        let generation = items.begin_fetch();
        assert!(items.finish_fetch(generation, Ok(vec![item(1), item(2)])));
        assert!(!items.loading);
        assert_eq!(items.list.len(), 2);
        assert!(items.error.is_none());
    }

    #[test]
    fn test_failed_fetch_sets_error_and_clears_loading() {
        let mut items = ItemsState::default();
        let generation = items.begin_fetch();
        let err = ApiError::Status { action: "fetch items", status: 500 };
        assert!(items.finish_fetch(generation, Err(err)));
        assert!(!items.loading);
        assert_eq!(items.error.as_deref(), Some("Failed to fetch items"));
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut items = ItemsState::default();
        let generation = items.begin_fetch();
        items.finish_fetch(generation, Err(ApiError::Network("Failed to fetch".to_string())));
        assert!(items.error.is_some());

        let retry = items.begin_fetch();
        assert!(items.loading);
        assert!(items.error.is_none());

        assert!(items.finish_fetch(retry, Ok(vec![item(1)])));
        assert!(!items.loading);
        assert!(items.error.is_none());
        assert_eq!(items.list, vec![item(1)]);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut items = ItemsState::default();
        let first = items.begin_fetch();
        let second = items.begin_fetch();

        assert!(items.finish_fetch(second, Ok(vec![item(2)])));
        assert!(!items.finish_fetch(first, Ok(vec![item(1), item(9)])));

        assert_eq!(items.list, vec![item(2)]);
        assert!(!items.loading);
    }

    #[test]
    fn test_stale_fetch_does_not_clear_loading() {
        let mut items = ItemsState::default();
        let first = items.begin_fetch();
        items.begin_fetch();
        assert!(!items.finish_fetch(first, Ok(vec![])));
        assert!(items.loading);
    }

    #[test]
    fn test_refetch_replaces_items_wholesale() {
        let mut items = ItemsState::default();
        let generation = items.begin_fetch();
        items.finish_fetch(generation, Ok(vec![item(1), item(2)]));
        let generation = items.begin_fetch();
        items.finish_fetch(generation, Ok(vec![item(3)]));
        assert_eq!(items.list, vec![item(3)]);
    }

    #[test]
    fn test_upsert_and_remove_job() {
        let mut jobs = vec![job("a", "Acme")];
        upsert_job(&mut jobs, job("b", "Globex"));
        upsert_job(&mut jobs, job("a", "Acme Corp"));
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].name, "Acme Corp");

        remove_job(&mut jobs, "a");
        assert_eq!(jobs, vec![job("b", "Globex")]);
    }
}
